use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::parse_comma_separated,
        },
    },
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `-`  (numeric negation)
/// - `!`  (logical not)
///
/// Unary operators are right-associative, so an input like `!-x` is parsed
/// as `!( -x )`. Because unary parsing only runs where no left operand is
/// pending (the start of the expression, after an operator, or after `(`),
/// the same `-` token unambiguously means subtraction everywhere else.
///
/// If no unary operator is present, the function delegates to
/// [`parse_primary`].
///
/// Grammar:
/// ```text
///     unary := ("-" | "!") unary
///            | primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `eof_line`: Line reported if input ends mid-expression.
///
/// # Returns
/// An [`Expr::UnaryOp`] or a primary expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, eof_line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    if let Some((Token::Minus, line)) = tokens.peek() {
        let line = *line;
        tokens.next();
        let expr = parse_unary(tokens, eof_line)?;
        Ok(Expr::UnaryOp { op: UnaryOperator::Negate,
                           expr: Box::new(expr),
                           line })
    } else if let Some((Token::Bang, line)) = tokens.peek() {
        let line = *line;
        tokens.next();
        let expr = parse_unary(tokens, eof_line)?;
        Ok(Expr::UnaryOp { op: UnaryOperator::Not,
                           expr: Box::new(expr),
                           line })
    } else {
        parse_primary(tokens, eof_line)
    }
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and
/// include:
/// - numeric, string, and boolean literals
/// - identifiers
/// - function calls
/// - parenthesized expressions
///
/// This function does not handle unary operators. It dispatches to
/// specialized parsing functions depending on the leading token.
///
/// Grammar (simplified):
/// ```text
///     primary := literal
///              | identifier_or_call
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary
///   expression.
/// - `eof_line`: Line reported if input ends mid-expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, eof_line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let peeked = tokens.peek()
                       .ok_or(ParseError::UnexpectedEndOfInput { line: eof_line })?;

    match peeked {
        (Token::Float(..) | Token::Integer(..) | Token::Bool(..) | Token::Str(..), _) => {
            parse_literal(tokens)
        },
        (Token::LParen, _) => parse_grouping(tokens, eof_line),
        (Token::Identifier(_), _) => parse_identifier_or_call(tokens, eof_line),
        (tok, line) => Err(ParseError::UnexpectedToken { token: format!("{tok:?}"),
                                                         line:  *line, }),
    }
}

/// Parses a literal token into an [`Expr::Literal`] node.
///
/// Supported forms:
/// - Integer literals
/// - Float literals
/// - Boolean literals (`true`, `false`)
/// - String literals
///
/// # Parameters
/// - `tokens`: Token iterator positioned at a literal.
///
/// # Returns
/// An [`Expr::Literal`] containing the parsed value.
fn parse_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let (tok, line) = tokens.next().unwrap();
    let value = match tok {
        Token::Integer(n) => (*n).into(),
        Token::Float(x) => (*x).into(),
        Token::Bool(b) => (*b).into(),
        Token::Str(s) => s.clone().into(),
        _ => unreachable!(),
    };

    Ok(Expr::Literal { value, line: *line })
}

/// Parses a parenthesized expression.
///
/// Expected form `( expression )`
///
/// The function consumes the opening parenthesis, parses the enclosed
/// expression, and then requires a closing `)`. Failure to find the
/// closing parenthesis yields `ParseError::ExpectedClosingParen`.
///
/// Grouping only affects evaluation order; the inner expression is
/// returned as-is, with no wrapper node.
///
/// Grammar: `grouping := "(" expression ")"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `(`.
/// - `eof_line`: Line reported if input ends mid-expression.
///
/// # Returns
/// The inner expression.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, eof_line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let (_, line) = *tokens.next().unwrap();
    let expr = parse_expression(tokens, eof_line)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        _ => Err(ParseError::ExpectedClosingParen { line }),
    }
}

/// Parses an identifier or a function call.
///
/// Supported forms:
///
/// - identifier
/// - identifier(arg1, arg2, ...)
///
/// The function first consumes the identifier token. If the next token is
/// `(`, a function-call expression with zero or more comma-separated
/// arguments is parsed. Otherwise, the identifier is a variable
/// reference. Calls are single-level; the language has no callable values
/// (a call target is always a plain name).
///
/// # Parameters
/// - `tokens`: Token iterator positioned at an identifier.
/// - `eof_line`: Line reported if input ends mid-expression.
///
/// # Returns
/// - [`Expr::FunctionCall`] if followed by parentheses,
/// - [`Expr::Variable`] otherwise.
///
/// # Errors
/// Returns a `ParseError` if:
/// - function-call arguments fail to parse,
/// - the closing `)` is missing.
fn parse_identifier_or_call<'a, I>(tokens: &mut Peekable<I>, eof_line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let (name, line) = match tokens.next().unwrap() {
        (Token::Identifier(n), line) => (n.clone(), *line),
        _ => unreachable!(),
    };

    match tokens.peek() {
        Some((Token::LParen, _)) => {
            tokens.next();
            let args = parse_comma_separated(tokens, parse_expression, &Token::RParen, eof_line)?;
            Ok(Expr::FunctionCall { name,
                                    arguments: args,
                                    line })
        },
        _ => Ok(Expr::Variable { name, line }),
    }
}
