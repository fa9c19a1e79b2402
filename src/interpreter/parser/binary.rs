use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Parses logical OR expressions.
///
/// Handles left-associative chains of `||`, the lowest-precedence level
/// of the grammar.
///
/// Grammar: `logical_or := logical_and ("||" logical_and)*`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
/// - `eof_line`: Line reported if input ends mid-expression.
///
/// # Returns
/// A binary expression tree using `BinaryOperator::Or`.
pub fn parse_logical_or<'a, I>(tokens: &mut Peekable<I>, eof_line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_logical_and(tokens, eof_line)?;

    loop {
        if let Some((Token::PipePipe, line)) = tokens.peek() {
            let line = *line;
            tokens.next();

            let right = parse_logical_and(tokens, eof_line)?;

            left = Expr::BinaryOp { left: Box::new(left),
                                    op: BinaryOperator::Or,
                                    right: Box::new(right),
                                    line };
            continue;
        }

        break;
    }

    Ok(left)
}

/// Parses logical AND expressions.
///
/// Handles left-associative chains of `&&`. Precedence is above `||` and
/// below the equality operators.
///
/// Grammar: `logical_and := equality ("&&" equality)*`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
/// - `eof_line`: Line reported if input ends mid-expression.
///
/// # Returns
/// A binary expression tree with `BinaryOperator::And` nodes.
pub fn parse_logical_and<'a, I>(tokens: &mut Peekable<I>, eof_line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_equality(tokens, eof_line)?;

    loop {
        if let Some((Token::AmpAmp, line)) = tokens.peek() {
            let line = *line;
            tokens.next();

            let right = parse_equality(tokens, eof_line)?;

            left = Expr::BinaryOp { left: Box::new(left),
                                    op: BinaryOperator::And,
                                    right: Box::new(right),
                                    line };
            continue;
        }

        break;
    }

    Ok(left)
}

/// Parses equality expressions.
///
/// Handles left-associative chains of `==` and `!=`. Precedence is above
/// `&&` and below the relational operators.
///
/// Grammar: `equality := relational (("==" | "!=") relational)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
/// - `eof_line`: Line reported if input ends mid-expression.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_equality<'a, I>(tokens: &mut Peekable<I>, eof_line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_relational(tokens, eof_line)?;
    loop {
        if let Some((token, line)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Equal | BinaryOperator::NotEqual)
        {
            let line = *line;
            tokens.next();
            let right = parse_relational(tokens, eof_line)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses relational expressions.
///
/// Handles left-associative chains of `<`, `>`, `<=`, and `>=`.
///
/// Grammar: `relational := additive (("<" | ">" | "<=" | ">=") additive)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
/// - `eof_line`: Line reported if input ends mid-expression.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_relational<'a, I>(tokens: &mut Peekable<I>, eof_line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_additive(tokens, eof_line)?;
    loop {
        if let Some((token, line)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op,
                       BinaryOperator::Less
                       | BinaryOperator::Greater
                       | BinaryOperator::LessEqual
                       | BinaryOperator::GreaterEqual)
        {
            let line = *line;
            tokens.next();
            let right = parse_additive(tokens, eof_line)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// Grammar: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
/// - `eof_line`: Line reported if input ends mid-expression.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, eof_line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_multiplicative(tokens, eof_line)?;
    loop {
        if let Some((token, line)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            let line = *line;
            tokens.next();
            let right = parse_multiplicative(tokens, eof_line)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators: `*`, `/`, and `%`. This is the
/// highest binary precedence level; operands are unary expressions.
///
/// Grammar: `multiplicative := unary (("*" | "/" | "%") unary)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
/// - `eof_line`: Line reported if input ends mid-expression.
///
/// # Returns
/// A binary expression tree combining unary-level nodes.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>, eof_line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_unary(tokens, eof_line)?;
    loop {
        if let Some((token, line)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op,
                       BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod)
        {
            let line = *line;
            tokens.next();
            let right = parse_unary(tokens, eof_line)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token represents a binary
/// operator (`+`, `-`, `*`, `/`, `%`, comparison operators, and logical
/// operators). Returns `None` for all other tokens, including `=`, which
/// is lexed but has no place in the grammar.
///
/// # Parameters
/// - `token`: Token to convert.
///
/// # Returns
/// `Some(BinaryOperator)` if the token corresponds to a binary operator,
/// otherwise `None`.
///
/// # Example
/// ```
/// use verdict::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::Equals), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Percent => Some(BinaryOperator::Mod),
        Token::Less => Some(BinaryOperator::Less),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::LessEqual => Some(BinaryOperator::LessEqual),
        Token::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        Token::EqualEqual => Some(BinaryOperator::Equal),
        Token::BangEqual => Some(BinaryOperator::NotEqual),
        Token::AmpAmp => Some(BinaryOperator::And),
        Token::PipePipe => Some(BinaryOperator::Or),
        _ => None,
    }
}
