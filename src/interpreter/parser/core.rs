use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::parse_logical_or},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full condition expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, logical OR, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := logical_or`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
/// - `eof_line`: Line of the last input token, reported when the stream
///   ends before the expression is complete.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, eof_line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_logical_or(tokens, eof_line)
}

/// Parses a condition expression and requires the input to be exhausted.
///
/// A rule condition is exactly one expression; anything left over after
/// the expression (for example `1 + 2 3`) is a parse fault rather than a
/// silently ignored suffix.
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
/// - `eof_line`: Line of the last input token, reported when the stream
///   ends before the expression is complete.
///
/// # Returns
/// The parsed expression node.
///
/// # Errors
/// - `UnexpectedTrailingTokens` if tokens remain after the expression.
/// - Propagates any errors from expression parsing.
pub fn parse_complete<'a, I>(tokens: &mut Peekable<I>, eof_line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let expr = parse_expression(tokens, eof_line)?;

    match tokens.peek() {
        None => Ok(expr),
        Some((tok, line)) => {
            Err(ParseError::UnexpectedTrailingTokens { token: format!("{tok:?}"),
                                                       line:  *line, })
        },
    }
}
