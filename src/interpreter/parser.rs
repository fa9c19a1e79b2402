/// Binary expression parsing.
///
/// One function per precedence level, from logical OR at the bottom of the
/// table to multiplicative operators at the top, each building
/// left-associative [`crate::ast::Expr::BinaryOp`] chains.
pub mod binary;
/// Parser entry point and result type.
pub mod core;
/// Unary and primary expression parsing.
///
/// Handles prefix `-` and `!`, literals, variable references,
/// parenthesized grouping, and function calls.
pub mod unary;
/// Shared parsing helpers.
pub(crate) mod utils;
