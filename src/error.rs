/// Evaluation errors.
///
/// Contains all error types that can be raised while evaluating a parsed
/// condition. Evaluation errors include unknown variables or functions,
/// wrong-kind operands, division by zero, and failures reported by
/// user-supplied functions.
pub mod eval_error;
/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of a
/// rule condition. Parse errors include illegal characters, syntax
/// mistakes, unexpected tokens, and trailing input after the expression.
pub mod parse_error;

pub use eval_error::EvalError;
pub use parse_error::ParseError;

/// Any fault a single condition evaluation can surface.
///
/// `evaluate` runs the lexer, the parser, and the evaluator in one pass;
/// this enum unifies their error channels so a caller (in particular the
/// rule engine's match loop) can treat any of them as "this condition is
/// bad" while still being able to branch on the category.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The condition could not be lexed or parsed.
    Parse(ParseError),
    /// The condition parsed, but evaluation faulted.
    Eval(EvalError),
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<EvalError> for Error {
    fn from(e: EvalError) -> Self {
        Self::Eval(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Eval(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Eval(e) => Some(e),
        }
    }
}
