#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing of a rule
/// condition.
pub enum ParseError {
    /// The lexer reached a character that is not part of the language.
    IllegalCharacter {
        /// The offending source slice.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Found extra tokens after the expression should have ended.
    UnexpectedTrailingTokens {
        /// The extra/unexpected token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IllegalCharacter { token, line } => {
                write!(f, "Error on line {line}: Illegal character: {token}.")
            },

            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },

            Self::ExpectedClosingParen { line } => {
                write!(f, "Error on line {line}: Expected a closing parenthesis.")
            },

            Self::UnexpectedTrailingTokens { token, line } => {
                write!(f,
                       "Error on line {line}: Unexpected trailing token after expression: {token}.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
