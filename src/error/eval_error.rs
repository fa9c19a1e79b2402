#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a condition.
///
/// These are recoverable faults caused by the expression or its inputs.
/// Defects inside the evaluator itself are not modeled here; those panic
/// and are allowed to propagate so they are never mistaken for bad input.
pub enum EvalError {
    /// Tried to read a variable that is not bound in the environment.
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called a function that is not present in the function table.
    UnknownFunction {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A boolean operand was expected, but another kind was found.
    ExpectedBoolean {
        /// The kind of value that was found.
        found: &'static str,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A numeric operand was expected, but another kind was found.
    ExpectedNumber {
        /// The kind of value that was found.
        found: &'static str,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An operator was applied to operands of incompatible kinds.
    KindMismatch {
        /// The kind of the left operand.
        left:  &'static str,
        /// The kind of the right operand.
        right: &'static str,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Division or modulo by a zero operand.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An integer operation overflowed the 64-bit range.
    IntegerOverflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A user-supplied function returned an error.
    FunctionFailed {
        /// The name of the function.
        name:    String,
        /// The error message the function returned, carried verbatim.
        message: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name, line } => {
                write!(f, "Error on line {line}: Unknown variable: {name}.")
            },

            Self::UnknownFunction { name, line } => {
                write!(f, "Error on line {line}: Unknown function: {name}.")
            },

            Self::ExpectedBoolean { found, line } => {
                write!(f, "Error on line {line}: Expected a boolean, found {found}.")
            },

            Self::ExpectedNumber { found, line } => {
                write!(f, "Error on line {line}: Expected a number, found {found}.")
            },

            Self::KindMismatch { left, right, line } => {
                write!(f,
                       "Error on line {line}: Incompatible operand kinds: {left} and {right}.")
            },

            Self::DivisionByZero { line } => {
                write!(f, "Error on line {line}: Division by zero.")
            },

            Self::IntegerOverflow { line } => {
                write!(f, "Error on line {line}: Integer overflow.")
            },

            Self::FunctionFailed { name,
                                   message,
                                   line, } => {
                write!(f, "Error on line {line}: Function {name} failed: {message}")
            },
        }
    }
}

impl std::error::Error for EvalError {}
