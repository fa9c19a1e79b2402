use std::collections::HashMap;

use crate::{ast::Expr, error::EvalError, interpreter::value::Value};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// The error type user-supplied functions may return.
///
/// Kept as a boxed trait object so callers can use whatever error type
/// they already have; the message is carried verbatim into
/// [`EvalError::FunctionFailed`].
pub type FunctionError = Box<dyn std::error::Error + Send + Sync>;

/// A user-supplied function callable from within a condition.
///
/// The callable receives the fully evaluated argument values, in source
/// order, and returns a single [`Value`] or an error. Returning an error
/// fails the evaluation of the whole condition.
pub type ExpressionFunction = Box<dyn Fn(&[Value]) -> Result<Value, FunctionError> + Send + Sync>;

/// Stores the evaluation context for a single condition evaluation.
///
/// The context borrows the variable environment and function table
/// supplied by the caller; both are read-only for the duration of the
/// evaluation and no state is carried from one evaluation to the next, so
/// evaluating the same expression against the same inputs twice produces
/// identical results.
pub struct Context<'a> {
    /// The variable environment: identifier name to value, case-sensitive.
    pub variables: &'a HashMap<String, Value>,
    /// The function table: function name to callable.
    pub functions: &'a HashMap<String, ExpressionFunction>,
}

impl<'a> Context<'a> {
    /// Creates an evaluation context over the given environment and
    /// function table.
    #[must_use]
    pub const fn new(variables: &'a HashMap<String, Value>,
                     functions: &'a HashMap<String, ExpressionFunction>)
                     -> Self {
        Self { variables, functions }
    }
    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The
    /// evaluator dispatches based on expression variant: literals,
    /// variable lookups, unary and binary operations, and function calls.
    /// Every expression yields exactly one value or a fault; there is no
    /// void result.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The computed [`Value`].
    ///
    /// # Errors
    /// Any [`EvalError`] raised by the expression: unbound identifiers,
    /// wrong-kind operands, division by zero, unknown functions, or
    /// failures from user-supplied functions.
    pub fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(value.into()),
            Expr::Variable { name, line } => self.eval_variable(name, *line),
            Expr::UnaryOp { op, expr, line } => self.eval_unary_op(*op, expr, *line),
            Expr::BinaryOp { left,
                             op,
                             right,
                             line, } => self.eval_binary_op(left, *op, right, *line),
            Expr::FunctionCall { name,
                                 arguments,
                                 line, } => self.eval_function_call(name, arguments, *line),
        }
    }

    /// Looks up a variable in the environment.
    ///
    /// An identifier absent from the environment is a fault, never `Nil`;
    /// a rule condition referring to a variable the caller forgot to bind
    /// must fail loudly rather than quietly compare against nothing.
    ///
    /// # Parameters
    /// - `name`: The identifier to resolve.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The bound [`Value`].
    ///
    /// # Errors
    /// `EvalError::UnknownVariable` if the name is not bound.
    fn eval_variable(&self, name: &str, line: usize) -> EvalResult<Value> {
        self.variables
            .get(name)
            .cloned()
            .ok_or_else(|| EvalError::UnknownVariable { name: name.to_string(),
                                                        line })
    }
}
