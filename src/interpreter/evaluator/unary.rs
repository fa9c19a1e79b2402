use crate::{
    ast::{Expr, UnaryOperator},
    error::EvalError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::Value,
    },
};

impl Context<'_> {
    /// Evaluates a unary operation.
    ///
    /// Negation (`-`) applies to numeric operands and preserves their
    /// kind; negating the one integer with no 64-bit counterpart is a
    /// fault. Logical NOT (`!`) applies to booleans only.
    ///
    /// # Parameters
    /// - `op`: The unary operator to apply.
    /// - `expr`: The operand expression.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` with the operation's result.
    ///
    /// # Errors
    /// - `EvalError::ExpectedNumber` when negating a non-numeric value.
    /// - `EvalError::IntegerOverflow` when negating the minimum integer.
    /// - `EvalError::ExpectedBoolean` when applying `!` to a non-boolean.
    pub(crate) fn eval_unary_op(&self,
                                op: UnaryOperator,
                                expr: &Expr,
                                line: usize)
                                -> EvalResult<Value> {
        let value = self.eval(expr)?;

        match op {
            UnaryOperator::Negate => match value {
                Value::Int(n) => n.checked_neg()
                                  .map(Value::Int)
                                  .ok_or(EvalError::IntegerOverflow { line }),
                Value::Float(x) => Ok(Value::Float(-x)),
                other => Err(EvalError::ExpectedNumber { found: other.kind(),
                                                         line }),
            },
            UnaryOperator::Not => Ok(Value::Bool(!value.as_bool(line)?)),
        }
    }
}
