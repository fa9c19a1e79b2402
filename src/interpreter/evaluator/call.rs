use crate::{
    ast::Expr,
    error::EvalError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::Value,
    },
};

impl Context<'_> {
    /// Evaluates a function call.
    ///
    /// Arguments are reduced to values eagerly, left to right, before the
    /// function table is consulted; an argument fault therefore surfaces
    /// even when the function name is unknown. An error returned by the
    /// callable becomes the evaluation's fault, with its message carried
    /// verbatim.
    ///
    /// # Parameters
    /// - `name`: The function name to dispatch on.
    /// - `arguments`: The argument expressions, in source order.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The value the function returned.
    ///
    /// # Errors
    /// - Any fault raised while evaluating an argument.
    /// - `EvalError::UnknownFunction` if the name is not in the table.
    /// - `EvalError::FunctionFailed` if the callable returned an error.
    pub(crate) fn eval_function_call(&self,
                                     name: &str,
                                     arguments: &[Expr],
                                     line: usize)
                                     -> EvalResult<Value> {
        let args = arguments.iter()
                            .map(|arg| self.eval(arg))
                            .collect::<EvalResult<Vec<_>>>()?;

        let function =
            self.functions
                .get(name)
                .ok_or_else(|| EvalError::UnknownFunction { name: name.to_string(),
                                                            line })?;

        function(&args).map_err(|e| EvalError::FunctionFailed { name:    name.to_string(),
                                                                message: e.to_string(),
                                                                line })
    }
}
