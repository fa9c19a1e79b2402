use crate::{
    ast::{BinaryOperator, Expr},
    error::EvalError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::Value,
    },
};

impl Context<'_> {
    /// Evaluates a binary operation node.
    ///
    /// Logical operators are handled first because they control whether
    /// the right operand is evaluated at all; every other operator
    /// reduces both operands eagerly and dispatches by category.
    ///
    /// # Parameters
    /// - `left`: Left operand expression.
    /// - `op`: The binary operator.
    /// - `right`: Right operand expression.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` with the operation's result.
    pub(crate) fn eval_binary_op(&self,
                                 left: &Expr,
                                 op: BinaryOperator,
                                 right: &Expr,
                                 line: usize)
                                 -> EvalResult<Value> {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Or,
            Sub,
        };

        match op {
            And | Or => self.eval_logic(op, left, right, line),
            Equal | NotEqual | Less | Greater | LessEqual | GreaterEqual => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_comparison(op, &left, &right, line)
            },
            Add | Sub | Mul | Div | Mod => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_arithmetic(op, &left, &right, line)
            },
        }
    }

    /// Evaluates a logical operation with short-circuiting.
    ///
    /// The left operand is evaluated first and must be a boolean. When it
    /// already determines the result (`false` for `&&`, `true` for `||`)
    /// the right operand is not evaluated, so any function calls inside
    /// it are skipped. Operands of any other kind are a fault; the
    /// language never coerces to a truth value.
    ///
    /// # Parameters
    /// - `op`: `And` or `Or`.
    /// - `left`: Left operand expression.
    /// - `right`: Right operand expression.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing a boolean.
    pub(crate) fn eval_logic(&self,
                             op: BinaryOperator,
                             left: &Expr,
                             right: &Expr,
                             line: usize)
                             -> EvalResult<Value> {
        let lhs = self.eval(left)?.as_bool(line)?;

        match op {
            BinaryOperator::And if !lhs => Ok(Value::Bool(false)),
            BinaryOperator::Or if lhs => Ok(Value::Bool(true)),
            BinaryOperator::And | BinaryOperator::Or => {
                Ok(Value::Bool(self.eval(right)?.as_bool(line)?))
            },
            _ => unreachable!("eval_logic used with non logical operator"),
        }
    }

    /// Evaluates a comparison of the form `Value <Operator> Value`.
    ///
    /// For `Equal` and `NotEqual`, values are compared using strict
    /// same-kind equality (with `Int`/`Float` pairs promoted); cross-kind
    /// equality is a fault. For relational operators, both operands must
    /// be numeric; two integers are compared exactly, while any `Float`
    /// operand promotes the comparison to floats.
    ///
    /// # Parameters
    /// - `op`: The comparison operator.
    /// - `left`: The left-hand value.
    /// - `right`: The right-hand value.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing a boolean result.
    ///
    /// # Example
    /// ```
    /// use verdict::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::Value},
    /// };
    ///
    /// let a = Value::Int(3);
    /// let b = Value::Float(5.0);
    ///
    /// let result = Context::eval_comparison(BinaryOperator::Less, &a, &b, 1);
    ///
    /// assert_eq!(result.unwrap(), Value::Bool(true));
    /// ```
    pub fn eval_comparison(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           line: usize)
                           -> EvalResult<Value> {
        Ok(Value::Bool(match op {
                           BinaryOperator::Equal => left.strict_eq(right, line)?,
                           BinaryOperator::NotEqual => !left.strict_eq(right, line)?,

                           BinaryOperator::Less
                           | BinaryOperator::Greater
                           | BinaryOperator::LessEqual
                           | BinaryOperator::GreaterEqual => {
                               // Same-kind integers compare exactly; a float
                               // detour would lose precision above 2^53.
                               if let (Value::Int(a), Value::Int(b)) = (left, right) {
                                   match op {
                                       BinaryOperator::Less => a < b,
                                       BinaryOperator::Greater => a > b,
                                       BinaryOperator::LessEqual => a <= b,
                                       BinaryOperator::GreaterEqual => a >= b,
                                       _ => unreachable!(),
                                   }
                               } else {
                                   let left = left.as_float(line)?;
                                   let right = right.as_float(line)?;

                                   match op {
                                       BinaryOperator::Less => left < right,
                                       BinaryOperator::Greater => left > right,
                                       BinaryOperator::LessEqual => left <= right,
                                       BinaryOperator::GreaterEqual => left >= right,
                                       _ => unreachable!(),
                                   }
                               }
                           },

                           _ => unreachable!(),
                       }))
    }

    /// Evaluates an arithmetic operation.
    ///
    /// Integer operands stay integers; any `Int`/`Float` mix is promoted
    /// to floats. Division and modulo check for a zero right operand
    /// explicitly, for both integer and float operands, so a condition
    /// never produces an infinity or NaN. Integer operations that leave
    /// the 64-bit range are a fault, not a wrap or a panic. Non-numeric
    /// operands are a fault.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the computed number.
    ///
    /// # Example
    /// ```
    /// use verdict::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::Value},
    /// };
    ///
    /// let x = Value::Int(2);
    /// let y = Value::Float(1.5);
    ///
    /// let result = Context::eval_arithmetic(BinaryOperator::Add, &x, &y, 1).unwrap();
    /// assert_eq!(result, Value::Float(3.5));
    /// ```
    pub fn eval_arithmetic(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           line: usize)
                           -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mod, Mul, Sub};
        use Value::{Float, Int};

        match (left, right) {
            (Int(a), Int(b)) => {
                let result = match op {
                    Add => a.checked_add(*b),
                    Sub => a.checked_sub(*b),
                    Mul => a.checked_mul(*b),
                    Div => {
                        if *b == 0 {
                            return Err(EvalError::DivisionByZero { line });
                        }
                        a.checked_div(*b)
                    },
                    Mod => {
                        if *b == 0 {
                            return Err(EvalError::DivisionByZero { line });
                        }
                        a.checked_rem(*b)
                    },
                    _ => unreachable!(),
                };

                result.map(Int).ok_or(EvalError::IntegerOverflow { line })
            },
            (Int(_) | Float(_), Int(_) | Float(_)) => {
                let left = left.as_float(line)?;
                let right = right.as_float(line)?;

                Ok(Float(match op {
                             Add => left + right,
                             Sub => left - right,
                             Mul => left * right,
                             Div | Mod => {
                                 if right == 0.0 {
                                     return Err(EvalError::DivisionByZero { line });
                                 }
                                 if matches!(op, Div) { left / right } else { left % right }
                             },
                             _ => unreachable!(),
                         }))
            },
            (other, _) if !other.is_numeric() => {
                Err(EvalError::ExpectedNumber { found: other.kind(),
                                                line })
            },
            (_, other) => Err(EvalError::ExpectedNumber { found: other.kind(),
                                                          line }),
        }
    }
}
