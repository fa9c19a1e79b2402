use crate::{ast::LiteralValue, error::EvalError, interpreter::evaluator::core::EvalResult};

/// Represents a runtime value in the condition language.
///
/// This enum models all of the types that an expression can produce or
/// consume: booleans, integers, floats, strings, and the absence of a
/// value. The union is closed; every operator site matches exhaustively
/// over it, so a wrong-kind operand is always an explicit fault rather
/// than a forgotten case.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A boolean value (`true` or `false`).
    /// Produced by comparison operators (`<`, `==`, `!=`, etc.) and
    /// logical operations. A rule condition must evaluate to `Bool` for
    /// the rule to be considered during matching.
    Bool(bool),
    /// An integer value (64 bit signed).
    Int(i64),
    /// A numeric value (double precision floating-point).
    Float(f64),
    /// A string value.
    Str(String),
    /// The absence of a value.
    ///
    /// `Nil` is never produced by the grammar itself; it exists so that
    /// callers and user-supplied functions can express "no value" without
    /// leaving the closed union.
    Nil,
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl Value {
    /// Returns the name of the value's kind, used in diagnostics.
    ///
    /// # Example
    /// ```
    /// use verdict::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Int(3).kind(), "int");
    /// assert_eq!(Value::Nil.kind(), "nil");
    /// ```
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "string",
            Self::Nil => "nil",
        }
    }
    /// Converts the value to `bool`, or returns an error if not boolean.
    ///
    /// Used for logical operators and for the final result check on rule
    /// conditions. No other kind is coerced to `bool`; treating a number
    /// or string as a truth value in a rule condition is rejected.
    ///
    /// # Parameters
    /// - `line`: Source line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(bool)`: The boolean value.
    /// - `Err(EvalError::ExpectedBoolean)`: If not boolean.
    pub const fn as_bool(&self, line: usize) -> EvalResult<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            other => Err(EvalError::ExpectedBoolean { found: other.kind(),
                                                     line }),
        }
    }
    /// Converts the value to an `f64`, or returns an error if not numeric.
    ///
    /// Accepts `Value::Float` and `Value::Int`; integers are promoted.
    ///
    /// # Parameters
    /// - `line`: Source line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(f64)`: If the value is numeric.
    /// - `Err(EvalError::ExpectedNumber)`: If not numeric.
    ///
    /// # Example
    /// ```
    /// use verdict::interpreter::value::Value;
    ///
    /// let x = Value::Int(10);
    /// assert_eq!(x.as_float(1).unwrap(), 10.0);
    /// ```
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_float(&self, line: usize) -> EvalResult<f64> {
        match self {
            Self::Float(f) => Ok(*f),
            Self::Int(n) => Ok(*n as f64),
            other => Err(EvalError::ExpectedNumber { found: other.kind(),
                                                    line }),
        }
    }
    /// Returns `true` if the value is numeric (`Int` or `Float`).
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Int(_) | Self::Float(_))
    }
    /// Compares two values for equality under the language's rules.
    ///
    /// Equality is defined for same-kind operands only, after numeric
    /// promotion of `Int`/`Float` pairs. `Nil` equals `Nil`. Any other
    /// cross-kind pair is a fault, not `false`; silently unequal kinds
    /// would hide genuinely malformed rule conditions.
    ///
    /// # Parameters
    /// - `other`: The value to compare against.
    /// - `line`: Source line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(bool)`: Whether the operands are equal.
    /// - `Err(EvalError::KindMismatch)`: For cross-kind operands.
    ///
    /// # Example
    /// ```
    /// use verdict::interpreter::value::Value;
    ///
    /// assert!(Value::Int(2).strict_eq(&Value::Float(2.0), 1).unwrap());
    /// assert!(Value::Str("a".into()).strict_eq(&Value::Bool(true), 1).is_err());
    /// ```
    pub fn strict_eq(&self, other: &Self, line: usize) -> EvalResult<bool> {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => Ok(a == b),
            (Self::Int(a), Self::Int(b)) => Ok(a == b),
            (Self::Str(a), Self::Str(b)) => Ok(a == b),
            (Self::Nil, Self::Nil) => Ok(true),
            (Self::Float(_) | Self::Int(_), Self::Float(_) | Self::Int(_)) => {
                Ok(self.as_float(line)? == other.as_float(line)?)
            },
            (left, right) => Err(EvalError::KindMismatch { left: left.kind(),
                                                           right: right.kind(),
                                                           line }),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Nil => write!(f, "nil"),
        }
    }
}

impl From<&LiteralValue> for Value {
    fn from(lit: &LiteralValue) -> Self {
        match lit {
            LiteralValue::Integer(n) => (*n).into(),
            LiteralValue::Float(x) => (*x).into(),
            LiteralValue::Bool(b) => (*b).into(),
            LiteralValue::Str(s) => s.clone().into(),
        }
    }
}
