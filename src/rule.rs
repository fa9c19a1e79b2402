use std::sync::Arc;

use crate::interpreter::{evaluator::core::FunctionError, value::Value};

/// The callable paired with a rule.
///
/// An action receives an optional input value and produces a result or an
/// error. Actions are invoked by the caller through [`Rule::execute`],
/// outside the engine's control; matching a rule never runs its action.
pub type RuleAction = Arc<dyn Fn(Option<&Value>) -> Result<Value, FunctionError> + Send + Sync>;

/// A named rule pairing a condition expression with an action.
///
/// The condition is kept as unparsed source text and evaluated by the
/// engine during matching. A rule is immutable after construction and its
/// identity is its name; the registry enforces name uniqueness.
#[derive(Clone)]
pub struct Rule {
    name:      String,
    condition: String,
    action:    RuleAction,
}

impl Rule {
    /// Creates a rule with a trigger condition and an action to be
    /// executed when the condition is met.
    ///
    /// # Parameters
    /// - `name`: Unique rule name.
    /// - `condition`: Boolean condition expression, unparsed.
    /// - `action`: Callable run by the caller for matched rules.
    ///
    /// # Example
    /// ```
    /// use verdict::{interpreter::value::Value, rule::Rule};
    ///
    /// let rule = Rule::new("low grade", "grade < 40", |_| Ok(Value::Str("inform".into())));
    /// assert_eq!(rule.name(), "low grade");
    /// ```
    pub fn new(name: impl Into<String>,
               condition: impl Into<String>,
               action: impl Fn(Option<&Value>) -> Result<Value, FunctionError>
                       + Send
                       + Sync
                       + 'static)
               -> Self {
        Self { name:      name.into(),
               condition: condition.into(),
               action:    Arc::new(action), }
    }
    /// Returns the name of the rule.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
    /// Returns the rule's condition expression source.
    #[must_use]
    pub fn condition(&self) -> &str {
        &self.condition
    }
    /// Executes the rule's action with the given input.
    ///
    /// # Errors
    /// Returns whatever error the action itself returns.
    pub fn execute(&self, input: Option<&Value>) -> Result<Value, FunctionError> {
        (self.action)(input)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
         .field("name", &self.name)
         .field("condition", &self.condition)
         .finish_non_exhaustive()
    }
}
