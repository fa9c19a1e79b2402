use std::{
    collections::HashMap,
    sync::Mutex,
};

use crate::{
    error::Error,
    evaluate,
    interpreter::{evaluator::core::ExpressionFunction, value::Value},
    rule::Rule,
};

/// Configuration recognized by the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    /// Changes the fault policy during matching.
    ///
    /// When `false` (the default), a condition fault or a non-boolean
    /// condition result aborts the whole match with an error identifying
    /// the offending rule. When `true`, such rules are skipped silently
    /// and matching continues with the remaining rules.
    pub skip_bad_rule_during_match: bool,
}

/// A diagnostic sink the engine writes fault-path messages to.
///
/// Logging is an injected capability rather than a process-wide global;
/// it only receives messages on fault paths and has no effect on returned
/// results. The default sink writes to standard error.
pub type LogSink = Box<dyn Fn(&str) + Send + Sync>;

/// Errors surfaced by the rule registry.
#[derive(Debug)]
pub enum EngineError {
    /// `add_rule` was called with a name that is already registered.
    RuleExists {
        /// The duplicated rule name.
        name: String,
    },
    /// A condition evaluated successfully but to a non-boolean value.
    NonBooleanResult {
        /// The name of the offending rule.
        name: String,
        /// The kind of value the condition produced.
        kind: &'static str,
    },
    /// A condition faulted during evaluation.
    EvaluationFailed {
        /// The name of the offending rule.
        name:  String,
        /// The underlying evaluation fault.
        cause: Error,
    },
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RuleExists { name } => {
                write!(f, "rule name already exists: {name}")
            },

            Self::NonBooleanResult { name, kind } => {
                write!(f, "rule {name} evaluated to a non-boolean result ({kind})")
            },

            Self::EvaluationFailed { name, cause } => {
                write!(f, "rule {name} failed during match: {cause}")
            },
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::EvaluationFailed { cause, .. } => Some(cause),
            Self::RuleExists { .. } | Self::NonBooleanResult { .. } => None,
        }
    }
}

/// The rule registry.
///
/// Owns a mapping from rule name to [`Rule`] and evaluates every
/// registered condition against caller-supplied variables and functions
/// on [`Engine::match_rules`]. Both mutation and matching take the same
/// lock, so rules can be added concurrently with matching on a shared
/// engine.
pub struct Engine {
    rules:  Mutex<HashMap<String, Rule>>,
    config: Config,
    logger: LogSink,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Initializes an engine with the default configuration.
    ///
    /// By default `skip_bad_rule_during_match` is `false`, meaning a
    /// fault or non-boolean value encountered during matching aborts the
    /// match with an error.
    #[must_use]
    pub fn new() -> Self {
        Self { rules:  Mutex::new(HashMap::new()),
               config: Config::default(),
               logger: Box::new(|message| eprintln!("{message}")), }
    }
    /// Replaces the engine's configuration.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }
    /// Replaces the engine's diagnostic sink.
    #[must_use]
    pub fn with_logger(mut self, logger: LogSink) -> Self {
        self.logger = logger;
        self
    }

    /// Adds a rule to the engine.
    ///
    /// # Errors
    /// Returns `EngineError::RuleExists` if a rule with the same name is
    /// already registered, regardless of the content of either rule.
    pub fn add_rule(&self, rule: Rule) -> Result<(), EngineError> {
        let mut rules = self.rules.lock().expect("rule registry mutex poisoned");

        if rules.contains_key(rule.name()) {
            return Err(EngineError::RuleExists { name: rule.name().to_string(), });
        }

        rules.insert(rule.name().to_string(), rule);

        Ok(())
    }

    /// Iterates through all the rules of the engine and returns the
    /// matching ones.
    ///
    /// Each rule's condition is evaluated against `variables` and
    /// `functions`; rules whose condition evaluates to boolean `true` are
    /// collected in iteration order (the order itself is unspecified and
    /// not stable across calls). The registry lock is held for the whole
    /// iteration, so concurrent `add_rule` calls cannot mutate the map
    /// mid-match.
    ///
    /// # Parameters
    /// - `variables`: The variable environment for this match.
    /// - `functions`: The function table for this match.
    ///
    /// # Returns
    /// The matched rules, as owned copies.
    ///
    /// # Errors
    /// With the default configuration, the first condition fault or
    /// non-boolean result aborts the match with an error identifying the
    /// offending rule and cause. With `skip_bad_rule_during_match` set,
    /// such rules are skipped and matching continues.
    pub fn match_rules(&self,
                       variables: &HashMap<String, Value>,
                       functions: &HashMap<String, ExpressionFunction>)
                       -> Result<Vec<Rule>, EngineError> {
        let rules = self.rules.lock().expect("rule registry mutex poisoned");

        let mut matched = Vec::new();

        for rule in rules.values() {
            let matches = match evaluate(rule.condition(), variables, functions) {
                Ok(Value::Bool(b)) => b,
                Ok(other) => {
                    if self.config.skip_bad_rule_during_match {
                        continue;
                    }
                    (self.logger)(&format!("rule {} returned a non-boolean value ({}) during \
                                            match",
                                           rule.name(),
                                           other.kind()));
                    return Err(EngineError::NonBooleanResult { name: rule.name().to_string(),
                                                               kind: other.kind(), });
                },
                Err(cause) => {
                    if self.config.skip_bad_rule_during_match {
                        continue;
                    }
                    (self.logger)(&format!("rule {} returned an error during match: {cause}",
                                           rule.name()));
                    return Err(EngineError::EvaluationFailed { name: rule.name().to_string(),
                                                               cause });
                },
            };

            if matches {
                matched.push(rule.clone());
            }
        }

        Ok(matched)
    }
}
