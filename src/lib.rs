//! # verdict
//!
//! verdict is a small rule engine built around an embedded expression
//! language. A rule pairs a boolean *condition expression* with an
//! *action*; the engine evaluates the condition of every registered rule
//! against a supplied variable binding (plus optional callable
//! extensions) and returns the subset of rules whose condition holds.
//!
//! Conditions are interpreted by a miniature interpreter: a lexer, an
//! operator-precedence parser producing an AST, and a tree-walk evaluator
//! over a dynamically-typed value model with short-circuit boolean logic
//! and user-supplied function dispatch.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use logos::Logos;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        evaluator::core::Context,
        lexer::{LexerExtras, Token},
        parser::core::parse_complete,
    },
};

/// Defines the structure of parsed conditions.
///
/// This module declares the `Expr` enum and related types that represent
/// the syntactic structure of a condition expression as a tree. The AST
/// is built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression node types for all language constructs.
/// - Attaches source locations to nodes for error reporting.
/// - Keeps parsing and evaluation decoupled, so a condition can be parsed
///   once and evaluated many times.
pub mod ast;
/// The rule registry.
///
/// Owns named rules, enforces name uniqueness on insertion, and evaluates
/// every registered condition during matching under a single lock. Also
/// defines the engine's configuration and error types.
pub mod engine;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all recoverable faults that can be raised during
/// lexing, parsing, or evaluating a condition. It standardizes error
/// reporting and carries detailed information about failures, including
/// source lines. Implementation defects are deliberately not represented
/// here; those panic and propagate.
pub mod error;
/// Orchestrates the interpretation of condition expressions.
///
/// This module ties together lexing, parsing, evaluation, the value
/// model, and error handling to provide a complete runtime for condition
/// evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// Defines rules: a name, a condition, and an action.
pub mod rule;

pub use crate::{
    engine::{Config, Engine, EngineError},
    error::Error,
    interpreter::{
        evaluator::core::{ExpressionFunction, FunctionError},
        value::Value,
    },
    rule::{Rule, RuleAction},
};

/// Tokenizes a condition expression.
///
/// Runs the lexer over the whole input, pairing each token with the line
/// it came from. An unrecognized character stops the scan with a lex
/// fault; nothing is skipped silently.
fn lex(expression: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(expression, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.extras.line));
        } else {
            return Err(ParseError::IllegalCharacter { token: lexer.slice().to_string(),
                                                      line:  lexer.extras.line, });
        }
    }

    Ok(tokens)
}

/// Parses a condition expression into an AST.
///
/// The returned [`Expr`] carries no evaluation state, so it can be
/// evaluated repeatedly against different variable environments via
/// [`interpreter::evaluator::core::Context`].
///
/// # Errors
/// Returns a [`ParseError`] if the expression cannot be lexed or does not
/// match the grammar.
///
/// # Examples
/// ```
/// use verdict::parse;
///
/// assert!(parse("grade < 40").is_ok());
/// assert!(parse("grade <").is_err());
/// ```
pub fn parse(expression: &str) -> Result<Expr, ParseError> {
    let tokens = lex(expression)?;
    let eof_line = tokens.last().map_or(1, |(_, line)| *line);
    let mut iter = tokens.iter().peekable();

    parse_complete(&mut iter, eof_line)
}

/// Evaluates a condition expression against a variable environment and a
/// function table.
///
/// This is the expression engine's entry point: it lexes and parses the
/// expression, then reduces it to a single [`Value`]. The environment and
/// function table are read-only for the duration of the call, and the
/// same inputs always produce the same result.
///
/// # Errors
/// Returns an [`Error`] if the expression cannot be parsed or if
/// evaluation faults (unknown identifier or function, wrong-kind
/// operands, division by zero, or a failing user function).
///
/// # Examples
/// ```
/// use std::collections::HashMap;
///
/// use verdict::{Value, evaluate};
///
/// let vars = HashMap::from([("grade".to_string(), Value::Int(30))]);
/// let result = evaluate("grade < 40", &vars, &HashMap::new()).unwrap();
/// assert_eq!(result, Value::Bool(true));
///
/// // Unknown variables are a fault, never nil.
/// assert!(evaluate("grade < 40", &HashMap::new(), &HashMap::new()).is_err());
/// ```
pub fn evaluate(expression: &str,
                variables: &std::collections::HashMap<String, Value>,
                functions: &std::collections::HashMap<String, ExpressionFunction>)
                -> Result<Value, Error> {
    let expr = parse(expression)?;
    let context = Context::new(variables, functions);

    Ok(context.eval(&expr)?)
}
