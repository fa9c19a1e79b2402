/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST of a parsed condition, performs arithmetic,
/// comparison and logical operations, resolves variables against the
/// caller-supplied environment, and dispatches function calls against the
/// caller-supplied function table. It is the core execution engine of the
/// condition language.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Resolves variables and dispatches user-supplied functions.
/// - Reports evaluation errors such as division by zero or wrong-kind
///   operands.
pub mod evaluator;
/// The lexer module tokenizes condition source for further parsing.
///
/// The lexer (tokenizer) reads the raw condition text and produces a
/// stream of tokens, each corresponding to meaningful language elements
/// such as numbers, strings, identifiers, operators, and punctuation.
/// This is the first stage of evaluation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source location.
/// - Handles numeric, string and boolean literals, identifiers, and
///   operators with longest-match scanning.
/// - Reports lexical errors for characters outside the language.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST that represents the syntactic structure of the
/// condition. The tree can be evaluated repeatedly against different
/// variable environments.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Enforces the operator precedence table and associativity rules.
/// - Validates grammar, reporting errors with location info.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the closed set of value kinds a condition can
/// produce or consume: booleans, integers, floats, strings, and the
/// absence of a value. It also provides the coercion and equality rules
/// between kinds.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Implements accessors, numeric promotion, and strict equality.
/// - Names value kinds for use in diagnostics.
pub mod value;
