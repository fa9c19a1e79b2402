/// Binary operator evaluation.
///
/// Arithmetic, comparison, and logic, including the short-circuit
/// behavior of `&&` and `||`.
pub mod binary;
/// Function-call evaluation and dispatch against the function table.
pub mod call;
/// The evaluation context and tree-walk dispatch.
pub mod core;
/// Unary operator evaluation.
pub mod unary;
