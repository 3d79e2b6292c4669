/// Binary operator evaluation logic.
///
/// Handles arithmetic with numeric promotion, string concatenation,
/// exponentiation, comparisons and boolean connectors.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation and logical NOT.
pub mod unary;

/// Core evaluation logic and context management.
///
/// Contains the main evaluation engine, the runtime context with its
/// tables, environment and I/O handles, identifier resolution and
/// assignment.
pub mod core;

/// Built-in statements.
///
/// `print`, `input` and `del`.
pub mod builtin;

/// Evaluation of `if` and `while` statements and their blocks.
pub mod control_flow;
