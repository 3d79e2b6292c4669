/// Lexing and parsing errors.
///
/// Defines every error that can occur while tokenizing, normalizing,
/// linearizing or building the syntax tree. Any of these aborts the whole
/// program before evaluation starts.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating a statement:
/// type mismatches, missing identifiers, malformed literals, arithmetic
/// failures and I/O errors from `print`/`input`. A runtime error aborts only
/// the top-level statement that raised it.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::{LiteralError, RuntimeError};
