/// Dispatch of binary operators and the operand type checks they share.
pub mod core;

/// `+ - * /` on numbers, and `+` on strings.
pub mod scalar;

/// `^` on numbers.
pub mod power;

/// Equality and ordering comparisons.
pub mod comparison;

/// The boolean connectors `&` and `|`.
pub mod logic;
