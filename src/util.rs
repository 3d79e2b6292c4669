/// Numeric conversion helpers.
///
/// Conversions between `i64`, `u32` and `f64` used by arithmetic: the lossy
/// integer-to-decimal promotion of mixed operands, and the checked narrowing
/// of exponents.
pub mod num;
