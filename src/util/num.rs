use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, lexer::Position},
};

/// Promotes an `i64` to `f64`.
///
/// Values beyond 2^53 round to the nearest representable `f64`.
///
/// ## Example
/// ```
/// use linescript::util::num::i64_to_f64;
///
/// assert_eq!(i64_to_f64(-42), -42.0);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Narrows a non-negative exponent to `u32`.
///
/// ## Errors
/// Returns `Overflow` at `position` if `value` is negative or does not fit.
///
/// ## Example
/// ```
/// use linescript::{interpreter::lexer::Position, util::num::i64_to_u32_checked};
///
/// let position = Position::default();
///
/// assert_eq!(i64_to_u32_checked(10, position).unwrap(), 10);
/// assert!(i64_to_u32_checked(1 << 40, position).is_err());
/// ```
pub fn i64_to_u32_checked(value: i64, position: Position) -> EvalResult<u32> {
    u32::try_from(value).map_err(|_| RuntimeError::Overflow { position })
}
