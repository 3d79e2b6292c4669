use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::core::operand_mismatch,
            core::{Context, EvalResult},
        },
        lexer::Position,
        value::core::{NumericPair, Value},
    },
    util::num::i64_to_u32_checked,
};

/// Raises an integer to an integer power without leaving the integers.
///
/// A negative exponent gives the truncated result of `1 / base^-exponent`:
/// `±1` for a base of `±1`, `0` otherwise.
fn integer_pow(base: i64, exponent: i64, position: Position) -> EvalResult<i64> {
    match base {
        0 if exponent < 0 => Err(RuntimeError::DivisionByZero { position }),
        0 => Ok(i64::from(exponent == 0)),
        1 => Ok(1),
        -1 => Ok(if exponent % 2 == 0 { 1 } else { -1 }),
        _ if exponent < 0 => Ok(0),
        _ => base.checked_pow(i64_to_u32_checked(exponent, position)?)
                 .ok_or(RuntimeError::Overflow { position }),
    }
}

impl Context {
    /// Evaluates an exponentiation operation.
    ///
    /// Integer-integer exponentiation stays integral and uses checked
    /// arithmetic. If either operand is a decimal, both are promoted and
    /// evaluated with `powf`. A zero base with a negative exponent is a
    /// division by zero in both cases.
    ///
    /// # Parameters
    /// - `base`: The base value.
    /// - `exponent`: The exponent value.
    /// - `position`: Position of the operator for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the result of `base ^ exponent`.
    ///
    /// # Example
    /// ```
    /// use linescript::interpreter::{
    ///     evaluator::core::Context, lexer::Position, value::core::Value,
    /// };
    ///
    /// let position = Position::default();
    ///
    /// let result = Context::eval_pow(Value::Integer(2), Value::Integer(10), position).unwrap();
    /// assert_eq!(result, Value::Integer(1024));
    ///
    /// let result = Context::eval_pow(Value::Integer(2), Value::Integer(-1), position).unwrap();
    /// assert_eq!(result, Value::Integer(0));
    /// ```
    pub fn eval_pow(base: Value, exponent: Value, position: Position) -> EvalResult<Value> {
        match base.numeric_pair(&exponent) {
            Some(NumericPair::Integers(b, e)) => integer_pow(b, e, position).map(Value::Integer),
            Some(NumericPair::Decimals(b, e)) => {
                if b == 0.0 && e < 0.0 {
                    return Err(RuntimeError::DivisionByZero { position });
                }
                Ok(Value::Decimal(b.powf(e)))
            },
            None => Err(operand_mismatch(BinaryOperator::Pow, base, exponent, position)),
        }
    }
}
