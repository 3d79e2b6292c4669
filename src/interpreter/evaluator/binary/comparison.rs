use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        lexer::Position,
        value::core::{NumericPair, Value},
    },
};

/// Maps an equality-style operator and a boolean equality result
/// to the final boolean value.
///
/// This function does not perform any comparison itself.
#[must_use]
pub fn equality_op_result(op: BinaryOperator, is_equal: bool) -> bool {
    match op {
        BinaryOperator::Equal => is_equal,
        BinaryOperator::NotEqual => !is_equal,
        _ => unreachable!("equality_op_result used with non equality operator"),
    }
}

impl Context {
    /// Evaluates a comparison of the form `Value <Operator> Value`.
    ///
    /// `=` and `!=` compare numbers after promotion, strings by content and
    /// booleans by value; any other pairing is `IncompatibleType`. The
    /// ordering operators require two numbers.
    ///
    /// # Parameters
    /// - `op`: The comparison operator.
    /// - `left`: The left-hand value.
    /// - `right`: The right-hand value.
    /// - `position`: Position of the operator for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing a boolean result.
    ///
    /// # Example
    /// ```
    /// use std::io;
    ///
    /// use linescript::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, lexer::Position, value::core::Value},
    /// };
    ///
    /// let context = Context::with_io(io::empty(), io::sink());
    /// let position = Position::default();
    ///
    /// let result = context.eval_comparison(BinaryOperator::Less,
    ///                                      Value::Decimal(3.0),
    ///                                      Value::Integer(5),
    ///                                      position);
    /// assert_eq!(result.unwrap(), Value::Bool(true));
    /// ```
    pub fn eval_comparison(&self,
                           op: BinaryOperator,
                           left: Value,
                           right: Value,
                           position: Position)
                           -> EvalResult<Value> {
        Ok(Value::Bool(match op {
                           BinaryOperator::Equal | BinaryOperator::NotEqual => {
                               let equality = self.values_equal(op, left, right, position)?;
                               equality_op_result(op, equality)
                           },

                           BinaryOperator::Less
                           | BinaryOperator::Greater
                           | BinaryOperator::LessEqual
                           | BinaryOperator::GreaterEqual => {
                               let pair = left.numeric_pair(&right).ok_or(
                                   RuntimeError::MustBeNumWithComparisonOp { operator: op,
                                                                             position }
                               )?;

                               match pair {
                                   NumericPair::Integers(a, b) => compare(op, a, b),
                                   NumericPair::Decimals(a, b) => compare(op, a, b),
                               }
                           },

                           _ => unreachable!(),
                       }))
    }

    #[allow(clippy::float_cmp)]
    fn values_equal(&self,
                    op: BinaryOperator,
                    left: Value,
                    right: Value,
                    position: Position)
                    -> EvalResult<bool> {
        match (left, right) {
            (Value::Str(a), Value::Str(b)) => {
                Ok(a == b || self.symbols.string(a) == self.symbols.string(b))
            },
            (Value::Bool(a), Value::Bool(b)) => Ok(a == b),
            _ => match left.numeric_pair(&right) {
                Some(NumericPair::Integers(a, b)) => Ok(a == b),
                Some(NumericPair::Decimals(a, b)) => Ok(a == b),
                None => Err(RuntimeError::IncompatibleType { operator: op,
                                                             position }),
            },
        }
    }
}

fn compare<T: PartialOrd>(op: BinaryOperator, left: T, right: T) -> bool {
    match op {
        BinaryOperator::Less => left < right,
        BinaryOperator::Greater => left > right,
        BinaryOperator::LessEqual => left <= right,
        BinaryOperator::GreaterEqual => left >= right,
        _ => unreachable!(),
    }
}
