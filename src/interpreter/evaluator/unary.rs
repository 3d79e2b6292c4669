use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        lexer::Position,
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a unary operation on a resolved value.
    ///
    /// Supported operators:
    /// - `Negate`: numeric negation, keeping the integer or decimal subtype.
    ///   Negating `i64::MIN` is an overflow.
    /// - `Not`: boolean negation.
    ///
    /// Any other operand type is `UnaryTypeMismatch` at the operator.
    ///
    /// # Example
    /// ```
    /// use linescript::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Context, lexer::Position, value::core::Value},
    /// };
    ///
    /// let position = Position::default();
    ///
    /// let v = Context::eval_unary(UnaryOperator::Negate, Value::Integer(5), position).unwrap();
    /// assert_eq!(v, Value::Integer(-5));
    ///
    /// let v = Context::eval_unary(UnaryOperator::Not, Value::Bool(false), position).unwrap();
    /// assert_eq!(v, Value::Bool(true));
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: Value, position: Position) -> EvalResult<Value> {
        match (op, value) {
            (UnaryOperator::Negate, Value::Integer(n)) => {
                n.checked_neg()
                 .map(Value::Integer)
                 .ok_or(RuntimeError::Overflow { position })
            },
            (UnaryOperator::Negate, Value::Decimal(d)) => Ok(Value::Decimal(-d)),
            (UnaryOperator::Not, Value::Bool(b)) => Ok(Value::Bool(!b)),
            (UnaryOperator::Negate, _) => Err(mismatch(op, "a number", value, position)),
            (UnaryOperator::Not, _) => Err(mismatch(op, "Bool", value, position)),
        }
    }
}

const fn mismatch(operator: UnaryOperator,
                  expected: &'static str,
                  found: Value,
                  position: Position)
                  -> RuntimeError {
    RuntimeError::UnaryTypeMismatch { operator,
                                      expected,
                                      found: found.kind(),
                                      position }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::value::core::ValueKind;

    #[test]
    fn negation_keeps_the_subtype() {
        let position = Position::default();

        assert_eq!(Context::eval_unary(UnaryOperator::Negate, Value::Decimal(1.5), position).unwrap(),
                   Value::Decimal(-1.5));
        assert!(matches!(Context::eval_unary(UnaryOperator::Negate, Value::Integer(i64::MIN), position),
                         Err(RuntimeError::Overflow { .. })));
    }

    #[test]
    fn wrong_operand_types_report_the_operator_position() {
        let position = Position { line:   3,
                                  cursor: 7, };

        let error = Context::eval_unary(UnaryOperator::Not, Value::Integer(1), position).unwrap_err();

        assert!(matches!(error,
                         RuntimeError::UnaryTypeMismatch { operator: UnaryOperator::Not,
                                                           found: ValueKind::Integer,
                                                           position: Position { line: 3,
                                                                                cursor: 7, },
                                                           .. }));
    }
}
