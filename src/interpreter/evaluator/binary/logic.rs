use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        lexer::Position,
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a logical operation between two boolean values.
    ///
    /// Both operands have already been evaluated; there is no short
    /// circuit. Anything other than two booleans is `ExpectedBool`.
    ///
    /// # Parameters
    /// - `op`: The logical operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `position`: Position of the operator for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing a boolean.
    ///
    /// # Example
    /// ```
    /// use linescript::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, lexer::Position, value::core::Value},
    /// };
    ///
    /// let a = Value::Bool(true);
    /// let b = Value::Bool(false);
    ///
    /// let result = Context::eval_logic(BinaryOperator::Or, a, b, Position::default());
    /// assert_eq!(result.unwrap(), Value::Bool(true));
    /// ```
    pub fn eval_logic(op: BinaryOperator,
                      left: Value,
                      right: Value,
                      position: Position)
                      -> EvalResult<Value> {
        let (Value::Bool(left), Value::Bool(right)) = (left, right) else {
            return Err(RuntimeError::ExpectedBool { operator: op,
                                                    position });
        };

        match op {
            BinaryOperator::And => Ok(Value::Bool(left && right)),
            BinaryOperator::Or => Ok(Value::Bool(left || right)),
            _ => unreachable!(),
        }
    }
}
