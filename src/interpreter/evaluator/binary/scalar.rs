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
};

impl Context {
    /// Evaluates `+`, `-`, `*` or `/`.
    ///
    /// Two integers give an integer, with checked overflow and truncating
    /// division. If either operand is a decimal, both are promoted and the
    /// result is a decimal. Division by zero is checked for both. `+` also
    /// concatenates two strings into a new string table entry.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `position`: Position of the operator for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the computed value.
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
    /// let mut context = Context::with_io(io::empty(), io::sink());
    /// let position = Position::default();
    ///
    /// let result = context.eval_scalar_op(BinaryOperator::Div,
    ///                                     Value::Integer(5),
    ///                                     Value::Integer(2),
    ///                                     position);
    /// assert_eq!(result.unwrap(), Value::Integer(2));
    ///
    /// let result = context.eval_scalar_op(BinaryOperator::Div,
    ///                                     Value::Decimal(5.0),
    ///                                     Value::Integer(2),
    ///                                     position);
    /// assert_eq!(result.unwrap(), Value::Decimal(2.5));
    /// ```
    pub fn eval_scalar_op(&mut self,
                          op: BinaryOperator,
                          left: Value,
                          right: Value,
                          position: Position)
                          -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mul, Sub};

        if let (Add, Value::Str(a), Value::Str(b)) = (op, left, right) {
            let joined = format!("{}{}", self.symbols.string(a), self.symbols.string(b));
            return Ok(Value::Str(self.symbols.intern_string(&joined)));
        }

        match left.numeric_pair(&right) {
            Some(NumericPair::Integers(a, b)) => {
                let result = match op {
                    Add => a.checked_add(b),
                    Sub => a.checked_sub(b),
                    Mul => a.checked_mul(b),
                    Div => {
                        if b == 0 {
                            return Err(RuntimeError::DivisionByZero { position });
                        }
                        a.checked_div(b)
                    },
                    _ => unreachable!("eval_scalar_op used with non arithmetic operator"),
                };
                result.map(Value::Integer)
                      .ok_or(RuntimeError::Overflow { position })
            },
            Some(NumericPair::Decimals(a, b)) => {
                if op == Div && b == 0.0 {
                    return Err(RuntimeError::DivisionByZero { position });
                }
                Ok(Value::Decimal(match op {
                                      Add => a + b,
                                      Sub => a - b,
                                      Mul => a * b,
                                      Div => a / b,
                                      _ => unreachable!(),
                                  }))
            },
            None => Err(operand_mismatch(op, left, right, position)),
        }
    }
}
