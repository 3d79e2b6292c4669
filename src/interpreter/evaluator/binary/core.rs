use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        lexer::Position,
        value::core::{Value, ValueKind},
    },
};

/// The type families binary operators distinguish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Family {
    Numeric,
    String,
    Bool,
    Identifier,
}

const fn family(value: Value) -> Family {
    match value.kind() {
        ValueKind::Integer | ValueKind::Decimal => Family::Numeric,
        ValueKind::String => Family::String,
        ValueKind::Bool => Family::Bool,
        ValueKind::Identifier => Family::Identifier,
    }
}

/// Builds the error for operands an arithmetic operator cannot combine.
///
/// Operands of different families (a string and a number) are
/// `IncompatibleType`; operands of one family the operator does not support
/// (two booleans under `+`) are `WrongTypeUsedWithBinOp`.
pub(super) fn operand_mismatch(op: BinaryOperator,
                               left: Value,
                               right: Value,
                               position: Position)
                               -> RuntimeError {
    if family(left) == family(right) {
        RuntimeError::WrongTypeUsedWithBinOp { operator: op,
                                               position }
    } else {
        RuntimeError::IncompatibleType { operator: op,
                                         position }
    }
}

impl Context {
    /// Evaluates a binary operation between two resolved values.
    ///
    /// This function routes the operation to specialized handlers depending
    /// on the operator. Arithmetic goes to `eval_scalar_op`, power to
    /// `eval_pow`, comparisons to `eval_comparison` and connectors to
    /// `eval_logic`.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `position`: Position of the operator for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
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
    /// let result = context.eval_binary(BinaryOperator::Add,
    ///                                  Value::Integer(3),
    ///                                  Value::Integer(4),
    ///                                  position);
    /// assert_eq!(result.unwrap(), Value::Integer(7));
    /// ```
    pub fn eval_binary(&mut self,
                       op: BinaryOperator,
                       left: Value,
                       right: Value,
                       position: Position)
                       -> EvalResult<Value> {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Or, Pow,
            Sub,
        };

        match op {
            Add | Sub | Mul | Div => self.eval_scalar_op(op, left, right, position),
            Pow => Self::eval_pow(left, right, position),
            Less | Greater | LessEqual | GreaterEqual | Equal | NotEqual => {
                self.eval_comparison(op, left, right, position)
            },
            And | Or => Self::eval_logic(op, left, right, position),
        }
    }
}
