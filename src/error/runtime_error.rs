use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;

use crate::{
    ast::{BinaryOperator, UnaryOperator},
    interpreter::{lexer::Position, value::core::ValueKind},
};

/// The underlying failure when a numeric literal cannot be parsed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LiteralError {
    /// Integer text that does not fit an `i64`.
    #[error(transparent)]
    Integer(#[from] ParseIntError),
    /// Decimal text that is not a valid `f64`.
    #[error(transparent)]
    Decimal(#[from] ParseFloatError),
}

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// Operands of different type families, such as a string and a number.
    #[error("Error at {position}: IncompatibleType: Incompatible types on each side of '{operator}'.")]
    IncompatibleType {
        /// The operator.
        operator: BinaryOperator,
        /// Where the operator is.
        position: Position,
    },
    /// Operands of one family that the operator does not support.
    #[error("Error at {position}: WrongTypeUsedWithBinOp: Wrong types used with '{operator}'.")]
    WrongTypeUsedWithBinOp {
        /// The operator.
        operator: BinaryOperator,
        /// Where the operator is.
        position: Position,
    },
    /// A boolean connector with a non-boolean operand.
    #[error("Error at {position}: ExpectedBool: Expected Bool on either side of '{operator}'.")]
    ExpectedBool {
        /// The connector.
        operator: BinaryOperator,
        /// Where the connector is.
        position: Position,
    },
    /// An `if`/`while` condition that is not a boolean.
    #[error("Error at {position}: ExpectedBoolWithControl: Expected Bool condition after '{keyword}'.")]
    ExpectedBoolWithControl {
        /// `if` or `while`.
        keyword:  &'static str,
        /// Where the keyword is.
        position: Position,
    },
    /// An ordering comparison with a non-numeric operand.
    #[error("Error at {position}: MustBeNumWithComparisonOp: Must use numbers on either side of '{operator}'.")]
    MustBeNumWithComparisonOp {
        /// The comparison operator.
        operator: BinaryOperator,
        /// Where the operator is.
        position: Position,
    },
    /// A unary operator applied to the wrong type.
    #[error("Error at {position}: UnaryTypeMismatch: Expected {expected} with unary '{operator}', found {found}.")]
    UnaryTypeMismatch {
        /// The unary operator.
        operator: UnaryOperator,
        /// What the operator accepts.
        expected: &'static str,
        /// What it got.
        found:    ValueKind,
        /// Where the operator is.
        position: Position,
    },
    /// A variable read with no binding.
    #[error("Error at {position}: NoIdentifierAvailable: Cannot find identifier \"{name}\".")]
    NoIdentifierAvailable {
        /// The variable name.
        name:     String,
        /// Where the identifier is.
        position: Position,
    },
    /// An assignment or `del` whose target is not a variable.
    #[error("Error at {position}: ExpectedIdentifier: Expected identifier next to '{operator}'.")]
    ExpectedIdentifier {
        /// `:=` or `del`.
        operator: &'static str,
        /// Where the operator is.
        position: Position,
    },
    /// A numeric literal whose text does not parse.
    #[error("Error at {position}: InvalidLiteral: Cannot read '{text}' as a number: {source}.")]
    InvalidLiteral {
        /// The literal text.
        text:     String,
        /// Where the literal is.
        position: Position,
        /// The parse failure.
        #[source]
        source:   LiteralError,
    },
    /// A statement used where a value is needed, such as `print (x := 1)`.
    #[error("Error at {position}: MissingValue: Expression does not produce a value.")]
    MissingValue {
        /// Where the statement is.
        position: Position,
    },
    /// Division by zero.
    #[error("Error at {position}: DivisionByZero: Division by zero.")]
    DivisionByZero {
        /// Where the operator is.
        position: Position,
    },
    /// Integer arithmetic outside the `i64` range.
    #[error("Error at {position}: Overflow: Integer overflow while trying to compute result.")]
    Overflow {
        /// Where the operator is.
        position: Position,
    },
    /// Writing output or reading input failed.
    #[error("Error: Io: {0}")]
    Io(#[from] std::io::Error),
}
