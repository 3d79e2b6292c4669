use thiserror::Error;

use crate::interpreter::lexer::Position;

/// Represents all errors that can occur during lexing or parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A character that starts no token.
    #[error("Error at {position}: InvalidCharacter: '{character}' is not valid here.")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Where it was found.
        position:  Position,
    },
    /// A string literal without a closing quote on its line.
    #[error("Error at {position}: UnterminatedString: There is no closing '\"' on string.")]
    UnterminatedString {
        /// Where the string starts.
        position: Position,
    },
    /// A `)` without a matching `(`.
    #[error("Error at {position}: UnmatchedParen: Found ')' without a matching '('.")]
    UnmatchedParen {
        /// Where the `)` is.
        position: Position,
    },
    /// A `(` still open at the end of its statement.
    #[error("Error at {position}: UnclosedParen: Expected closing parenthesis ')' but none found.")]
    UnclosedParen {
        /// Where the `(` is.
        position: Position,
    },
    /// An operator without enough operands.
    #[error("Error at {position}: MissingOperand: Operator '{operator}' is missing an operand.")]
    MissingOperand {
        /// The operator text.
        operator: String,
        /// Where the operator is.
        position: Position,
    },
    /// More than one expression left over at the end of a statement.
    #[error("Error at {position}: DanglingOperand: Extra expression in statement.")]
    DanglingOperand {
        /// Where the extra expression starts.
        position: Position,
    },
    /// A token that cannot appear where it was found.
    #[error("Error at {position}: UnexpectedToken: Unexpected token '{token}'.")]
    UnexpectedToken {
        /// The token text or kind.
        token:    String,
        /// Where it was found.
        position: Position,
    },
    /// An `if`/`while` with no `{` after its condition.
    #[error("Error at {position}: MissingBlock: Expected '{{' after '{keyword}' condition.")]
    MissingBlock {
        /// `if` or `while`.
        keyword:  String,
        /// Where the keyword is.
        position: Position,
    },
    /// A `{` whose matching `}` never comes.
    #[error("Error at {position}: UnclosedBlock: Expected '}}' to close this block.")]
    UnclosedBlock {
        /// Where the `{` is.
        position: Position,
    },
    /// An `if`/`while` whose condition is not exactly one expression.
    #[error("Error at {position}: InvalidCondition: '{keyword}' needs exactly one condition expression.")]
    InvalidCondition {
        /// `if` or `while`.
        keyword:  String,
        /// Where the keyword is.
        position: Position,
    },
    /// Expressions or blocks nested deeper than the configured limit.
    #[error("Error at {position}: NestingTooDeep: Nesting exceeds the limit of {limit}.")]
    NestingTooDeep {
        /// The configured maximum depth.
        limit:    usize,
        /// Where the limit was crossed.
        position: Position,
    },
}
