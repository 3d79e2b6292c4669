use crate::interpreter::{
    lexer::{Position, TokenKind},
    symbols::{NameId, StringId},
};

/// An abstract syntax tree (AST) node.
///
/// `Expr` is a closed set: every expression and statement the language
/// knows is one variant, and the evaluator matches it exhaustively. Children
/// are owned, so a tree never shares or cycles. Each variant records the
/// position of the token that produced it for diagnostics.
///
/// Numeric literals keep their source text; it is parsed when the literal is
/// evaluated so that a malformed literal fails only its own statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// An integer literal such as `42`.
    Int {
        /// The literal text.
        text:     String,
        /// Where the literal is.
        position: Position,
    },
    /// A decimal literal such as `2.5`.
    Decimal {
        /// The literal text.
        text:     String,
        /// Where the literal is.
        position: Position,
    },
    /// A string literal, interned in the string table.
    Str {
        /// Index into the string table.
        id:       StringId,
        /// Where the literal is.
        position: Position,
    },
    /// `true` or `false`.
    Bool {
        /// The literal value.
        value:    bool,
        /// Where the literal is.
        position: Position,
    },
    /// Reference to a variable, interned in the name table.
    Identifier {
        /// Index into the variable-name table.
        name:     NameId,
        /// Where the identifier is.
        position: Position,
    },
    /// An arithmetic, comparison or connector operation.
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Where the operator is.
        position: Position,
    },
    /// `-x` or `!x`.
    UnaryOp {
        /// The operator.
        op:       UnaryOperator,
        /// The operand.
        expr:     Box<Self>,
        /// Where the operator is.
        position: Position,
    },
    /// `target := value`.
    Assignment {
        /// Must evaluate to an identifier slot.
        target:   Box<Self>,
        /// The assigned expression.
        value:    Box<Self>,
        /// Where the `:=` is.
        position: Position,
    },
    /// `print expr`.
    Print {
        /// The printed expression.
        expr:     Box<Self>,
        /// Where `print` is.
        position: Position,
    },
    /// `input prompt`.
    Input {
        /// The prompt expression.
        prompt:   Box<Self>,
        /// Where `input` is.
        position: Position,
    },
    /// `del target`.
    Delete {
        /// Must evaluate to an identifier slot.
        target:   Box<Self>,
        /// Where `del` is.
        position: Position,
    },
    /// `if condition { body }`.
    If {
        /// Must evaluate to a boolean.
        condition: Box<Self>,
        /// Statements run when the condition holds.
        body:      Vec<Self>,
        /// Where `if` is.
        position:  Position,
    },
    /// `while condition { body }`.
    While {
        /// Re-evaluated before every iteration.
        condition: Box<Self>,
        /// Statements run per iteration.
        body:      Vec<Self>,
        /// Where `while` is.
        position:  Position,
    },
}

impl Expr {
    /// Gets the source position from `self`.
    /// ## Example
    /// ```
    /// use linescript::{ast::Expr, interpreter::lexer::Position};
    ///
    /// let position = Position { line: 5, cursor: 2 };
    /// let expr = Expr::Bool { value: true,
    ///                         position };
    ///
    /// assert_eq!(expr.position(), position);
    /// ```
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Int { position, .. }
            | Self::Decimal { position, .. }
            | Self::Str { position, .. }
            | Self::Bool { position, .. }
            | Self::Identifier { position, .. }
            | Self::BinaryOp { position, .. }
            | Self::UnaryOp { position, .. }
            | Self::Assignment { position, .. }
            | Self::Print { position, .. }
            | Self::Input { position, .. }
            | Self::Delete { position, .. }
            | Self::If { position, .. }
            | Self::While { position, .. } => *position,
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition or string concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Truncating or decimal division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`=`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Logical and (`&`)
    And,
    /// Logical or (`|`)
    Or,
}

impl BinaryOperator {
    /// Maps a token kind to its binary operator, if it is one.
    #[must_use]
    pub const fn from_token(kind: TokenKind) -> Option<Self> {
        Some(match kind {
            TokenKind::Add => Self::Add,
            TokenKind::Subtract => Self::Sub,
            TokenKind::Multiply => Self::Mul,
            TokenKind::Divide => Self::Div,
            TokenKind::Exponent => Self::Pow,
            TokenKind::Less => Self::Less,
            TokenKind::Greater => Self::Greater,
            TokenKind::LessEqual => Self::LessEqual,
            TokenKind::GreaterEqual => Self::GreaterEqual,
            TokenKind::Equal => Self::Equal,
            TokenKind::NotEqual => Self::NotEqual,
            TokenKind::And => Self::And,
            TokenKind::Or => Self::Or,
            _ => return None,
        })
    }
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Logical NOT (e.g. `!x`).
    Not,
}

impl UnaryOperator {
    /// Maps a token kind to its unary operator, if it is one.
    #[must_use]
    pub const fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Negate => Some(Self::Negate),
            TokenKind::Not => Some(Self::Not),
            _ => None,
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Or, Pow,
            Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Pow => "^",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            Equal => "=",
            NotEqual => "!=",
            And => "&",
            Or => "|",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
            Self::Not => write!(f, "!"),
        }
    }
}
