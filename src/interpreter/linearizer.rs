use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::ParseResult,
    },
};

/// Operator associativity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// Equal precedence groups to the left: `a - b - c` is `(a - b) - c`.
    Left,
    /// Equal precedence groups to the right: `a ^ b ^ c` is `a ^ (b ^ c)`.
    Right,
}

/// Returns the precedence and associativity of an operator token.
///
/// Higher precedence binds tighter. Returns `None` for tokens that are not
/// operators.
///
/// # Example
/// ```
/// use linescript::interpreter::{
///     lexer::TokenKind,
///     linearizer::{Associativity, operator_info},
/// };
///
/// assert_eq!(operator_info(TokenKind::Exponent), Some((5, Associativity::Right)));
/// assert_eq!(operator_info(TokenKind::Add), Some((3, Associativity::Left)));
/// assert_eq!(operator_info(TokenKind::Int), None);
/// ```
#[must_use]
pub const fn operator_info(kind: TokenKind) -> Option<(u8, Associativity)> {
    use Associativity::{Left, Right};
    use TokenKind::{
        Add, And, Assign, BlockEnd, BlockStart, Delete, Divide, Equal, Exponent, Greater,
        GreaterEqual, Input, Less, LessEqual, Multiply, Negate, Not, NotEqual, Or, Print,
        Subtract, Terminator,
    };

    Some(match kind {
        Exponent | Negate | Not => (5, Right),
        Multiply | Divide => (4, Left),
        Add | Subtract => (3, Left),
        Less | LessEqual | Greater | GreaterEqual | Equal | NotEqual => (2, Right),
        And | Or | Input => (2, Left),
        Assign | Print | Delete => (1, Right),
        Terminator | BlockStart | BlockEnd => (0, Left),
        _ => return None,
    })
}

/// Returns `true` if an operator following `previous` sits in unary position.
const fn is_unary_position(previous: Option<TokenKind>) -> bool {
    match previous {
        None => true,
        Some(kind) => {
            kind.is_operator()
            || matches!(kind,
                        TokenKind::OpenParen
                        | TokenKind::Terminator
                        | TokenKind::If
                        | TokenKind::While)
        },
    }
}

/// Converts an infix token sequence to postfix order (shunting-yard).
///
/// Operands go straight to the output. Operators wait on a stack until an
/// operator of lower precedence, a `)`, a terminator or the end marker
/// forces them out. Every terminator drains the stack, so each statement's
/// postfix run is self-contained. The result always ends with exactly one
/// [`TokenKind::End`]; a synthetic one is appended if `tokens` has none.
///
/// A `-` in unary position (first token, or after `(`, an operator, a
/// terminator, `if` or `while`) becomes [`TokenKind::Negate`].
///
/// Tokens that are neither operands nor operators, like `if`, pass through
/// unchanged for the tree builder to reject.
///
/// # Errors
/// - `UnmatchedParen` for a `)` with no open `(`.
/// - `UnclosedParen` for a `(` still open at a terminator or at the end.
///
/// # Example
/// ```
/// use linescript::interpreter::{lexer::tokenize, linearizer::to_postfix};
///
/// let postfix = to_postfix(&tokenize("2 + 3 * 4").unwrap()).unwrap();
/// let texts: Vec<_> = postfix.iter().map(|t| t.text.as_str()).collect();
///
/// assert_eq!(texts, ["2", "3", "4", "*", "+", "", ""]);
/// ```
pub fn to_postfix(tokens: &[Token]) -> ParseResult<Vec<Token>> {
    let mut output = Vec::with_capacity(tokens.len() + 1);
    let mut stack: Vec<Token> = Vec::new();
    let mut previous = None;

    for token in tokens {
        let mut token = token.clone();

        if token.kind == TokenKind::Subtract && is_unary_position(previous) {
            token.kind = TokenKind::Negate;
        }
        previous = Some(token.kind);

        match token.kind {
            TokenKind::End => {
                drain(&mut stack, &mut output)?;
                output.push(token);
                return Ok(output);
            },
            TokenKind::Terminator => {
                drain(&mut stack, &mut output)?;
                output.push(token);
            },
            TokenKind::OpenParen => stack.push(token),
            TokenKind::CloseParen => close_paren(&token, &mut stack, &mut output)?,
            kind if kind.is_operand() => output.push(token),
            kind => match operator_info(kind) {
                Some(incoming) => {
                    pop_operators(incoming, &mut stack, &mut output);
                    stack.push(token);
                },
                None => output.push(token),
            },
        }
    }

    drain(&mut stack, &mut output)?;
    output.push(Token::end(tokens.last().map_or(0, |t| t.line)));
    Ok(output)
}

/// Moves operators that bind at least as tight as `incoming` to the output.
fn pop_operators((precedence, associativity): (u8, Associativity),
                 stack: &mut Vec<Token>,
                 output: &mut Vec<Token>) {
    while let Some(top) = stack.last()
          && let Some((top_precedence, _)) = operator_info(top.kind)
    {
        let pops = top_precedence > precedence
                   || (top_precedence == precedence && associativity == Associativity::Left);
        if !pops {
            break;
        }
        if let Some(top) = stack.pop() {
            output.push(top);
        }
    }
}

fn close_paren(token: &Token, stack: &mut Vec<Token>, output: &mut Vec<Token>) -> ParseResult<()> {
    while let Some(top) = stack.pop() {
        if top.kind == TokenKind::OpenParen {
            return Ok(());
        }
        output.push(top);
    }

    Err(ParseError::UnmatchedParen { position: token.position() })
}

/// Empties the operator stack at a statement boundary.
fn drain(stack: &mut Vec<Token>, output: &mut Vec<Token>) -> ParseResult<()> {
    while let Some(top) = stack.pop() {
        if top.kind == TokenKind::OpenParen {
            return Err(ParseError::UnclosedParen { position: top.position() });
        }
        output.push(top);
    }
    Ok(())
}
