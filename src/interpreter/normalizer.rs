use crate::interpreter::lexer::{Token, TokenKind};

/// Normalizes statement boundaries in a token sequence.
///
/// Blank lines each contribute a terminator, so runs of terminators are
/// collapsed to one and terminators before the first statement are dropped.
/// Two statements written on one line are separated by an inserted
/// terminator: one goes between a token that closes an operand and a token
/// that opens a statement (`x := 0 while ...`, `print x x := 1`), and one
/// follows every `}` that is not already followed by a terminator, another
/// `}` or the end marker. A number written flush against a name, as in
/// `2x`, is not split, so the tree builder rejects it as a dangling operand.
///
/// No other token is removed and the relative order of all tokens is kept.
///
/// # Example
/// ```
/// use linescript::interpreter::{
///     lexer::{TokenKind, tokenize},
///     normalizer::normalize,
/// };
///
/// let tokens = normalize(tokenize("\nx := 1\n\n\nprint x").unwrap());
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            [TokenKind::Identifier,
///             TokenKind::Assign,
///             TokenKind::Int,
///             TokenKind::Terminator,
///             TokenKind::Print,
///             TokenKind::Identifier,
///             TokenKind::Terminator,
///             TokenKind::End]);
/// ```
#[must_use]
pub fn normalize(tokens: Vec<Token>) -> Vec<Token> {
    let mut normalized: Vec<Token> = Vec::with_capacity(tokens.len());

    for token in tokens {
        let previous = normalized.last();

        if token.kind == TokenKind::Terminator {
            if previous.is_none_or(|t| t.kind == TokenKind::Terminator) {
                continue;
            }
        } else if let Some(previous) = previous
                  && needs_break(previous, &token)
        {
            normalized.push(Token::terminator(token.position()));
        }

        normalized.push(token);
    }

    normalized
}

fn needs_break(previous: &Token, next: &Token) -> bool {
    match previous.kind {
        TokenKind::BlockEnd => {
            !matches!(next.kind, TokenKind::Terminator | TokenKind::BlockEnd | TokenKind::End)
        },
        TokenKind::Int | TokenKind::Decimal
            if next.kind == TokenKind::Identifier && adjoins(previous, next) =>
        {
            false
        },
        kind => kind.ends_operand() && next.kind.starts_statement(),
    }
}

/// Returns `true` if `next` starts right where `previous` ends.
fn adjoins(previous: &Token, next: &Token) -> bool {
    previous.line == next.line && previous.cursor + previous.text.chars().count() == next.cursor
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::interpreter::lexer::tokenize;

    fn texts(source: &str) -> Vec<String> {
        normalize(tokenize(source).unwrap()).into_iter()
                                            .map(|t| match t.kind {
                                                TokenKind::Terminator => ";".to_owned(),
                                                TokenKind::End => "$".to_owned(),
                                                _ => t.text,
                                            })
                                            .collect()
    }

    #[test]
    fn no_two_terminators_are_adjacent() {
        let tokens = normalize(tokenize("a := 1\n\n\n\nb := 2\n\n").unwrap());

        assert!(tokens.windows(2)
                      .all(|pair| !(pair[0].kind == TokenKind::Terminator
                                    && pair[1].kind == TokenKind::Terminator)));
        assert_eq!(texts("a := 1\n\n\n\nb := 2\n\n"),
                   ["a", ":=", "1", ";", "b", ":=", "2", ";", "$"]);
    }

    #[test]
    fn juxtaposed_statements_are_split() {
        assert_eq!(texts("x := 0 while x < 3 { print x x := x + 1 }"),
                   ["x", ":=", "0", ";", "while", "x", "<", "3", "{", "print", "x", ";", "x",
                    ":=", "x", "+", "1", "}", ";", "$"]);
    }

    #[test]
    fn closing_brace_ends_a_statement() {
        assert_eq!(texts("if true { if true { print 1 } } print 2"),
                   ["if", "true", "{", "if", "true", "{", "print", "1", "}", "}", ";", "print",
                    "2", ";", "$"]);
    }

    #[test]
    fn number_flush_against_a_name_stays_in_one_statement() {
        assert_eq!(texts("print 2x"), ["print", "2", "x", ";", "$"]);
        assert_eq!(texts("print 2 x"), ["print", "2", ";", "x", ";", "$"]);
    }

    #[test]
    fn binary_minus_is_not_a_statement_start() {
        assert_eq!(texts("x := 5 - 3"), ["x", ":=", "5", "-", "3", ";", "$"]);
    }
}
