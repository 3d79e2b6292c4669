use std::fmt;

use logos::Logos;

use crate::{error::ParseError, interpreter::parser::core::ParseResult};

/// Classifies a lexical token in the source input.
///
/// The lexer only produces the variants carrying a `token` or `regex`
/// attribute. `End`, `Negate` and `Terminator` are synthesized later: the
/// end marker by [`tokenize`], terminators at every line end, and `Negate`
/// by the linearizer when a `-` sits in unary position.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// End of the whole input.
    End,
    /// Variable names such as `x` or `total`.
    #[regex(r#"\p{L}[^\s+\-*/()^<>=!&|:{}"]*"#, allow_greedy = true)]
    Identifier,
    /// Double quoted string literal. The token text excludes the quotes.
    #[regex(r#""[^"]*""#)]
    Str,
    /// Integer literal, such as `42`.
    #[regex(r"[0-9]+")]
    Int,
    /// Decimal literal, such as `3.14`.
    #[regex(r"[0-9]+\.[0-9]+")]
    Decimal,
    /// `true` or `false`.
    #[token("true")]
    #[token("false")]
    Bool,
    /// `+`
    #[token("+")]
    Add,
    /// `-`
    #[token("-")]
    Subtract,
    /// `*`
    #[token("*")]
    Multiply,
    /// `/`
    #[token("/")]
    Divide,
    /// `^`
    #[token("^")]
    Exponent,
    /// Unary `-`.
    Negate,
    /// `!`
    #[token("!")]
    Not,
    /// `(`
    #[token("(")]
    OpenParen,
    /// `)`
    #[token(")")]
    CloseParen,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `=`
    #[token("=")]
    Equal,
    /// `!=`
    #[token("!=")]
    NotEqual,
    /// `&`
    #[token("&")]
    And,
    /// `|`
    #[token("|")]
    Or,
    /// `:=`
    #[token(":=")]
    Assign,
    /// End of a statement; one per source line.
    Terminator,
    /// `print`
    #[token("print")]
    Print,
    /// `input`
    #[token("input")]
    Input,
    /// `del`
    #[token("del")]
    Delete,
    /// `if`
    #[token("if")]
    If,
    /// `while`
    #[token("while")]
    While,
    /// `{`
    #[token("{")]
    BlockStart,
    /// `}`
    #[token("}")]
    BlockEnd,
    /// Spaces, tabs and stray carriage returns.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

impl TokenKind {
    /// Returns `true` for every kind the linearizer treats as an operator.
    ///
    /// Parentheses, operands, terminators and the control keywords are not
    /// operators.
    #[must_use]
    pub const fn is_operator(self) -> bool {
        matches!(self,
                 Self::Add
                 | Self::Subtract
                 | Self::Multiply
                 | Self::Divide
                 | Self::Exponent
                 | Self::Negate
                 | Self::Not
                 | Self::Less
                 | Self::LessEqual
                 | Self::Greater
                 | Self::GreaterEqual
                 | Self::Equal
                 | Self::NotEqual
                 | Self::And
                 | Self::Or
                 | Self::Assign
                 | Self::Print
                 | Self::Input
                 | Self::Delete
                 | Self::BlockStart
                 | Self::BlockEnd)
    }

    /// Returns `true` for literals and identifiers.
    #[must_use]
    pub const fn is_operand(self) -> bool {
        matches!(self, Self::Identifier | Self::Str | Self::Int | Self::Decimal | Self::Bool)
    }

    /// Returns `true` if a token of this kind can close an operand.
    #[must_use]
    pub const fn ends_operand(self) -> bool {
        self.is_operand() || matches!(self, Self::CloseParen)
    }

    /// Returns `true` if a token of this kind can open a new statement.
    #[must_use]
    pub const fn starts_statement(self) -> bool {
        self.is_operand()
        || matches!(self,
                    Self::OpenParen
                    | Self::Not
                    | Self::Print
                    | Self::Input
                    | Self::Delete
                    | Self::If
                    | Self::While)
    }

    /// Returns `true` for `if` and `while`.
    #[must_use]
    pub const fn is_control(self) -> bool {
        matches!(self, Self::If | Self::While)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::End => "end of input",
            Self::Identifier => "identifier",
            Self::Str => "string",
            Self::Int => "integer",
            Self::Decimal => "decimal",
            Self::Bool => "bool",
            Self::Add => "+",
            Self::Subtract | Self::Negate => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Exponent => "^",
            Self::Not => "!",
            Self::OpenParen => "(",
            Self::CloseParen => ")",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::Equal => "=",
            Self::NotEqual => "!=",
            Self::And => "&",
            Self::Or => "|",
            Self::Assign => ":=",
            Self::Terminator => "end of statement",
            Self::Print => "print",
            Self::Input => "input",
            Self::Delete => "del",
            Self::If => "if",
            Self::While => "while",
            Self::BlockStart => "{",
            Self::BlockEnd => "}",
            Self::Ignored => "whitespace",
        };
        write!(f, "{label}")
    }
}

/// A location in the source: 1-based line, 0-based character cursor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Position {
    /// Source line, starting at 1.
    pub line:   usize,
    /// Character offset of the token start within its line.
    pub cursor: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, cursor {}", self.line, self.cursor)
    }
}

/// A classified piece of source text with its position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The matched text. String literals exclude their quotes.
    pub text:   String,
    /// What the token is.
    pub kind:   TokenKind,
    /// Character offset of the token start within its line.
    pub cursor: usize,
    /// Source line of the token.
    pub line:   usize,
}

impl Token {
    /// Creates a token.
    pub fn new(text: impl Into<String>, kind: TokenKind, cursor: usize, line: usize) -> Self {
        Self { text: text.into(),
               kind,
               cursor,
               line }
    }

    /// Creates the synthetic end-of-input marker.
    #[must_use]
    pub fn end(line: usize) -> Self {
        Self::new("", TokenKind::End, 0, line)
    }

    /// Creates a synthetic statement terminator at `position`.
    #[must_use]
    pub fn terminator(position: Position) -> Self {
        Self::new("", TokenKind::Terminator, position.cursor, position.line)
    }

    /// Returns where the token starts.
    #[must_use]
    pub const fn position(&self) -> Position {
        Position { line:   self.line,
                   cursor: self.cursor, }
    }
}

/// Line-at-a-time tokenizer.
///
/// Each call to [`Lexer::new_line`] resets the cursor and advances the line
/// counter; iterating then yields the tokens of that line followed by a
/// single [`TokenKind::Terminator`]. The first lexical error ends the line.
pub struct Lexer<'source> {
    inner: logos::Lexer<'source, TokenKind>,
    line:  usize,
    done:  bool,
}

impl Default for Lexer<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'source> Lexer<'source> {
    /// Creates a lexer positioned before the first line.
    #[must_use]
    pub fn new() -> Self {
        Self { inner: TokenKind::lexer(""),
               line:  0,
               done:  true, }
    }

    /// Starts tokenizing `text` as the next source line.
    pub fn new_line(&mut self, text: &'source str) {
        self.inner = TokenKind::lexer(text);
        self.line += 1;
        self.done = false;
    }

    /// Returns the number of the current line (0 before the first line).
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    fn cursor_at(&self, byte: usize) -> usize {
        self.inner.source()[..byte].chars().count()
    }

    fn error_at(&self, byte: usize) -> ParseError {
        let position = Position { line:   self.line,
                                  cursor: self.cursor_at(byte), };
        let rest = &self.inner.source()[byte..];

        if rest.starts_with('"') {
            ParseError::UnterminatedString { position }
        } else {
            ParseError::InvalidCharacter { character: rest.chars().next().unwrap_or(' '),
                                           position }
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = ParseResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.inner.next() {
            Some(Ok(kind)) => {
                let span = self.inner.span();
                let slice = self.inner.slice();
                let text = if kind == TokenKind::Str {
                    &slice[1..slice.len() - 1]
                } else {
                    slice
                };

                Some(Ok(Token::new(text, kind, self.cursor_at(span.start), self.line)))
            },
            Some(Err(())) => {
                self.done = true;
                Some(Err(self.error_at(self.inner.span().start)))
            },
            None => {
                self.done = true;
                let cursor = self.cursor_at(self.inner.source().len());
                Some(Ok(Token::new("", TokenKind::Terminator, cursor, self.line)))
            },
        }
    }
}

/// Tokenizes a whole source text line by line.
///
/// Every line contributes its tokens and one terminator; the sequence ends
/// with a [`TokenKind::End`] marker. The first lexical error aborts
/// tokenization of the remaining input.
///
/// # Errors
/// Returns `InvalidCharacter` or `UnterminatedString`.
///
/// # Example
/// ```
/// use linescript::interpreter::lexer::{TokenKind, tokenize};
///
/// let kinds: Vec<_> = tokenize("x := 1.5").unwrap().iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            [TokenKind::Identifier,
///             TokenKind::Assign,
///             TokenKind::Decimal,
///             TokenKind::Terminator,
///             TokenKind::End]);
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<Token>> {
    let mut lexer = Lexer::new();
    let mut tokens = Vec::new();

    for line in source.lines() {
        lexer.new_line(line);

        for token in lexer.by_ref() {
            tokens.push(token?);
        }
    }

    tokens.push(Token::end(lexer.line()));
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn kinds(line: &str) -> Vec<TokenKind> {
        let mut lexer = Lexer::new();
        lexer.new_line(line);
        lexer.map(|token| token.unwrap().kind).collect()
    }

    #[test]
    fn digraphs_fall_back_to_single_characters() {
        use TokenKind::{
            Equal, Greater, GreaterEqual, Int, Less, LessEqual, Not, NotEqual, Terminator,
        };

        assert_eq!(kinds("1 <= 2 >= 3 != 4"),
                   [Int, LessEqual, Int, GreaterEqual, Int, NotEqual, Int, Terminator]);
        assert_eq!(kinds("1 < 2 > 3 = 4 !"),
                   [Int, Less, Int, Greater, Int, Equal, Int, Not, Terminator]);
    }

    #[test]
    fn reserved_words_match_whole_runs_only() {
        use TokenKind::{Bool, Delete, Identifier, If, Input, Print, Terminator, While};

        assert_eq!(kinds("print input del if while true false"),
                   [Print, Input, Delete, If, While, Bool, Bool, Terminator]);
        assert_eq!(kinds("printer iffy delta truth"),
                   [Identifier, Identifier, Identifier, Identifier, Terminator]);
    }

    #[test]
    fn identifiers_stop_at_operators() {
        let mut lexer = Lexer::new();
        lexer.new_line("(total+x_2)");
        let texts: Vec<_> = lexer.map(|token| token.unwrap().text).collect();

        assert_eq!(texts, ["(", "total", "+", "x_2", ")", ""]);
    }

    #[test]
    fn strings_drop_their_quotes_and_keep_positions() {
        let mut lexer = Lexer::new();
        lexer.new_line("print \"hi there\"");
        let token = lexer.nth(1).unwrap().unwrap();

        assert_eq!(token, Token::new("hi there", TokenKind::Str, 6, 1));
    }

    #[test]
    fn numbers_switch_to_decimal_on_a_dot() {
        assert_eq!(kinds("12 12.5"),
                   [TokenKind::Int, TokenKind::Decimal, TokenKind::Terminator]);
    }

    #[test]
    fn lexer_restarts_per_line() {
        let mut lexer = Lexer::new();
        lexer.new_line("a");
        assert_eq!(lexer.by_ref().count(), 2);

        lexer.new_line("  b");
        let token = lexer.next().unwrap().unwrap();
        assert_eq!(token.position(), Position { line: 2, cursor: 2 });
    }

    #[test]
    fn unterminated_string_is_reported() {
        let error = tokenize("x := \"abc").unwrap_err();

        assert!(matches!(error,
                         ParseError::UnterminatedString { position: Position { line: 1,
                                                                                cursor: 5, }, }));
    }

    #[test]
    fn invalid_character_aborts_tokenizing() {
        let error = tokenize("x := 1\ny := 2 # 3\nprint y").unwrap_err();

        assert!(matches!(error, ParseError::InvalidCharacter { character: '#', .. }));
    }

    #[test]
    fn lone_colon_is_invalid() {
        assert!(matches!(tokenize("x : 1"),
                         Err(ParseError::InvalidCharacter { character: ':', .. })));
    }

    #[test]
    fn every_line_ends_with_a_terminator() {
        let tokens = tokenize("\n\nprint 1").unwrap();
        let terminators = tokens.iter().filter(|t| t.kind == TokenKind::Terminator).count();

        assert_eq!(terminators, 3);
        assert_eq!(tokens.last().unwrap().kind, TokenKind::End);
    }
}
