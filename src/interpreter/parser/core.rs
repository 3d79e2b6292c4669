use std::ops::Range;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        linearizer::to_postfix,
        parser::postfix::TreeBuilder,
        symbols::SymbolTable,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Builds statement trees from a normalized token buffer.
///
/// The parser never copies the buffer; every nested block is parsed as an
/// index range of the same slice. String literals and identifiers are
/// interned into the borrowed [`SymbolTable`].
pub struct Parser<'a> {
    pub(super) tokens:    &'a [Token],
    pub(super) symbols:   &'a mut SymbolTable,
    pub(super) max_depth: usize,
}

impl<'a> Parser<'a> {
    /// Creates a parser over `tokens`.
    ///
    /// # Parameters
    /// - `tokens`: Normalized tokens, usually ending with the end marker.
    /// - `symbols`: Tables receiving interned strings and names.
    /// - `max_depth`: Deepest expression or block nesting accepted.
    pub fn new(tokens: &'a [Token], symbols: &'a mut SymbolTable, max_depth: usize) -> Self {
        Self { tokens,
               symbols,
               max_depth }
    }

    /// Parses the whole buffer into top-level statements.
    ///
    /// # Example
    /// ```
    /// use linescript::interpreter::{
    ///     lexer::tokenize, normalizer::normalize, parser::core::Parser, symbols::SymbolTable,
    /// };
    ///
    /// let tokens = normalize(tokenize("x := 1\nif x = 1 {\n  print x\n}").unwrap());
    /// let mut symbols = SymbolTable::new();
    /// let program = Parser::new(&tokens, &mut symbols, 256).parse_program().unwrap();
    ///
    /// assert_eq!(program.len(), 2);
    /// assert_eq!(symbols.find_name("x").map(|id| id.index()), Some(0));
    /// ```
    pub fn parse_program(&mut self) -> ParseResult<Vec<Expr>> {
        self.parse_range(0..self.tokens.len(), 0)
    }

    /// Parses `range` of the buffer into a statement sequence.
    ///
    /// Runs of straight-line statements are linearized and built as a whole;
    /// each `if`/`while` is handed to [`Parser::parse_control`], which
    /// recurses into its body at `depth + 1`.
    ///
    /// # Errors
    /// `UnexpectedToken` for a `{` or `}` outside a control statement, plus
    /// any error of the linearizer, the tree builder or the block parser.
    pub fn parse_range(&mut self, range: Range<usize>, depth: usize) -> ParseResult<Vec<Expr>> {
        let mut statements = Vec::new();
        let mut start = range.start;
        let mut index = range.start;

        while index < range.end {
            let token = &self.tokens[index];

            match token.kind {
                kind if kind.is_control() => {
                    statements.extend(self.parse_straight(start..index)?);

                    let (statement, next) = self.parse_control(index, range.end, depth)?;
                    statements.push(statement);
                    start = next;
                    index = next;
                },
                TokenKind::BlockStart | TokenKind::BlockEnd => {
                    return Err(ParseError::UnexpectedToken { token:    token.text.clone(),
                                                             position: token.position(), });
                },
                _ => index += 1,
            }
        }

        statements.extend(self.parse_straight(start..range.end)?);
        Ok(statements)
    }

    /// Linearizes and builds a run that holds no control statement.
    pub(super) fn parse_straight(&mut self, range: Range<usize>) -> ParseResult<Vec<Expr>> {
        if range.is_empty() {
            return Ok(Vec::new());
        }

        let postfix = to_postfix(&self.tokens[range])?;
        TreeBuilder::new(self.symbols, self.max_depth).build(&postfix)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::interpreter::{lexer::tokenize, normalizer::normalize};

    fn parse(source: &str) -> ParseResult<Vec<Expr>> {
        let tokens = normalize(tokenize(source)?);
        let mut symbols = SymbolTable::new();
        Parser::new(&tokens, &mut symbols, 256).parse_program()
    }

    #[test]
    fn blank_lines_produce_no_statements() {
        assert!(parse("\n\n\n").unwrap().is_empty());
        assert_eq!(parse("print 1\n\n\nprint 2").unwrap().len(), 2);
    }

    #[test]
    fn statements_around_blocks_keep_their_order() {
        let program = parse("x := 0\nwhile x < 3 {\n  x := x + 1\n}\nprint x").unwrap();

        assert_eq!(program.len(), 3);
        assert!(matches!(program[0], Expr::Assignment { .. }));
        assert!(matches!(program[1], Expr::While { .. }));
        assert!(matches!(program[2], Expr::Print { .. }));
    }

    #[test]
    fn stray_braces_are_rejected() {
        assert!(matches!(parse("print 1 }"), Err(ParseError::UnexpectedToken { .. })));
        assert!(matches!(parse("{ print 1 }"), Err(ParseError::UnexpectedToken { .. })));
    }

    #[test]
    fn assignment_cannot_take_a_block() {
        assert!(matches!(parse("x := if true { 1 }"), Err(ParseError::MissingOperand { .. })));
    }
}
