use std::ops::Range;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses an `if` or `while` statement starting at `keyword`.
    ///
    /// Syntax:
    /// ```text
    ///     if <condition> { <statements> }
    ///     while <condition> { <statements> }
    /// ```
    /// The condition is everything between the keyword and the first `{`,
    /// which may sit on a later line. The body runs to the matching `}` and is parsed
    /// recursively, so it may hold further control statements.
    ///
    /// # Parameters
    /// - `keyword`: Index of the `if`/`while` token.
    /// - `end`: Exclusive end of the enclosing range.
    /// - `depth`: Block depth of the enclosing range.
    ///
    /// # Returns
    /// The `If`/`While` node and the index just past its closing `}`.
    ///
    /// # Errors
    /// - `NestingTooDeep` if `depth` already reached the limit.
    /// - `MissingBlock` if no `{` follows the condition.
    /// - `InvalidCondition` if the condition is not exactly one expression.
    /// - `UnclosedBlock` if the `{` has no matching `}`.
    pub fn parse_control(&mut self,
                         keyword: usize,
                         end: usize,
                         depth: usize)
                         -> ParseResult<(Expr, usize)> {
        let token = &self.tokens[keyword];
        let (kind, position) = (token.kind, token.position());

        if depth >= self.max_depth {
            return Err(ParseError::NestingTooDeep { limit: self.max_depth,
                                                    position });
        }

        let open = self.block_start(keyword, end)?;
        let condition = self.parse_condition(keyword + 1..open, keyword)?;
        let close = self.matching_block_end(open, end)?;
        let body = self.parse_range(open + 1..close, depth + 1)?;

        let statement = if kind == TokenKind::While {
            Expr::While { condition: Box::new(condition),
                          body,
                          position }
        } else {
            Expr::If { condition: Box::new(condition),
                       body,
                       position }
        };

        Ok((statement, close + 1))
    }

    /// Finds the `{` opening the block of the control statement at `keyword`.
    fn block_start(&self, keyword: usize, end: usize) -> ParseResult<usize> {
        for index in keyword + 1..end {
            match self.tokens[index].kind {
                TokenKind::BlockStart => return Ok(index),
                TokenKind::BlockEnd | TokenKind::End => break,
                _ => {},
            }
        }

        let token = &self.tokens[keyword];
        Err(ParseError::MissingBlock { keyword:  token.text.clone(),
                                       position: token.position(), })
    }

    /// Builds the condition span into exactly one expression.
    fn parse_condition(&mut self, span: Range<usize>, keyword: usize) -> ParseResult<Expr> {
        let mut statements = self.parse_straight(span)?;

        match (statements.pop(), statements.is_empty()) {
            (Some(condition), true) => Ok(condition),
            _ => {
                let token = &self.tokens[keyword];
                Err(ParseError::InvalidCondition { keyword:  token.text.clone(),
                                                   position: token.position(), })
            },
        }
    }

    /// Returns the index of the `}` matching the `{` at `open`.
    ///
    /// A counter goes up on every `{` and down on every `}`; the match is
    /// the `}` that brings it back to zero.
    pub fn matching_block_end(&self, open: usize, end: usize) -> ParseResult<usize> {
        let mut nesting = 0usize;

        for index in open..end {
            match self.tokens[index].kind {
                TokenKind::BlockStart => nesting += 1,
                TokenKind::BlockEnd => {
                    nesting -= 1;
                    if nesting == 0 {
                        return Ok(index);
                    }
                },
                _ => {},
            }
        }

        Err(ParseError::UnclosedBlock { position: self.tokens[open].position() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::{lexer::tokenize, normalizer::normalize, symbols::SymbolTable};

    fn parse(source: &str, max_depth: usize) -> ParseResult<Vec<Expr>> {
        let tokens = normalize(tokenize(source)?);
        let mut symbols = SymbolTable::new();
        Parser::new(&tokens, &mut symbols, max_depth).parse_program()
    }

    #[test]
    fn nested_blocks_are_extracted_recursively() {
        let source = "while true {\n  if false {\n    print 1\n  }\n  print 2\n}";
        let program = parse(source, 256).unwrap();

        let [Expr::While { body, .. }] = &program[..] else {
            panic!("expected one while loop, got {program:?}");
        };
        assert!(matches!(body[..], [Expr::If { .. }, Expr::Print { .. }]));
    }

    #[test]
    fn one_line_loops_are_split_into_statements() {
        let program = parse("x := 0 while x < 3 { print x x := x + 1 }", 256).unwrap();

        let [Expr::Assignment { .. }, Expr::While { body, .. }] = &program[..] else {
            panic!("expected an assignment and a loop, got {program:?}");
        };
        assert_eq!(body.len(), 2);
    }

    #[test]
    fn block_must_follow_the_condition() {
        assert!(matches!(parse("if true\nprint 1", 256),
                         Err(ParseError::MissingBlock { .. })));
    }

    #[test]
    fn block_may_open_on_the_next_line() {
        let program = parse("x := 1\nif x = 1\n{\n  print x\n}\nwhile false\n{\n}", 256).unwrap();

        let [Expr::Assignment { .. }, Expr::If { body, .. }, Expr::While { .. }] = &program[..]
        else {
            panic!("expected an assignment, an if and a while, got {program:?}");
        };
        assert!(matches!(body[..], [Expr::Print { .. }]));
    }

    #[test]
    fn a_condition_spanning_statements_is_rejected() {
        assert!(matches!(parse("if true\nprint 1\n{\n}", 256),
                         Err(ParseError::InvalidCondition { .. })));
    }

    #[test]
    fn block_must_be_closed() {
        assert!(matches!(parse("while true {\nprint 1", 256),
                         Err(ParseError::UnclosedBlock { .. })));
        assert!(matches!(parse("if true { if true { print 1 }", 256),
                         Err(ParseError::UnclosedBlock { .. })));
    }

    #[test]
    fn condition_must_be_one_expression() {
        assert!(matches!(parse("if { print 1 }", 256),
                         Err(ParseError::InvalidCondition { .. })));
    }

    #[test]
    fn block_depth_is_limited() {
        let source = format!("{}print 1{}", "if true { ".repeat(4), " }".repeat(4));

        assert!(parse(&source, 4).is_ok());
        assert!(matches!(parse(&source, 3), Err(ParseError::NestingTooDeep { limit: 3, .. })));
    }
}
