use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::ParseResult,
        symbols::SymbolTable,
    },
};

/// Builds statement trees from postfix tokens.
///
/// Every operand stack entry carries the depth of its tree. A node is one
/// level deeper than its deepest child, and a tree deeper than `max_depth`
/// is rejected before it can exhaust the evaluator's stack.
pub struct TreeBuilder<'a> {
    symbols:    &'a mut SymbolTable,
    max_depth:  usize,
    operands:   Vec<(Expr, usize)>,
    statements: Vec<Expr>,
}

impl<'a> TreeBuilder<'a> {
    /// Creates a builder interning into `symbols`.
    pub fn new(symbols: &'a mut SymbolTable, max_depth: usize) -> Self {
        Self { symbols,
               max_depth,
               operands: Vec::new(),
               statements: Vec::new() }
    }

    /// Consumes a postfix run and returns its completed statements.
    ///
    /// Literals and identifiers push leaf nodes; operators pop their
    /// operands and push the combined node. A terminator or the end marker
    /// completes the statement left on the stack, if any.
    ///
    /// # Parameters
    /// - `postfix`: Output of
    ///   [`to_postfix`](crate::interpreter::linearizer::to_postfix).
    ///
    /// # Returns
    /// One tree per statement, in source order.
    ///
    /// # Errors
    /// - `MissingOperand` if an operator finds too few operands.
    /// - `DanglingOperand` if a statement leaves more than one tree.
    /// - `UnexpectedToken` for braces, parentheses or keywords.
    /// - `NestingTooDeep` if a tree grows deeper than the limit.
    ///
    /// # Example
    /// ```
    /// use linescript::{
    ///     ast::{BinaryOperator, Expr},
    ///     interpreter::{
    ///         lexer::tokenize, linearizer::to_postfix, parser::postfix::TreeBuilder,
    ///         symbols::SymbolTable,
    ///     },
    /// };
    ///
    /// let postfix = to_postfix(&tokenize("1 - 2").unwrap()).unwrap();
    /// let mut symbols = SymbolTable::new();
    /// let statements = TreeBuilder::new(&mut symbols, 256).build(&postfix).unwrap();
    ///
    /// assert!(matches!(statements[..],
    ///                  [Expr::BinaryOp { op: BinaryOperator::Sub, .. }]));
    /// ```
    pub fn build(mut self, postfix: &[Token]) -> ParseResult<Vec<Expr>> {
        for token in postfix {
            self.push_token(token)?;
        }
        self.finish_statement()?;

        Ok(self.statements)
    }

    fn push_token(&mut self, token: &Token) -> ParseResult<()> {
        let position = token.position();

        match token.kind {
            TokenKind::Int => self.push_leaf(Expr::Int { text: token.text.clone(),
                                                         position }),
            TokenKind::Decimal => self.push_leaf(Expr::Decimal { text: token.text.clone(),
                                                                 position }),
            TokenKind::Str => {
                let id = self.symbols.intern_string(&token.text);
                self.push_leaf(Expr::Str { id, position });
            },
            TokenKind::Bool => self.push_leaf(Expr::Bool { value: token.text == "true",
                                                           position }),
            TokenKind::Identifier => {
                let name = self.symbols.intern_name(&token.text);
                self.push_leaf(Expr::Identifier { name, position });
            },
            TokenKind::Terminator | TokenKind::End => self.finish_statement()?,
            TokenKind::Assign => {
                let (value, value_depth) = self.pop_operand(token)?;
                let (target, target_depth) = self.pop_operand(token)?;
                self.push_node(Expr::Assignment { target: Box::new(target),
                                                  value: Box::new(value),
                                                  position },
                               target_depth.max(value_depth),
                               token)?;
            },
            TokenKind::Print => {
                let (expr, depth) = self.pop_operand(token)?;
                self.push_node(Expr::Print { expr: Box::new(expr),
                                             position },
                               depth,
                               token)?;
            },
            TokenKind::Input => {
                let (prompt, depth) = self.pop_operand(token)?;
                self.push_node(Expr::Input { prompt: Box::new(prompt),
                                             position },
                               depth,
                               token)?;
            },
            TokenKind::Delete => {
                let (target, depth) = self.pop_operand(token)?;
                self.push_node(Expr::Delete { target: Box::new(target),
                                              position },
                               depth,
                               token)?;
            },
            kind => {
                if let Some(op) = BinaryOperator::from_token(kind) {
                    let (right, right_depth) = self.pop_operand(token)?;
                    let (left, left_depth) = self.pop_operand(token)?;
                    self.push_node(Expr::BinaryOp { left: Box::new(left),
                                                    op,
                                                    right: Box::new(right),
                                                    position },
                                   left_depth.max(right_depth),
                                   token)?;
                } else if let Some(op) = UnaryOperator::from_token(kind) {
                    let (expr, depth) = self.pop_operand(token)?;
                    self.push_node(Expr::UnaryOp { op,
                                                   expr: Box::new(expr),
                                                   position },
                                   depth,
                                   token)?;
                } else {
                    return Err(ParseError::UnexpectedToken { token: token.text.clone(),
                                                             position });
                }
            },
        }

        Ok(())
    }

    fn push_leaf(&mut self, expr: Expr) {
        self.operands.push((expr, 1));
    }

    /// Pushes a node whose deepest child has depth `child_depth`.
    fn push_node(&mut self, expr: Expr, child_depth: usize, token: &Token) -> ParseResult<()> {
        let depth = child_depth + 1;
        if depth > self.max_depth {
            return Err(ParseError::NestingTooDeep { limit:    self.max_depth,
                                                    position: token.position(), });
        }

        self.operands.push((expr, depth));
        Ok(())
    }

    fn pop_operand(&mut self, operator: &Token) -> ParseResult<(Expr, usize)> {
        self.operands.pop().ok_or_else(|| ParseError::MissingOperand {
            operator: operator.text.clone(),
            position: operator.position(),
        })
    }

    fn finish_statement(&mut self) -> ParseResult<()> {
        if let Some((extra, _)) = self.operands.get(1) {
            return Err(ParseError::DanglingOperand { position: extra.position() });
        }

        if let Some((statement, _)) = self.operands.pop() {
            self.statements.push(statement);
        }
        Ok(())
    }
}
