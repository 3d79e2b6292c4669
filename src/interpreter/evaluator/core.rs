use std::{
    collections::HashMap,
    io::{self, BufRead, Write},
};

use crate::{
    ast::Expr,
    error::{LiteralError, RuntimeError},
    interpreter::{lexer::Position, symbols::SymbolTable, value::core::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: the string and variable-name
/// tables, the variable environment and the reader and writer used by
/// `input` and `print`.
///
/// ## Usage
///
/// `Context` is created once per program and reused for every statement.
/// The parser interns into [`Context::symbols`] before evaluation, so the
/// handles in the tree and in the values always refer to these tables.
pub struct Context {
    /// String and variable-name tables.
    pub symbols:   SymbolTable,
    /// Bindings from variable name to value. Never holds an
    /// [`Value::Identifier`].
    pub variables: HashMap<String, Value>,
    input:         Box<dyn BufRead>,
    output:        Box<dyn Write>,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Creates a context reading from stdin and writing to stdout.
    #[must_use]
    pub fn new() -> Self {
        Self::with_io(io::stdin().lock(), io::stdout())
    }

    /// Creates a context with its own reader and writer.
    ///
    /// # Example
    /// ```
    /// use std::io;
    ///
    /// use linescript::interpreter::evaluator::core::Context;
    ///
    /// let context = Context::with_io(io::empty(), io::sink());
    /// assert!(context.variables.is_empty());
    /// ```
    pub fn with_io(input: impl BufRead + 'static, output: impl Write + 'static) -> Self {
        Self { symbols:   SymbolTable::new(),
               variables: HashMap::new(),
               input:     Box::new(input),
               output:    Box::new(output), }
    }

    /// Evaluates an expression or statement.
    ///
    /// This is the main entry point for evaluation. Literals and operators
    /// produce a value; identifiers produce an unresolved
    /// [`Value::Identifier`] slot that the consumer resolves or binds.
    ///
    /// # Parameters
    /// - `expr`: Node to evaluate.
    ///
    /// # Returns
    /// `Some(Value)` for nodes that produce a value, or `None` for
    /// assignment, `print`, `del`, `if` and `while`.
    ///
    /// # Example
    /// ```
    /// use std::io;
    ///
    /// use linescript::{
    ///     ast::Expr,
    ///     interpreter::{evaluator::core::Context, lexer::Position, value::core::Value},
    /// };
    ///
    /// let mut context = Context::with_io(io::empty(), io::sink());
    /// let literal = Expr::Int { text:     "42".to_string(),
    ///                           position: Position::default(), };
    ///
    /// assert_eq!(context.eval(&literal).unwrap(), Some(Value::Integer(42)));
    /// ```
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Option<Value>> {
        match expr {
            Expr::Int { text, position } => {
                let value = text.parse::<i64>()
                                .map_err(|e| Self::invalid_literal(text, *position, e))?;
                Ok(Some(Value::Integer(value)))
            },
            Expr::Decimal { text, position } => {
                let value = text.parse::<f64>()
                                .map_err(|e| Self::invalid_literal(text, *position, e))?;
                Ok(Some(Value::Decimal(value)))
            },
            Expr::Str { id, .. } => Ok(Some(Value::Str(*id))),
            Expr::Bool { value, .. } => Ok(Some(Value::Bool(*value))),
            Expr::Identifier { name, .. } => Ok(Some(Value::Identifier(*name))),
            Expr::BinaryOp { left,
                             op,
                             right,
                             position, } => {
                let left = self.eval_operand(left)?;
                let right = self.eval_operand(right)?;
                self.eval_binary(*op, left, right, *position).map(Some)
            },
            Expr::UnaryOp { op, expr, position } => {
                let value = self.eval_operand(expr)?;
                Self::eval_unary(*op, value, *position).map(Some)
            },
            Expr::Assignment { target,
                               value,
                               position, } => self.eval_assignment(target, value, *position),
            Expr::Print { expr, .. } => self.eval_print(expr),
            Expr::Input { prompt, .. } => self.eval_input(prompt).map(Some),
            Expr::Delete { target, position } => self.eval_delete(target, *position),
            Expr::If { condition,
                       body,
                       position, } => self.eval_if(condition, body, *position),
            Expr::While { condition,
                          body,
                          position, } => self.eval_while(condition, body, *position),
        }
    }

    fn invalid_literal(text: &str,
                       position: Position,
                       source: impl Into<LiteralError>)
                       -> RuntimeError {
        RuntimeError::InvalidLiteral { text: text.to_owned(),
                                       position,
                                       source: source.into() }
    }

    /// Evaluates a node that must produce a value, without resolving it.
    ///
    /// # Errors
    /// `MissingValue` if the node is a statement such as an assignment.
    pub fn eval_value(&mut self, expr: &Expr) -> EvalResult<Value> {
        self.eval(expr)?
            .ok_or(RuntimeError::MissingValue { position: expr.position() })
    }

    /// Evaluates a node and resolves an identifier result to its binding.
    ///
    /// This is how every operator, condition and built-in reads its operands.
    pub fn eval_operand(&mut self, expr: &Expr) -> EvalResult<Value> {
        let value = self.eval_value(expr)?;
        self.resolve(value, expr.position())
    }

    /// Looks up an identifier slot in the environment.
    ///
    /// Other values are returned unchanged.
    ///
    /// # Errors
    /// `NoIdentifierAvailable` if the name has no binding.
    pub fn resolve(&self, value: Value, position: Position) -> EvalResult<Value> {
        let Value::Identifier(id) = value else {
            return Ok(value);
        };

        let name = self.symbols.name(id);
        self.variables
            .get(name)
            .copied()
            .ok_or_else(|| RuntimeError::NoIdentifierAvailable { name: name.to_owned(),
                                                                 position })
    }

    /// Binds the result of `value` to the identifier slot `target`.
    ///
    /// The target is evaluated first, then the value, which is resolved
    /// before it is stored, so the environment never holds a slot.
    ///
    /// # Errors
    /// `ExpectedIdentifier` if `target` is not an identifier, plus any error
    /// of evaluating either side.
    pub fn eval_assignment(&mut self,
                           target: &Expr,
                           value: &Expr,
                           position: Position)
                           -> EvalResult<Option<Value>> {
        let target = self.eval_value(target)?;
        let value = self.eval_operand(value)?;

        let Value::Identifier(id) = target else {
            return Err(RuntimeError::ExpectedIdentifier { operator: ":=",
                                                          position });
        };

        self.variables.insert(self.symbols.name(id).to_owned(), value);
        Ok(None)
    }

    /// Returns the current binding of `name`.
    #[must_use]
    pub fn variable(&self, name: &str) -> Option<Value> {
        self.variables.get(name).copied()
    }

    /// Reads one line from the context's reader.
    ///
    /// Returns `Ok(None)` at end of input.
    pub(super) fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Writes the textual form of `value` as one line.
    pub(super) fn write_line(&mut self, value: Value) -> EvalResult<()> {
        writeln!(self.output, "{}", value.display(&self.symbols))?;
        Ok(())
    }

    /// Flushes the writer.
    pub fn flush(&mut self) -> EvalResult<()> {
        self.output.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        ast::{BinaryOperator, UnaryOperator},
        interpreter::{lexer::tokenize, normalizer::normalize, parser::core::Parser},
    };

    fn position() -> Position {
        Position { line:   1,
                   cursor: 0, }
    }

    fn at(cursor: usize) -> Position {
        Position { line: 1, cursor }
    }

    fn int(text: &str) -> Expr {
        Expr::Int { text:     text.to_owned(),
                    position: position(), }
    }

    fn int_at(text: &str, cursor: usize) -> Expr {
        Expr::Int { text:     text.to_owned(),
                    position: at(cursor), }
    }

    fn binary(left: Expr, op: BinaryOperator, right: Expr, cursor: usize) -> Expr {
        Expr::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right),
                         position: at(cursor) }
    }

    fn parse_one(context: &mut Context, source: &str) -> Expr {
        let tokens = normalize(tokenize(source).unwrap());
        let mut program = Parser::new(&tokens, &mut context.symbols, 256).parse_program().unwrap();

        assert_eq!(program.len(), 1);
        program.remove(0)
    }

    #[test]
    fn parsed_statements_match_hand_built_trees() {
        let mut context = Context::with_io(io::empty(), io::sink());
        let cases = [("2 + 3 * 4",
                      binary(int_at("2", 0),
                             BinaryOperator::Add,
                             binary(int_at("3", 4), BinaryOperator::Mul, int_at("4", 8), 6),
                             2),
                      Value::Integer(14)),
                     ("-3 + 4",
                      binary(Expr::UnaryOp { op:       UnaryOperator::Negate,
                                             expr:     Box::new(int_at("3", 1)),
                                             position: at(0), },
                             BinaryOperator::Add,
                             int_at("4", 5),
                             3),
                      Value::Integer(1))];

        for (source, expected_tree, expected_value) in cases {
            let parsed = parse_one(&mut context, source);

            assert_eq!(parsed, expected_tree);
            assert_eq!(context.eval(&parsed).unwrap(), Some(expected_value));
            assert_eq!(context.eval(&expected_tree).unwrap(), Some(expected_value));
        }
    }

    #[test]
    fn oversized_integer_literal_keeps_its_parse_error() {
        let mut context = Context::with_io(io::empty(), io::sink());

        let error = context.eval(&int("99999999999999999999")).unwrap_err();

        let RuntimeError::InvalidLiteral { text, source, .. } = &error else {
            panic!("expected InvalidLiteral, got {error:?}");
        };
        assert_eq!(text, "99999999999999999999");
        assert!(std::error::Error::source(&error).is_some());
        assert!(matches!(source, LiteralError::Integer(_)));
    }

    #[test]
    fn identifiers_evaluate_to_slots_until_resolved() {
        let mut context = Context::with_io(io::empty(), io::sink());
        let name = context.symbols.intern_name("x");
        let identifier = Expr::Identifier { name,
                                            position: position() };

        assert_eq!(context.eval(&identifier).unwrap(), Some(Value::Identifier(name)));
        assert!(matches!(context.eval_operand(&identifier),
                         Err(RuntimeError::NoIdentifierAvailable { ref name, .. }) if name == "x"));

        context.variables.insert("x".to_owned(), Value::Integer(3));
        assert_eq!(context.eval_operand(&identifier).unwrap(), Value::Integer(3));
    }

    #[test]
    fn assignment_needs_an_identifier_target() {
        let mut context = Context::with_io(io::empty(), io::sink());

        let error = context.eval_assignment(&int("1"), &int("2"), position()).unwrap_err();

        assert!(matches!(error, RuntimeError::ExpectedIdentifier { operator: ":=", .. }));
    }

    #[test]
    fn statements_cannot_be_used_as_values() {
        let mut context = Context::with_io(io::empty(), io::sink());
        let name = context.symbols.intern_name("x");
        let target = Expr::Identifier { name,
                                        position: position() };
        let assignment = Expr::Assignment { target:   Box::new(target),
                                            value:    Box::new(int("1")),
                                            position: position(), };
        let sum = Expr::BinaryOp { left:     Box::new(assignment),
                                   op:       BinaryOperator::Add,
                                   right:    Box::new(int("1")),
                                   position: position(), };

        assert!(matches!(context.eval(&sum), Err(RuntimeError::MissingValue { .. })));
        assert_eq!(context.variable("x"), Some(Value::Integer(1)));
    }
}
