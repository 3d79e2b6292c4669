use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        lexer::Position,
        value::core::Value,
    },
};

impl Context {
    /// Removes the binding of the identifier slot `target`.
    ///
    /// The name stays in the name table, so a later assignment reuses its
    /// handle. Deleting a name that has no binding does nothing.
    ///
    /// # Errors
    /// `ExpectedIdentifier` if `target` is not an identifier.
    pub fn eval_delete(&mut self, target: &Expr, position: Position) -> EvalResult<Option<Value>> {
        let Value::Identifier(id) = self.eval_value(target)? else {
            return Err(RuntimeError::ExpectedIdentifier { operator: "del",
                                                          position });
        };

        self.variables.remove(self.symbols.name(id));
        Ok(None)
    }
}
