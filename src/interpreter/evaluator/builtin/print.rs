use crate::{
    ast::Expr,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Prints the resolved value of `expr` to the context writer.
    ///
    /// Integers and decimals print in their native form, booleans as
    /// `True`/`False` and strings by content.
    ///
    /// # Returns
    /// `None`; `print` is evaluated for effect.
    ///
    /// # Example
    /// ```
    /// use std::io;
    ///
    /// use linescript::{
    ///     ast::Expr,
    ///     interpreter::{evaluator::core::Context, lexer::Position},
    /// };
    ///
    /// // The value goes to the context writer; the doctest only checks the
    /// // returned result.
    /// let mut context = Context::with_io(io::empty(), io::sink());
    /// let value = Expr::Bool { value:    true,
    ///                          position: Position::default(), };
    ///
    /// assert_eq!(context.eval_print(&value).unwrap(), None);
    /// ```
    pub fn eval_print(&mut self, expr: &Expr) -> EvalResult<Option<Value>> {
        let value = self.eval_operand(expr)?;
        self.write_line(value)?;
        Ok(None)
    }
}
