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
    /// Evaluates an `if` statement.
    ///
    /// The body runs in order when the condition is `true`; the first error
    /// aborts the rest of the body.
    ///
    /// # Errors
    /// `ExpectedBoolWithControl` if the condition is not a boolean.
    pub fn eval_if(&mut self,
                   condition: &Expr,
                   body: &[Expr],
                   position: Position)
                   -> EvalResult<Option<Value>> {
        if self.eval_condition(condition, "if", position)? {
            self.eval_block(body)?;
        }
        Ok(None)
    }

    /// Evaluates a `while` statement.
    ///
    /// The condition is evaluated, and checked to be a boolean, before every
    /// iteration. The loop ends when it is `false` or when the condition or
    /// the body fails.
    pub fn eval_while(&mut self,
                      condition: &Expr,
                      body: &[Expr],
                      position: Position)
                      -> EvalResult<Option<Value>> {
        while self.eval_condition(condition, "while", position)? {
            self.eval_block(body)?;
        }
        Ok(None)
    }

    /// Evaluates the statements of a block in order.
    pub fn eval_block(&mut self, body: &[Expr]) -> EvalResult<()> {
        for statement in body {
            self.eval(statement)?;
        }
        Ok(())
    }

    fn eval_condition(&mut self,
                      condition: &Expr,
                      keyword: &'static str,
                      position: Position)
                      -> EvalResult<bool> {
        match self.eval_operand(condition)? {
            Value::Bool(value) => Ok(value),
            _ => Err(RuntimeError::ExpectedBoolWithControl { keyword, position }),
        }
    }
}
