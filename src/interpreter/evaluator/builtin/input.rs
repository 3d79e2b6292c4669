use crate::{
    ast::Expr,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Writes the resolved prompt as one line, then reads one line of input.
    ///
    /// The line, without its trailing `\n` or `\r\n`, is interned as a new
    /// string. End of input reads as the empty string.
    ///
    /// # Returns
    /// The line read, as a `Value::Str`.
    pub fn eval_input(&mut self, prompt: &Expr) -> EvalResult<Value> {
        let prompt = self.eval_operand(prompt)?;
        self.write_line(prompt)?;
        self.flush()?;

        let line = self.read_line()?.unwrap_or_default();
        let line = line.strip_suffix('\n').unwrap_or(&line);
        let line = line.strip_suffix('\r').unwrap_or(line);

        Ok(Value::Str(self.symbols.intern_string(line)))
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, Cursor};

    use super::*;
    use crate::interpreter::lexer::Position;

    fn prompt(context: &mut Context) -> Expr {
        Expr::Str { id:       context.symbols.intern_string("name?"),
                    position: Position::default(), }
    }

    #[test]
    fn line_endings_are_stripped() {
        let mut context = Context::with_io(Cursor::new("Ada\r\nrest\n"), io::sink());
        let prompt = prompt(&mut context);

        let Value::Str(id) = context.eval_input(&prompt).unwrap() else {
            panic!("input must produce a string");
        };
        assert_eq!(context.symbols.string(id), "Ada");
    }

    #[test]
    fn end_of_input_reads_as_empty() {
        let mut context = Context::with_io(io::empty(), io::sink());
        let prompt = prompt(&mut context);

        let Value::Str(id) = context.eval_input(&prompt).unwrap() else {
            panic!("input must produce a string");
        };
        assert_eq!(context.symbols.string(id), "");
    }
}
