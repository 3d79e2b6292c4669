use std::io::{BufRead, Write};

use crate::{
    ast::Expr,
    config::Config,
    error::{ParseError, RuntimeError},
    interpreter::{
        evaluator::core::Context,
        lexer::tokenize,
        normalizer::normalize,
        parser::core::{ParseResult, Parser},
    },
};

/// Runs whole programs through the pipeline.
///
/// An interpreter owns one [`Context`], so tables and variables persist
/// across calls to [`Interpreter::run`].
pub struct Interpreter {
    context: Context,
    config:  Config,
}

impl Interpreter {
    /// Creates an interpreter reading from stdin and writing to stdout.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { context: Context::new(),
               config }
    }

    /// Creates an interpreter with its own reader and writer.
    pub fn with_io(config: Config,
                   input: impl BufRead + 'static,
                   output: impl Write + 'static)
                   -> Self {
        Self { context: Context::with_io(input, output),
               config }
    }

    /// Tokenizes, normalizes and parses `source` into top-level statements.
    ///
    /// Strings and names are interned into this interpreter's tables.
    pub fn parse(&mut self, source: &str) -> ParseResult<Vec<Expr>> {
        let tokens = normalize(tokenize(source)?);
        Parser::new(&tokens, &mut self.context.symbols, self.config.max_depth).parse_program()
    }

    /// Parses and runs `source`.
    ///
    /// The program is parsed completely before anything runs, so a lexical
    /// or syntax error anywhere means no statement is evaluated. Each
    /// top-level statement then runs in order; a statement that fails is
    /// reported on stderr (unless [`Config::quiet`] is set) and the next one
    /// runs. Effects the failing statement already had are kept.
    ///
    /// # Returns
    /// The runtime errors of the failed statements, in order.
    ///
    /// # Errors
    /// Returns the first lexical or syntax error.
    ///
    /// # Example
    /// ```
    /// use std::io;
    ///
    /// use linescript::{config::Config, interpreter::runner::Interpreter};
    ///
    /// let config = Config { quiet: true,
    ///                       ..Config::default() };
    /// let mut interpreter = Interpreter::with_io(config, io::empty(), io::sink());
    ///
    /// let errors = interpreter.run("x := 1\ny := x + missing\nz := 3").unwrap();
    ///
    /// assert_eq!(errors.len(), 1);
    /// assert!(interpreter.context().variable("z").is_some());
    /// ```
    pub fn run(&mut self, source: &str) -> Result<Vec<RuntimeError>, ParseError> {
        let program = self.parse(source)?;
        let mut errors = Vec::new();

        for statement in &program {
            if let Err(error) = self.context.eval(statement) {
                self.report(&error);
                errors.push(error);
            }
        }

        if let Err(error) = self.context.flush() {
            self.report(&error);
            errors.push(error);
        }

        Ok(errors)
    }

    fn report(&self, error: &RuntimeError) {
        if !self.config.quiet {
            eprintln!("{error}");
        }
    }

    /// The evaluation context.
    #[must_use]
    pub const fn context(&self) -> &Context {
        &self.context
    }
}
