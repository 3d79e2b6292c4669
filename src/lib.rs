//! # linescript
//!
//! linescript is a small line-oriented scripting language written in Rust.
//! Source text is tokenized, split into statements, converted to postfix
//! order and built into statement trees, which a tree-walking evaluator runs
//! against a mutable variable environment.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    config::Config,
    error::{ParseError, RuntimeError},
    interpreter::runner::Interpreter,
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and the operator enums that
/// represent statements and expressions as a tree. The tree is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines one node type for every language construct.
/// - Attaches source positions to nodes for error reporting.
pub mod ast;
/// Interpreter settings.
///
/// Holds the nesting limit and the quiet flag, with their defaults.
pub mod config;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating code. Every error carries the source position of the token
/// that triggered it.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Renders each error as one line with a kind label and coordinates.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, normalization, linearization, parsing,
/// evaluation and value representations to provide a complete runtime.
///
/// # Responsibilities
/// - Coordinates all pipeline stages.
/// - Provides entry points for parsing and running programs.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General numeric conversion helpers.
pub mod util;

/// Runs a program against stdin and stdout.
///
/// Every top-level statement runs in order. A statement that fails is
/// reported on stderr (unless `config.quiet` is set) and does not stop the
/// statements after it.
///
/// # Returns
/// The errors of the statements that failed.
///
/// # Errors
/// Returns a `ParseError` if the program does not tokenize or parse; nothing
/// runs in that case.
///
/// # Examples
/// ```
/// use linescript::{config::Config, run_source};
///
/// let config = Config { quiet: true,
///                       ..Config::default() };
///
/// // Runs cleanly.
/// let errors = run_source("x := 2 + 2", &config).unwrap();
/// assert!(errors.is_empty());
///
/// // `y` is not defined: the statement fails, the program still runs.
/// let errors = run_source("z := y + 1", &config).unwrap();
/// assert_eq!(errors.len(), 1);
///
/// // Parse errors stop everything.
/// assert!(run_source("x := (1", &config).is_err());
/// ```
pub fn run_source(source: &str, config: &Config) -> Result<Vec<RuntimeError>, ParseError> {
    Interpreter::new(*config).run(source)
}
