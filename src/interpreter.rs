/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads source text one line at a time and produces tokens for
/// literals, identifiers, operators, keywords and braces, each with its
/// line and cursor. Every line ends with a statement terminator.
///
/// # Responsibilities
/// - Converts each line into classified tokens with source positions.
/// - Reports `InvalidCharacter` and `UnterminatedString`.
pub mod lexer;
/// Statement boundary normalization.
///
/// Collapses runs of terminators left by blank lines and separates
/// statements written on one line.
pub mod normalizer;
/// Infix to postfix conversion.
///
/// Implements the shunting-yard algorithm with the operator precedence
/// table and the detection of unary minus.
pub mod linearizer;
/// String and variable-name intern tables.
pub mod symbols;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser splits the normalized token buffer into straight-line runs
/// and control statements, builds expression trees from postfix order and
/// recurses into the bodies of `if` and `while`.
///
/// # Responsibilities
/// - Converts tokens into statement trees.
/// - Validates structure, reporting errors with their position.
/// - Bounds expression and block nesting.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum and its type tags.
/// - Implements numeric promotion between integers and decimals.
/// - Formats values for `print`.
pub mod value;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks statement trees, resolves identifiers, performs
/// arithmetic and logic, manages the variable environment and runs `print`,
/// `input`, `del`, `if` and `while`.
pub mod evaluator;
/// Whole-program execution with per-statement error reporting.
pub mod runner;
