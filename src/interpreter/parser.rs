/// Parser state and statement-range splitting.
///
/// Defines [`core::Parser`], which walks index ranges of one normalized token
/// buffer, sends straight-line statements through the linearizer and the
/// tree builder, and hands control keywords to the block parser.
pub mod core;

/// Postfix tree building.
///
/// Turns a postfix token run into statement trees with an explicit operand
/// stack. Literals and identifiers are interned here.
pub mod postfix;

/// Control-flow blocks.
///
/// Splits `if`/`while` statements into their condition span and body range
/// and parses both recursively.
pub mod block;
