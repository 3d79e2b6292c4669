use std::fmt;

use crate::{
    interpreter::symbols::{NameId, StringId, SymbolTable},
    util::num::i64_to_f64,
};

/// Represents a runtime value in the interpreter.
///
/// Values are small and `Copy`: strings and variable names are carried as
/// handles into the [`SymbolTable`] rather than owned text.
///
/// An `Identifier` value is a pending lookup, produced only by identifier
/// nodes. Every consumer that combines, compares or prints values resolves
/// it against the environment first; assignment and `del` use it as a slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A 64 bit signed integer.
    Integer(i64),
    /// A double precision floating-point number.
    Decimal(f64),
    /// A string, by handle into the string table.
    Str(StringId),
    /// `true` or `false`.
    Bool(bool),
    /// An unresolved variable slot, by handle into the name table.
    Identifier(NameId),
}

/// The type tag of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// [`Value::Integer`]
    Integer,
    /// [`Value::Decimal`]
    Decimal,
    /// [`Value::Str`]
    String,
    /// [`Value::Bool`]
    Bool,
    /// [`Value::Identifier`]
    Identifier,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Integer => "Integer",
            Self::Decimal => "Decimal",
            Self::String => "String",
            Self::Bool => "Bool",
            Self::Identifier => "Identifier",
        };
        write!(f, "{name}")
    }
}

/// Two numeric operands after promotion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericPair {
    /// Both operands were integers.
    Integers(i64, i64),
    /// At least one operand was a decimal; both are decimals now.
    Decimals(f64, f64),
}

impl Value {
    /// Returns the type tag.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Integer(_) => ValueKind::Integer,
            Self::Decimal(_) => ValueKind::Decimal,
            Self::Str(_) => ValueKind::String,
            Self::Bool(_) => ValueKind::Bool,
            Self::Identifier(_) => ValueKind::Identifier,
        }
    }

    /// Converts a numeric value to `f64`.
    ///
    /// Integers beyond 2^53 lose precision, as a promotion in mixed
    /// arithmetic does. Returns `None` for non-numeric values.
    #[must_use]
    pub fn as_decimal(&self) -> Option<f64> {
        match self {
            Self::Integer(n) => Some(i64_to_f64(*n)),
            Self::Decimal(d) => Some(*d),
            _ => None,
        }
    }

    /// Pairs two numeric values, promoting both to decimals if either one is.
    ///
    /// Returns `None` if either operand is not numeric.
    ///
    /// # Example
    /// ```
    /// use linescript::interpreter::value::core::{NumericPair, Value};
    ///
    /// let pair = Value::Integer(1).numeric_pair(&Value::Decimal(2.5));
    /// assert_eq!(pair, Some(NumericPair::Decimals(1.0, 2.5)));
    ///
    /// let pair = Value::Integer(5).numeric_pair(&Value::Integer(2));
    /// assert_eq!(pair, Some(NumericPair::Integers(5, 2)));
    /// ```
    #[must_use]
    pub fn numeric_pair(&self, other: &Self) -> Option<NumericPair> {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => Some(NumericPair::Integers(*a, *b)),
            _ => Some(NumericPair::Decimals(self.as_decimal()?, other.as_decimal()?)),
        }
    }

    /// Returns a formatter that prints the value with its handles resolved.
    ///
    /// Booleans print as `True`/`False`, strings by content and identifiers
    /// by name.
    ///
    /// # Example
    /// ```
    /// use linescript::interpreter::{symbols::SymbolTable, value::core::Value};
    ///
    /// let mut symbols = SymbolTable::new();
    /// let greeting = Value::Str(symbols.intern_string("hi"));
    ///
    /// assert_eq!(greeting.display(&symbols).to_string(), "hi");
    /// assert_eq!(Value::Bool(false).display(&symbols).to_string(), "False");
    /// assert_eq!(Value::Decimal(2.5).display(&symbols).to_string(), "2.5");
    /// ```
    #[must_use]
    pub const fn display<'a>(&'a self, symbols: &'a SymbolTable) -> DisplayValue<'a> {
        DisplayValue { value: self,
                       symbols }
    }
}

/// Textual form of a [`Value`], created by [`Value::display`].
pub struct DisplayValue<'a> {
    value:   &'a Value,
    symbols: &'a SymbolTable,
}

impl fmt::Display for DisplayValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Value::Integer(n) => write!(f, "{n}"),
            Value::Decimal(d) => write!(f, "{d}"),
            Value::Str(id) => write!(f, "{}", self.symbols.string(*id)),
            Value::Bool(true) => write!(f, "True"),
            Value::Bool(false) => write!(f, "False"),
            Value::Identifier(name) => write!(f, "{}", self.symbols.name(*name)),
        }
    }
}
