use std::collections::HashMap;

/// Stable handle of an entry in the string table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StringId(usize);

/// Stable handle of an entry in the variable-name table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NameId(usize);

impl StringId {
    /// Position of the entry in the string table.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl NameId {
    /// Position of the entry in the variable-name table.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Append-only intern table.
///
/// Each distinct text is stored once, on first sight, and keeps its index
/// for the lifetime of the table.
#[derive(Debug, Default, Clone)]
pub struct Interner {
    entries: Vec<String>,
    lookup:  HashMap<String, usize>,
}

impl Interner {
    /// Returns the index of `text`, appending it if it is new.
    pub fn intern(&mut self, text: &str) -> usize {
        if let Some(&index) = self.lookup.get(text) {
            return index;
        }

        let index = self.entries.len();
        self.entries.push(text.to_owned());
        self.lookup.insert(text.to_owned(), index);
        index
    }

    /// Returns the text stored at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing was interned yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The string table and the variable-name table of one interpreter.
///
/// String literals, concatenation results and `input` lines go to the
/// string table; every identifier goes to the name table. Handles are only
/// created here, so resolving a handle from the same table never fails.
#[derive(Debug, Default, Clone)]
pub struct SymbolTable {
    strings: Interner,
    names:   Interner,
}

impl SymbolTable {
    /// Creates empty tables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Interns a string value.
    ///
    /// # Example
    /// ```
    /// use linescript::interpreter::symbols::SymbolTable;
    ///
    /// let mut symbols = SymbolTable::new();
    /// let first = symbols.intern_string("ab");
    /// let again = symbols.intern_string("ab");
    ///
    /// assert_eq!(first, again);
    /// assert_eq!(symbols.string(first), "ab");
    /// ```
    pub fn intern_string(&mut self, text: &str) -> StringId {
        StringId(self.strings.intern(text))
    }

    /// Interns a variable name.
    pub fn intern_name(&mut self, name: &str) -> NameId {
        NameId(self.names.intern(name))
    }

    /// Returns the content of a string handle.
    #[must_use]
    pub fn string(&self, id: StringId) -> &str {
        self.strings.get(id.0).unwrap_or_default()
    }

    /// Returns the variable name behind a name handle.
    #[must_use]
    pub fn name(&self, id: NameId) -> &str {
        self.names.get(id.0).unwrap_or_default()
    }

    /// Looks up the handle of an already interned name.
    #[must_use]
    pub fn find_name(&self, name: &str) -> Option<NameId> {
        self.names.lookup.get(name).copied().map(NameId)
    }

    /// The string table.
    #[must_use]
    pub const fn strings(&self) -> &Interner {
        &self.strings
    }

    /// The variable-name table.
    #[must_use]
    pub const fn names(&self) -> &Interner {
        &self.names
    }
}
