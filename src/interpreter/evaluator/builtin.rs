/// `print`: writes the textual form of a value as one line.
pub mod print;

/// `input`: writes a prompt and reads one line from the input reader.
pub mod input;

/// `del`: removes a variable binding.
pub mod delete;
