/// Runtime value representation.
///
/// Defines the `Value` enum evaluated by every node, its type tags, numeric
/// promotion and the textual form used by `print`.
pub mod core;
