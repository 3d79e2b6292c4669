/// Default bound on expression and block nesting.
pub const MAX_DEPTH: usize = 256;

/// Interpreter settings.
///
/// Built by the command line driver from its flags, or by library users
/// directly.
///
/// # Example
/// ```
/// use linescript::config::{Config, MAX_DEPTH};
///
/// let config = Config { quiet: true,
///                       ..Config::default() };
///
/// assert_eq!(config.max_depth, MAX_DEPTH);
/// assert!(config.quiet);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Deepest expression or block nesting the parser accepts.
    pub max_depth: usize,
    /// Suppresses the per-statement error report on stderr.
    pub quiet:     bool,
}

impl Default for Config {
    fn default() -> Self {
        Self { max_depth: MAX_DEPTH,
               quiet:     false, }
    }
}
