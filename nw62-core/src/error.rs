//! Structured error types for the nw62 workspace.

use thiserror::Error;

/// Unified error type for all nw62 operations.
#[derive(Debug, Error)]
pub enum Nw62Error {
    /// Parse error (malformed numeric or textual input)
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid input (empty sequence, out-of-range values)
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, Nw62Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_category() {
        let e = Nw62Error::InvalidInput("sequence 1 is empty".into());
        assert_eq!(e.to_string(), "invalid input: sequence 1 is empty");
        let e = Nw62Error::Parse("invalid gap penalty \"x\"".into());
        assert_eq!(e.to_string(), "parse error: invalid gap penalty \"x\"");
    }
}
