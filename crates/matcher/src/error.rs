//! Error types for the matcher crate.
//!
//! Matching itself never fails: malformed patterns fall back to literal
//! matching and oversized inputs get sentinel values. These errors cover
//! parsing of configuration values only.

use thiserror::Error;

/// Result type alias for matcher operations.
pub type Result<T> = std::result::Result<T, MatchError>;

/// Errors that can occur while interpreting matcher settings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatchError {
    /// Unknown matching method name
    #[error("Invalid matching method: {0} (expected normal, glob, regex or fuzzy)")]
    InvalidMethod(String),

    /// Unknown sorting method name
    #[error("Invalid sorting method: {0} (expected levenshtein or fzf)")]
    InvalidSortingMethod(String),

    /// Character specification that is neither a single character nor a known escape
    #[error("Failed to parse character string: {0:?}")]
    InvalidCharSpec(String),
}

/// Error code for integration with the CLI exit status.
/// Range: 11xxx for matcher errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchErrorCode {
    /// Unknown matching method
    InvalidMethod = 11001,
    /// Unknown sorting method
    InvalidSortingMethod = 11002,
    /// Unparseable character specification
    InvalidCharSpec = 11003,
}

impl MatchError {
    /// Returns the error code for this error.
    pub fn code(&self) -> MatchErrorCode {
        match self {
            MatchError::InvalidMethod(_) => MatchErrorCode::InvalidMethod,
            MatchError::InvalidSortingMethod(_) => MatchErrorCode::InvalidSortingMethod,
            MatchError::InvalidCharSpec(_) => MatchErrorCode::InvalidCharSpec,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(MatchError::InvalidMethod("x".into()).code() as u32, 11001);
        assert_eq!(
            MatchError::InvalidCharSpec("ab".into()).code(),
            MatchErrorCode::InvalidCharSpec
        );
    }

    #[test]
    fn test_error_display() {
        let err = MatchError::InvalidSortingMethod("best".into());
        assert!(err.to_string().contains("best"));
    }
}
