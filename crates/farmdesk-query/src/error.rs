//! Error types for the query crate.

use thiserror::Error;

/// Errors that can occur when running a list query.
#[derive(Debug, Error)]
pub enum QueryError {
    /// A pagination parameter was zero.
    ///
    /// Pages are 1-based and must hold at least one record; a zero here is a
    /// programming error in the caller, not an empty result.
    #[error("invalid query: {param} must be a positive integer, got {value}")]
    InvalidQuery { param: &'static str, value: usize },

    /// A filter value could not be compiled for a pattern comparator.
    #[error("invalid filter pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

impl QueryError {
    pub(crate) fn invalid(param: &'static str, value: usize) -> Self {
        Self::InvalidQuery { param, value }
    }

    /// Returns `true` if this is an [`QueryError::InvalidQuery`] error.
    pub fn is_invalid_query(&self) -> bool {
        matches!(self, Self::InvalidQuery { .. })
    }
}

/// Result type for query operations.
pub type Result<T> = std::result::Result<T, QueryError>;
