//! Query error types
//!
//! Error codes:
//! - FILMS_NOT_FOUND
//! - FILMS_INVALID_PARAMETER
//! - FILMS_MISSING_PARAMETER
//! - FILMS_STORE_UNAVAILABLE
//! - FILMS_ENCODING_FAILED

use thiserror::Error;

use crate::catalog::StoreError;

/// Result type for query operations
pub type QueryResult<T> = Result<T, QueryError>;

/// Errors raised by query engine operations and their parameter parsing
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QueryError {
    /// No record has the requested id
    #[error("Could not find film {0}")]
    NotFound(i64),

    /// A numeric or date parameter failed to parse
    #[error("Invalid value '{value}' for parameter '{name}'")]
    InvalidParameter { name: String, value: String },

    /// A required parameter was not supplied
    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    /// The record store failed
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A result could not be rendered as JSON
    #[error("Failed to encode result: {0}")]
    Encoding(String),
}

impl QueryError {
    /// Create an invalid parameter error
    pub fn invalid_parameter(name: impl Into<String>, value: impl Into<String>) -> Self {
        QueryError::InvalidParameter {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            QueryError::NotFound(_) => "FILMS_NOT_FOUND",
            QueryError::InvalidParameter { .. } => "FILMS_INVALID_PARAMETER",
            QueryError::MissingParameter(_) => "FILMS_MISSING_PARAMETER",
            QueryError::Store(_) => "FILMS_STORE_UNAVAILABLE",
            QueryError::Encoding(_) => "FILMS_ENCODING_FAILED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(QueryError::NotFound(3).code(), "FILMS_NOT_FOUND");
        assert_eq!(
            QueryError::invalid_parameter("lt", "abc").code(),
            "FILMS_INVALID_PARAMETER"
        );
        assert_eq!(
            QueryError::MissingParameter("gt".to_string()).code(),
            "FILMS_MISSING_PARAMETER"
        );
        assert_eq!(
            QueryError::from(StoreError::Unavailable("down".to_string())).code(),
            "FILMS_STORE_UNAVAILABLE"
        );
        assert_eq!(
            QueryError::Encoding("key must be a string".to_string()).code(),
            "FILMS_ENCODING_FAILED"
        );
    }

    #[test]
    fn test_error_display() {
        let err = QueryError::invalid_parameter("suffix", "xx");
        let display = format!("{}", err);
        assert!(display.contains("suffix"));
        assert!(display.contains("xx"));
    }
}
