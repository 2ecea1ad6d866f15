//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business rule failures on a single request.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Request body must contain valid year, month, and day")]
    MissingDateKey,

    #[error("{0}")]
    InvalidDate(String),

    #[error("A blog post with this date already exists!")]
    Duplicate,
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Duplicate key: {0}")]
    Duplicate(String),
}

impl RepoError {
    /// Classify a raw store error message.
    ///
    /// Unique-index violations are only distinguishable by their message.
    pub fn from_store_message(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.contains("E11000") || message.contains("duplicate key") {
            RepoError::Duplicate(message)
        } else {
            RepoError::Query(message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classifies_duplicate_key_messages() {
        let err = RepoError::from_store_message(
            "E11000 duplicate key error collection: blog.posts index: date_key_unique",
        );
        assert!(matches!(err, RepoError::Duplicate(_)));

        let err = RepoError::from_store_message("connection reset");
        assert!(matches!(err, RepoError::Query(_)));
    }
}
