//! # Database Errors
//!
//! Error types for the db module. Connection and query failures are kept
//! distinct so the HTTP layer can report them separately; neither is retried.

use thiserror::Error;

/// Result type for database operations
pub type DbResult<T> = Result<T, DbError>;

/// Database access errors
#[derive(Debug, Error)]
pub enum DbError {
    /// Network or auth handshake with the database failed
    #[error("database connection failed: {0}")]
    Connection(#[source] sqlx::Error),

    /// A statement was accepted but failed to execute (e.g. constraint violation)
    #[error("query execution failed: {0}")]
    Query(#[source] sqlx::Error),

    /// A required configuration value was not provided
    #[error("missing required environment variable: {0}")]
    MissingEnv(&'static str),

    /// A configuration value could not be parsed
    #[error("invalid value for {0}: {1}")]
    InvalidEnv(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_env_display() {
        let err = DbError::MissingEnv("SQL_USER");
        assert_eq!(
            err.to_string(),
            "missing required environment variable: SQL_USER"
        );
    }

    #[test]
    fn test_invalid_env_display() {
        let err = DbError::InvalidEnv("SQL_PORT", "not-a-port".to_string());
        assert!(err.to_string().contains("SQL_PORT"));
        assert!(err.to_string().contains("not-a-port"));
    }
}
