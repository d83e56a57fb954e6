//! Error types for Sadhana

use thiserror::Error;

/// Main error type for Sadhana operations
#[derive(Error, Debug)]
pub enum WelcomeError {
    /// Generic storage failure (unavailable store, poisoned handle, ...)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Database creation/opening error
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    /// Transaction error
    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    /// Table error
    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    /// Storage operation error
    #[error("Storage operation error: {0}")]
    StorageOp(#[from] redb::StorageError),

    /// Commit error
    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Invalid configuration file
    #[error("Config error: {0}")]
    Config(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using WelcomeError
pub type WelcomeResult<T> = Result<T, WelcomeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WelcomeError::Storage("quota exceeded".to_string());
        assert_eq!(format!("{}", err), "Storage error: quota exceeded");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: WelcomeError = io_err.into();
        assert!(matches!(err, WelcomeError::Io(_)));
    }
}
