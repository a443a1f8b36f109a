//! Error types for record store operations.
//!
//! Provides a unified error type covering database access, identifier
//! validation, and store initialization failures.

use thiserror::Error;

/// Errors that can occur during record store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// SQLite statement or connection failure.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Filesystem failure while initializing the backing file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Table or column name contains invalid characters.
    #[error("invalid identifier '{0}': must contain only alphanumeric characters and underscores")]
    InvalidIdentifier(String),

    /// Target table is not present in the database.
    #[error("table '{0}' does not exist")]
    TableNotFound(String),

    /// Insert or update was given no column values.
    #[error("empty record: at least one column value is required")]
    EmptyRecord,
}

/// Convenience alias for results with [`StoreError`].
pub type Result<T> = std::result::Result<T, StoreError>;
