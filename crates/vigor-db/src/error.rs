//! Error types for database operations.

use thiserror::Error;

/// Errors that can occur during database operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Native DB error.
    #[error("Database error: {0}")]
    Database(String),

    /// Loaded records violated a catalog invariant.
    #[error("Catalog error: {0}")]
    Catalog(#[from] vigor_core::Error),
}

/// Result type for database operations.
pub type Result<T> = std::result::Result<T, Error>;
