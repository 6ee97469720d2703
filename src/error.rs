//! Domain error types for the migration runner.
//!
//! Uses thiserror for ergonomic error handling with automatic Display implementations.

use crate::config::ConfigError;

/// Application-level errors.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration could not be loaded or validated
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Database connection or statement failed
    #[error("Database error: {0}")]
    Database(String),

    /// A migration step failed or was refused
    #[error("Migration error: {0}")]
    Migration(String),
}

impl From<sea_orm::DbErr> for AppError {
    fn from(err: sea_orm::DbErr) -> Self {
        AppError::Database(err.to_string())
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;
