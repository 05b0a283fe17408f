//! Error handling for LevelUp Events
//!
//! This module defines the main error type used throughout the application.
//! Handlers translate it into HTTP responses locally, per endpoint.

use thiserror::Error;

/// Main error type for the events service
#[derive(Error, Debug)]
pub enum LevelUpError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Event matching query does not exist (id {event_id})")]
    EventNotFound { event_id: i64 },

    #[error("Game matching query does not exist (id {game_id})")]
    GameNotFound { game_id: i64 },

    #[error("Status matching query does not exist (id {status_id})")]
    StatusNotFound { status_id: i64 },

    #[error("{0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for events service operations
pub type Result<T> = std::result::Result<T, LevelUpError>;

impl LevelUpError {
    /// True for the "row does not exist" family of errors
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            LevelUpError::EventNotFound { .. }
                | LevelUpError::GameNotFound { .. }
                | LevelUpError::StatusNotFound { .. }
        ) || matches!(self, LevelUpError::Database(sqlx::Error::RowNotFound))
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            LevelUpError::Database(_) => ErrorSeverity::Critical,
            LevelUpError::Migration(_) => ErrorSeverity::Critical,
            LevelUpError::Config(_) => ErrorSeverity::Critical,
            LevelUpError::Authentication(_) => ErrorSeverity::Warning,
            LevelUpError::InvalidInput(_) => ErrorSeverity::Info,
            e if e.is_not_found() => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
