//! Error types for storystacks

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the storystacks application
#[derive(Debug, Error)]
pub enum StacksError {
    #[error("Not a storystacks directory: {0}")]
    NotStacksDirectory(PathBuf),

    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid rating: {0}")]
    InvalidRating(String),

    #[error("Stored value under '{0}' is unreadable")]
    CorruptValue(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl StacksError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            StacksError::NotStacksDirectory(_) => 2,
            StacksError::EmptyTitle => 3,
            StacksError::InvalidCategory(_)
            | StacksError::InvalidDate(_)
            | StacksError::InvalidRating(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            StacksError::NotStacksDirectory(path) => {
                format!(
                    "Not a storystacks directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'storystacks init' in this directory to start a log\n\
                    • Navigate to an existing storystacks directory\n\
                    • Set STORYSTACKS_ROOT environment variable to your log path",
                    path.display()
                )
            }
            StacksError::EmptyTitle => "Title cannot be empty\n\n\
                Every entry needs a title:\n\
                storystacks add --title \"Dune\" --category book"
                .to_string(),
            StacksError::InvalidCategory(value) => {
                format!(
                    "Invalid category: '{}'\n\n\
                    Valid categories: movie, tv, book",
                    value
                )
            }
            StacksError::InvalidDate(value) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Expected format: YYYY-MM-DD\n\
                    Example: storystacks add --title \"Arrival\" --date 2023-01-01",
                    value
                )
            }
            StacksError::InvalidRating(value) => {
                format!(
                    "Invalid rating: '{}'\n\n\
                    Ratings must be finite numbers, e.g. --rating 4.5",
                    value
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using StacksError
pub type Result<T> = std::result::Result<T, StacksError>;
