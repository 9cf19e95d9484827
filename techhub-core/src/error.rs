//! Error types for the techhub ecosystem.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur in techhub operations.
#[derive(Error, Debug)]
pub enum HubError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    #[error("Could not write {}: {source}", .path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("An event named '{0}' is already posted")]
    DuplicateEvent(String),

    #[error("User '{0}' already exists")]
    UserExists(String),

    #[error("'{event}' is already in {user}'s calendar")]
    AlreadyInCalendar { user: String, event: String },
}

/// Result type alias for techhub operations.
pub type HubResult<T> = Result<T, HubError>;
