//! Error types for Cliplane.

use thiserror::Error;

/// Main error type for Cliplane operations.
#[derive(Error, Debug)]
pub enum ClipError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A required collaborator or setting is missing or malformed.
    /// Raised while wiring a widget up, never mid-gesture.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A clip was destroyed against a track that does not own it.
    #[error("Lifecycle violation: {0}")]
    Lifecycle(String),

    #[error("A drag session is already active ({0})")]
    SessionActive(String),

    #[error("Clip has already been disposed")]
    Disposed,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for Cliplane operations.
pub type Result<T> = std::result::Result<T, ClipError>;
