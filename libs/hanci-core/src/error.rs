//! Error types for hanci-core.

use thiserror::Error;

/// Result type alias for key-value persistence operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors surfaced by key-value persistence backends.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Backend-specific failure, reported as text so the core stays
    /// independent of any particular storage crate.
    #[error("storage backend error: {0}")]
    Backend(String),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors from platform collaborators (audio, speech, reminders).
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("audio resource missing for record {0}")]
    MissingAudio(usize),

    #[error("speech input unavailable: {0}")]
    SpeechUnavailable(String),

    #[error("{0}")]
    Unavailable(String),
}
