//! Error types for the tone player

use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// Requested file is not one of the built-in tracks
    #[error("Unknown track: {0}")]
    UnknownTrack(String),

    /// Media backend rejected an operation
    #[error("Media error: {0}")]
    Media(String),

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
