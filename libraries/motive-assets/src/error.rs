//! Error types for the asset client.

use thiserror::Error;

/// Errors that can occur when loading static resources.
#[derive(Error, Debug)]
pub enum AssetError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Unexpected status {status} for {url}")]
    Status { status: u16, url: String },

    /// Invalid asset root
    #[error("Invalid asset root: {0}")]
    InvalidRoot(String),

    /// Resource name escapes the asset root
    #[error("Invalid resource name: {0}")]
    InvalidName(String),

    /// IO error reading from a directory root
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for asset operations.
pub type Result<T> = std::result::Result<T, AssetError>;
