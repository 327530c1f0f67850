//! Core error types for the Motive dashboard

use thiserror::Error;

/// Result type alias using `MotiveError`
pub type Result<T> = std::result::Result<T, MotiveError>;

/// Core error type for the Motive dashboard
#[derive(Error, Debug)]
pub enum MotiveError {
    /// Persisted local state could not be read or written
    #[error("Storage error: {0}")]
    Storage(String),

    /// A static resource could not be fetched
    #[error("Resource error: {resource}: {message}")]
    Resource {
        /// Resource name as requested, e.g. `goals.json`
        resource: String,
        /// Why the fetch failed
        message: String,
    },

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl MotiveError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create a resource error
    pub fn resource(resource: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Resource {
            resource: resource.into(),
            message: message.into(),
        }
    }
}
