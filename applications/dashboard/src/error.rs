/// Dashboard error types
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DashboardError>;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Audio output error: {0}")]
    Audio(String),

    #[error("Storage error: {0}")]
    Storage(#[from] motive_storage::StorageError),

    #[error("Asset error: {0}")]
    Asset(#[from] motive_assets::AssetError),

    #[error("Playback error: {0}")]
    Playback(#[from] motive_playback::PlaybackError),

    #[error(transparent)]
    Motive(#[from] motive_core::MotiveError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
