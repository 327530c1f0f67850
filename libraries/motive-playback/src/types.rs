//! Core types for the tone player

use motive_core::Track;
use serde::{Deserialize, Serialize};

/// Playback state
///
/// The tone player has no stopped or buffering state: selecting a track or
/// reaching the end always lands in `Paused`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackState {
    /// Currently playing
    Playing,

    /// Paused (or never started)
    Paused,
}

/// Configuration for the tone player
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// File of the track selected on startup (default: first tone)
    pub initial_track: String,

    /// Initial volume (0.0-1.0, default: 1.0)
    pub volume: f32,

    /// Start muted (default: false)
    pub muted: bool,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            initial_track: Track::default_file().to_string(),
            volume: 1.0,
            muted: false,
        }
    }
}
