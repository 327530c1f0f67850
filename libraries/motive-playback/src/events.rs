//! Player Events
//!
//! Queued by `TonePlayer` as state changes and drained by the UI.

use crate::types::PlaybackState;
use serde::{Deserialize, Serialize};

/// Events emitted by the tone player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlayerEvent {
    /// A different track was selected
    TrackSelected {
        /// File of the newly selected track
        file: String,
    },

    /// Play/pause state changed
    StateChanged {
        /// The new playback state
        state: PlaybackState,
    },

    /// Volume or mute changed
    VolumeChanged {
        /// New volume level (0.0-1.0)
        level: f32,
        /// Whether audio is muted
        is_muted: bool,
    },

    /// Track reached its natural end
    Ended {
        /// File of the finished track
        file: String,
    },
}
