//! Motive Playback - Isochronic Tone Player
//!
//! Platform-agnostic player state for the dashboard's tone player.
//!
//! This crate provides:
//! - Track selection over the three built-in tones
//! - Play/pause toggling and end-of-track handling
//! - Volume (0.0-1.0) and mute, pushed to the media element after every change
//! - Player events for UI synchronization
//!
//! # Architecture
//!
//! `motive-playback` never decodes or outputs audio itself. The actual media
//! backend (rodio on desktop, [`HeadlessMedia`] in tests or without an audio
//! device) is provided through the [`MediaElement`] trait.
//!
//! # Example: Basic Playback
//!
//! ```rust
//! use motive_playback::{HeadlessMedia, PlaybackState, TonePlayer};
//!
//! let mut player = TonePlayer::default();
//! let media = HeadlessMedia::new();
//! let monitor = media.monitor();
//! player.attach_media(Box::new(media));
//!
//! player.set_volume(0.5);
//! player.select_track("isochronic-tone-2.mp3").unwrap();
//! player.toggle_play_pause().unwrap();
//!
//! assert_eq!(player.state(), PlaybackState::Playing);
//! assert_eq!(monitor.snapshot().source.as_deref(), Some("isochronic-tone-2.mp3"));
//! assert_eq!(monitor.snapshot().volume, 0.5);
//! ```

mod error;
mod events;
mod media;
mod player;
pub mod types;
mod volume;

// Public exports
pub use error::{PlaybackError, Result};
pub use events::PlayerEvent;
pub use media::{HeadlessMedia, MediaElement, MediaMonitor, MediaSnapshot};
pub use player::TonePlayer;
pub use types::{PlaybackState, PlayerConfig};
pub use volume::Volume;
