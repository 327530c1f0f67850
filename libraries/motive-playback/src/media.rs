//! Media element abstraction
//!
//! The player drives an audio backend through [`MediaElement`], the same
//! surface an HTML audio element exposes: a source, play/pause, seeking,
//! volume and mute.

use crate::error::{PlaybackError, Result};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

/// Platform-agnostic media element
///
/// Implementors own the actual audio output. Not `Send`: desktop output
/// streams are bound to the thread that opened them, and the dashboard
/// drives the player from a single thread.
pub trait MediaElement {
    /// Load a new source by track file name
    ///
    /// The element resolves the file against its own asset root. Loading
    /// leaves the element paused at position zero.
    fn set_source(&mut self, file: &str) -> Result<()>;

    /// Start or resume playback
    ///
    /// # Returns
    /// * `Ok(())` - Playback started
    /// * `Err(_)` - The element refused to play (no device, undecodable source)
    fn play(&mut self) -> Result<()>;

    /// Pause playback, keeping the position
    fn pause(&mut self);

    /// Seek to position in the current source
    fn seek(&mut self, position: Duration) -> Result<()>;

    /// Get current playback position
    fn position(&self) -> Duration;

    /// Set output volume (0.0-1.0)
    fn set_volume(&mut self, level: f32);

    /// Set mute state
    fn set_muted(&mut self, muted: bool);

    /// Check if the current source has played to its end
    fn has_ended(&self) -> bool {
        false
    }

    /// Reset to beginning of source
    ///
    /// Equivalent to `seek(Duration::ZERO)`
    fn reset(&mut self) -> Result<()> {
        self.seek(Duration::ZERO)
    }
}

/// Observable state of a [`HeadlessMedia`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MediaSnapshot {
    /// Currently loaded track file
    pub source: Option<String>,
    /// Whether the element is playing
    pub playing: bool,
    /// Current position
    pub position: Duration,
    /// Last volume pushed by the player
    pub volume: f32,
    /// Last mute state pushed by the player
    pub muted: bool,
    /// Whether the source has ended
    pub ended: bool,
    /// Number of successful `play` calls
    pub play_count: usize,
}

/// Media element without audio output
///
/// Records every command it receives. Used when no audio device is
/// available (`--no-audio`) and by tests, which inspect it through a
/// [`MediaMonitor`] after handing the element to the player.
#[derive(Debug)]
pub struct HeadlessMedia {
    state: Arc<Mutex<MediaSnapshot>>,
    reject_play: bool,
}

impl HeadlessMedia {
    /// Create a headless element that accepts every command
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(MediaSnapshot {
                volume: 1.0,
                ..MediaSnapshot::default()
            })),
            reject_play: false,
        }
    }

    /// Create a headless element whose `play` always fails
    pub fn rejecting_play() -> Self {
        Self {
            reject_play: true,
            ..Self::new()
        }
    }

    /// Handle for inspecting and driving this element from outside
    pub fn monitor(&self) -> MediaMonitor {
        MediaMonitor {
            state: Arc::clone(&self.state),
        }
    }

    fn with_state<R>(&self, f: impl FnOnce(&mut MediaSnapshot) -> R) -> R {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut state)
    }
}

impl Default for HeadlessMedia {
    fn default() -> Self {
        Self::new()
    }
}

impl MediaElement for HeadlessMedia {
    fn set_source(&mut self, file: &str) -> Result<()> {
        tracing::debug!(file, "headless media: source");
        self.with_state(|s| {
            s.source = Some(file.to_string());
            s.playing = false;
            s.position = Duration::ZERO;
            s.ended = false;
        });
        Ok(())
    }

    fn play(&mut self) -> Result<()> {
        if self.reject_play {
            return Err(PlaybackError::Media("play request was rejected".into()));
        }
        self.with_state(|s| {
            if s.source.is_none() {
                return Err(PlaybackError::Media("no source loaded".into()));
            }
            if s.ended {
                s.ended = false;
                s.position = Duration::ZERO;
            }
            s.playing = true;
            s.play_count += 1;
            Ok(())
        })
    }

    fn pause(&mut self) {
        self.with_state(|s| s.playing = false);
    }

    fn seek(&mut self, position: Duration) -> Result<()> {
        self.with_state(|s| {
            s.position = position;
            s.ended = false;
        });
        Ok(())
    }

    fn position(&self) -> Duration {
        self.with_state(|s| s.position)
    }

    fn set_volume(&mut self, level: f32) {
        self.with_state(|s| s.volume = level);
    }

    fn set_muted(&mut self, muted: bool) {
        self.with_state(|s| s.muted = muted);
    }

    fn has_ended(&self) -> bool {
        self.with_state(|s| s.ended)
    }
}

/// Shared view onto a [`HeadlessMedia`]
#[derive(Debug, Clone)]
pub struct MediaMonitor {
    state: Arc<Mutex<MediaSnapshot>>,
}

impl MediaMonitor {
    /// Copy of the element's current state
    pub fn snapshot(&self) -> MediaSnapshot {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Advance the playback position as if audio had been played
    pub fn advance(&self, elapsed: Duration) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.position += elapsed;
    }

    /// Mark the current source as played to its end
    pub fn finish(&self) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.playing = false;
        state.ended = true;
    }
}
