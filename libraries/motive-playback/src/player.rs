//! Tone player - core orchestration
//!
//! Owns the selected track, play/pause state and volume, and forwards each
//! change to the attached media element.

use crate::{
    error::{PlaybackError, Result},
    events::PlayerEvent,
    media::MediaElement,
    types::{PlaybackState, PlayerConfig},
    volume::Volume,
};
use motive_core::Track;
use std::fmt;
use std::time::Duration;

/// Isochronic tone player
///
/// The player works without a media element: every operation updates its
/// state, and play/pause become no-ops. Attaching an element later applies
/// the current source and settings.
pub struct TonePlayer {
    tracks: Vec<Track>,
    selected: usize,
    state: PlaybackState,
    volume: Volume,
    media: Option<Box<dyn MediaElement>>,

    // Event queue for UI synchronization
    pending_events: Vec<PlayerEvent>,
}

impl TonePlayer {
    /// Create a player over the built-in tones
    ///
    /// Fails with [`PlaybackError::UnknownTrack`] if `config.initial_track`
    /// is not one of them.
    pub fn new(config: PlayerConfig) -> Result<Self> {
        let tracks = Track::tone_tracks();
        let selected = tracks
            .iter()
            .position(|t| t.file == config.initial_track)
            .ok_or_else(|| PlaybackError::UnknownTrack(config.initial_track.clone()))?;

        let mut volume = Volume::new(config.volume);
        volume.set_muted(config.muted);

        Ok(Self {
            tracks,
            selected,
            state: PlaybackState::Paused,
            volume,
            media: None,
            pending_events: Vec::new(),
        })
    }

    // ===== Media =====

    /// Attach a media element
    ///
    /// Loads the selected track and pushes volume and mute. The player
    /// starts out paused regardless of its previous state.
    pub fn attach_media(&mut self, mut media: Box<dyn MediaElement>) {
        let file = self.selected_file().to_string();
        if let Err(e) = media.set_source(&file) {
            tracing::warn!(file = %file, error = %e, "Failed to load track into media element");
        }
        self.media = Some(media);
        self.apply_settings();
        self.set_state(PlaybackState::Paused);
    }

    /// Check if a media element is attached
    pub fn has_media(&self) -> bool {
        self.media.is_some()
    }

    /// Push volume and mute into the media element
    ///
    /// Called after every volume or mute change; safe to call at any time.
    pub fn apply_settings(&mut self) {
        if let Some(media) = self.media.as_mut() {
            media.set_volume(self.volume.level());
            media.set_muted(self.volume.is_muted());
        }
    }

    // ===== Track Selection =====

    /// Select a track by file name
    ///
    /// Switches the media source, pauses and rewinds to the start. Selecting
    /// the already-selected track also pauses and rewinds.
    pub fn select_track(&mut self, file: &str) -> Result<()> {
        let index = self
            .tracks
            .iter()
            .position(|t| t.file == file)
            .ok_or_else(|| PlaybackError::UnknownTrack(file.to_string()))?;

        self.selected = index;
        if let Some(media) = self.media.as_mut() {
            media.pause();
            if let Err(e) = media.set_source(file) {
                tracing::warn!(file, error = %e, "Failed to load track into media element");
            }
            if let Err(e) = media.reset() {
                tracing::warn!(file, error = %e, "Failed to rewind media element");
            }
        }

        tracing::debug!(file, "Track selected");
        self.pending_events.push(PlayerEvent::TrackSelected {
            file: file.to_string(),
        });
        self.set_state(PlaybackState::Paused);
        Ok(())
    }

    /// Select a track by position in [`TonePlayer::tracks`]
    pub fn select_index(&mut self, index: usize) -> Result<()> {
        let file = self
            .tracks
            .get(index)
            .map(|t| t.file.clone())
            .ok_or_else(|| PlaybackError::UnknownTrack(format!("#{}", index + 1)))?;
        self.select_track(&file)
    }

    // ===== Playback Control =====

    /// Toggle between playing and paused
    ///
    /// Does nothing when no media element is attached. If the element
    /// refuses to play, the player stays paused and the error is returned.
    pub fn toggle_play_pause(&mut self) -> Result<()> {
        match self.state {
            PlaybackState::Playing => {
                self.pause();
                Ok(())
            }
            PlaybackState::Paused => self.play(),
        }
    }

    /// Start or resume playback
    pub fn play(&mut self) -> Result<()> {
        let Some(media) = self.media.as_mut() else {
            return Ok(());
        };
        if self.state == PlaybackState::Playing {
            return Ok(());
        }

        match media.play() {
            Ok(()) => {
                self.set_state(PlaybackState::Playing);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(file = %self.selected_file(), error = %e, "Playback failed to start");
                Err(e)
            }
        }
    }

    /// Pause playback
    pub fn pause(&mut self) {
        let Some(media) = self.media.as_mut() else {
            return;
        };
        media.pause();
        self.set_state(PlaybackState::Paused);
    }

    /// Handle the media element reaching the end of the track
    pub fn on_ended(&mut self) {
        if self.state != PlaybackState::Playing {
            return;
        }
        let file = self.selected_file().to_string();
        tracing::debug!(file = %file, "Track ended");
        self.pending_events.push(PlayerEvent::Ended { file });
        self.set_state(PlaybackState::Paused);
    }

    /// Check the media element for end of track
    ///
    /// Returns `true` if the track ended since the last poll.
    pub fn poll_ended(&mut self) -> bool {
        let ended = self.state == PlaybackState::Playing
            && self.media.as_ref().is_some_and(|m| m.has_ended());
        if ended {
            self.on_ended();
        }
        ended
    }

    // ===== Volume Control =====

    /// Set volume (0.0-1.0)
    ///
    /// Values outside the range are clamped; NaN and infinities are ignored.
    pub fn set_volume(&mut self, level: f32) {
        if self.volume.set_level(level) {
            self.volume_changed();
        }
    }

    /// Set mute state
    pub fn set_muted(&mut self, muted: bool) {
        self.volume.set_muted(muted);
        self.volume_changed();
    }

    /// Toggle mute
    pub fn toggle_mute(&mut self) {
        self.volume.toggle_mute();
        self.volume_changed();
    }

    // ===== State Queries =====

    /// The three built-in tracks
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Currently selected track
    pub fn selected_track(&self) -> &Track {
        &self.tracks[self.selected]
    }

    /// File of the currently selected track
    pub fn selected_file(&self) -> &str {
        &self.selected_track().file
    }

    /// Get playback state
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Check if playing
    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    /// Get volume level (0.0-1.0)
    pub fn volume(&self) -> f32 {
        self.volume.level()
    }

    /// Volume and mute state
    pub fn volume_state(&self) -> Volume {
        self.volume
    }

    /// Check if muted
    pub fn is_muted(&self) -> bool {
        self.volume.is_muted()
    }

    /// Current position reported by the media element
    pub fn position(&self) -> Duration {
        self.media
            .as_ref()
            .map_or(Duration::ZERO, |m| m.position())
    }

    // ===== Events =====

    /// Drain pending events
    pub fn drain_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    fn set_state(&mut self, state: PlaybackState) {
        if self.state != state {
            self.state = state;
            self.pending_events.push(PlayerEvent::StateChanged { state });
        }
    }

    fn volume_changed(&mut self) {
        self.apply_settings();
        self.pending_events.push(PlayerEvent::VolumeChanged {
            level: self.volume.level(),
            is_muted: self.volume.is_muted(),
        });
    }
}

impl Default for TonePlayer {
    fn default() -> Self {
        Self {
            tracks: Track::tone_tracks(),
            selected: 0,
            state: PlaybackState::Paused,
            volume: Volume::default(),
            media: None,
            pending_events: Vec::new(),
        }
    }
}

impl fmt::Debug for TonePlayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TonePlayer")
            .field("selected", &self.selected_file())
            .field("state", &self.state)
            .field("volume", &self.volume)
            .field("has_media", &self.media.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::HeadlessMedia;

    fn player_with_media() -> (TonePlayer, crate::media::MediaMonitor) {
        let mut player = TonePlayer::default();
        let media = HeadlessMedia::new();
        let monitor = media.monitor();
        player.attach_media(Box::new(media));
        player.drain_events();
        (player, monitor)
    }

    #[test]
    fn starts_on_first_tone_paused() {
        let player = TonePlayer::default();
        assert_eq!(player.selected_file(), "isochronic-tone-1.mp3");
        assert_eq!(player.selected_track().label, "Tone 1");
        assert_eq!(player.state(), PlaybackState::Paused);
        assert_eq!(player.volume(), 1.0);
        assert!(!player.is_muted());
        assert_eq!(player.tracks().len(), 3);
    }

    #[test]
    fn new_rejects_unknown_initial_track() {
        let config = PlayerConfig {
            initial_track: "nope.mp3".into(),
            ..PlayerConfig::default()
        };
        assert!(matches!(
            TonePlayer::new(config),
            Err(PlaybackError::UnknownTrack(f)) if f == "nope.mp3"
        ));
    }

    #[test]
    fn select_track_loads_pauses_and_rewinds() {
        let (mut player, monitor) = player_with_media();
        player.toggle_play_pause().unwrap();
        monitor.advance(Duration::from_secs(40));

        player.select_track("isochronic-tone-2.mp3").unwrap();

        let snapshot = monitor.snapshot();
        assert_eq!(snapshot.source.as_deref(), Some("isochronic-tone-2.mp3"));
        assert!(!snapshot.playing);
        assert_eq!(snapshot.position, Duration::ZERO);
        assert_eq!(player.state(), PlaybackState::Paused);
        assert_eq!(player.selected_file(), "isochronic-tone-2.mp3");
    }

    #[test]
    fn select_unknown_track_keeps_selection() {
        let (mut player, monitor) = player_with_media();
        let err = player.select_track("isochronic-tone-9.mp3").unwrap_err();
        assert!(matches!(err, PlaybackError::UnknownTrack(_)));
        assert_eq!(player.selected_file(), "isochronic-tone-1.mp3");
        assert_eq!(
            monitor.snapshot().source.as_deref(),
            Some("isochronic-tone-1.mp3")
        );
    }

    #[test]
    fn select_index_out_of_range() {
        let mut player = TonePlayer::default();
        assert!(player.select_index(2).is_ok());
        assert_eq!(player.selected_file(), "isochronic-tone-3.mp3");
        assert!(player.select_index(3).is_err());
    }

    #[test]
    fn toggle_without_media_is_noop() {
        let mut player = TonePlayer::default();
        player.toggle_play_pause().unwrap();
        assert_eq!(player.state(), PlaybackState::Paused);
        assert!(!player.has_pending_events());
    }

    #[test]
    fn toggle_flips_state() {
        let (mut player, monitor) = player_with_media();

        player.toggle_play_pause().unwrap();
        assert!(player.is_playing());
        assert!(monitor.snapshot().playing);

        player.toggle_play_pause().unwrap();
        assert!(!player.is_playing());
        assert!(!monitor.snapshot().playing);

        assert_eq!(
            player.drain_events(),
            vec![
                PlayerEvent::StateChanged {
                    state: PlaybackState::Playing
                },
                PlayerEvent::StateChanged {
                    state: PlaybackState::Paused
                },
            ]
        );
    }

    #[test]
    fn rejected_play_stays_paused() {
        let mut player = TonePlayer::default();
        player.attach_media(Box::new(HeadlessMedia::rejecting_play()));

        assert!(player.toggle_play_pause().is_err());
        assert_eq!(player.state(), PlaybackState::Paused);
    }

    #[test]
    fn volume_is_clamped_and_applied() {
        let (mut player, monitor) = player_with_media();

        player.set_volume(0.35);
        assert_eq!(monitor.snapshot().volume, 0.35);

        player.set_volume(2.0);
        assert_eq!(player.volume(), 1.0);
        assert_eq!(monitor.snapshot().volume, 1.0);

        player.set_volume(f32::NAN);
        assert_eq!(player.volume(), 1.0);
    }

    #[test]
    fn mute_is_applied_and_keeps_level() {
        let (mut player, monitor) = player_with_media();
        player.set_volume(0.5);

        player.set_muted(true);
        let snapshot = monitor.snapshot();
        assert!(snapshot.muted);
        assert_eq!(snapshot.volume, 0.5);

        player.toggle_mute();
        assert!(!player.is_muted());
        assert!(!monitor.snapshot().muted);
    }

    #[test]
    fn attach_applies_settings_and_source() {
        let mut player = TonePlayer::default();
        player.set_volume(0.2);
        player.set_muted(true);
        player.select_track("isochronic-tone-3.mp3").unwrap();

        let media = HeadlessMedia::new();
        let monitor = media.monitor();
        player.attach_media(Box::new(media));

        let snapshot = monitor.snapshot();
        assert_eq!(snapshot.source.as_deref(), Some("isochronic-tone-3.mp3"));
        assert_eq!(snapshot.volume, 0.2);
        assert!(snapshot.muted);
    }

    #[test]
    fn ended_resets_to_paused() {
        let (mut player, monitor) = player_with_media();
        player.play().unwrap();

        assert!(!player.poll_ended());
        monitor.finish();
        assert!(player.poll_ended());
        assert_eq!(player.state(), PlaybackState::Paused);
        assert!(player.drain_events().contains(&PlayerEvent::Ended {
            file: "isochronic-tone-1.mp3".into()
        }));

        // Only reported once
        assert!(!player.poll_ended());
    }

    #[test]
    fn on_ended_while_paused_is_ignored() {
        let (mut player, _monitor) = player_with_media();
        player.on_ended();
        assert!(!player.has_pending_events());
    }
}
