//! Integration tests for the tone player
//!
//! These tests drive the player through realistic listening sessions with a
//! headless media element and verify what the element was told.

use motive_playback::{
    HeadlessMedia, MediaMonitor, PlaybackError, PlaybackState, PlayerConfig, PlayerEvent, TonePlayer,
};
use std::time::Duration;

// ===== Test Helpers =====

fn attached(config: PlayerConfig) -> (TonePlayer, MediaMonitor) {
    let mut player = TonePlayer::new(config).unwrap();
    let media = HeadlessMedia::new();
    let monitor = media.monitor();
    player.attach_media(Box::new(media));
    (player, monitor)
}

// ===== Sessions =====

#[test]
fn listen_switch_and_listen_again() {
    let (mut player, monitor) = attached(PlayerConfig::default());

    player.toggle_play_pause().unwrap();
    monitor.advance(Duration::from_secs(95));
    assert_eq!(player.position(), Duration::from_secs(95));

    player.select_track("isochronic-tone-2.mp3").unwrap();
    assert_eq!(player.state(), PlaybackState::Paused);
    assert_eq!(player.position(), Duration::ZERO);

    player.toggle_play_pause().unwrap();
    let snapshot = monitor.snapshot();
    assert!(snapshot.playing);
    assert_eq!(snapshot.source.as_deref(), Some("isochronic-tone-2.mp3"));
    assert_eq!(snapshot.play_count, 2);
}

#[test]
fn configured_start_is_applied_on_attach() {
    let config = PlayerConfig {
        initial_track: "isochronic-tone-3.mp3".into(),
        volume: 0.25,
        muted: true,
    };
    let (player, monitor) = attached(config);

    let snapshot = monitor.snapshot();
    assert_eq!(snapshot.source.as_deref(), Some("isochronic-tone-3.mp3"));
    assert_eq!(snapshot.volume, 0.25);
    assert!(snapshot.muted);
    assert_eq!(player.selected_track().label, "Tone 3");
}

#[test]
fn track_finishing_returns_to_paused_and_can_restart() {
    let (mut player, monitor) = attached(PlayerConfig::default());
    player.drain_events();

    player.play().unwrap();
    monitor.finish();
    assert!(player.poll_ended());

    let events = player.drain_events();
    assert_eq!(
        events,
        vec![
            PlayerEvent::StateChanged {
                state: PlaybackState::Playing
            },
            PlayerEvent::Ended {
                file: "isochronic-tone-1.mp3".into()
            },
            PlayerEvent::StateChanged {
                state: PlaybackState::Paused
            },
        ]
    );

    player.toggle_play_pause().unwrap();
    assert!(player.is_playing());
    assert!(!monitor.snapshot().ended);
}

#[test]
fn volume_changes_reach_media_while_playing() {
    let (mut player, monitor) = attached(PlayerConfig::default());
    player.play().unwrap();

    for level in [0.9, 0.6, 0.3] {
        player.set_volume(level);
        assert_eq!(monitor.snapshot().volume, level);
    }

    player.toggle_mute();
    assert!(monitor.snapshot().muted);
    assert!(player.is_playing());
}

#[test]
fn select_with_unknown_file_reports_error() {
    let (mut player, _monitor) = attached(PlayerConfig::default());
    match player.select_track("../secret.mp3") {
        Err(PlaybackError::UnknownTrack(file)) => assert_eq!(file, "../secret.mp3"),
        other => panic!("expected UnknownTrack, got {other:?}"),
    }
}

#[test]
fn controls_without_media_stay_paused() {
    let mut player = TonePlayer::new(PlayerConfig::default()).unwrap();
    assert!(!player.has_media());

    player.toggle_play_pause().unwrap();
    assert_eq!(player.state(), PlaybackState::Paused);
    assert_eq!(player.position(), Duration::ZERO);

    // Volume still tracked without media
    player.set_volume(0.4);
    assert_eq!(player.volume(), 0.4);
}
