//! Plain-text rendering of the dashboard panels

use motive_core::{Affirmation, GoalImage};
use motive_playback::{PlaybackState, PlayerEvent, TonePlayer};
use motive_rotation::{AffirmationBoard, Carousel};
use std::fmt::Write;

pub const EMPTY_GOALS: &str = "No goals to display yet.";
pub const EMPTY_WINS: &str = "No past successes yet. Add your first win!";

pub const HELP: &str = "\
Tone player
  play | pause | toggle      start or stop the selected tone
  track <1-3|file>           select a tone (stops playback)
  volume <0..1|N%>           set the volume
  mute | unmute | mute toggle
Goal slideshow
  goal next | goal prev
Past successes
  win next | win prev
  win add [text]             add a win (without text, the next line is the win)
  win cancel                 close the add form
Other
  status | help | quit";

/// Tone selector, play state and volume on one line
pub fn player_line(player: &TonePlayer) -> String {
    let mut line = String::from("Tones:");
    for track in player.tracks() {
        if track.file == player.selected_file() {
            let _ = write!(line, " [{}]", track.label);
        } else {
            let _ = write!(line, " {}", track.label);
        }
    }

    let state = match player.state() {
        PlaybackState::Playing => "Playing",
        PlaybackState::Paused => "Paused",
    };
    let volume = player.volume_state();
    let _ = write!(line, " | {state} | volume {}%", volume.percent());
    if volume.is_muted() {
        line.push_str(" (muted)");
    }
    if player.has_media() {
        let elapsed = player.position().as_secs();
        let _ = write!(line, " | {}:{:02}", elapsed / 60, elapsed % 60);
    } else {
        line.push_str(" | no audio");
    }
    line
}

pub fn goal_line(goals: &Carousel<GoalImage>) -> String {
    match (goals.current(), goals.index()) {
        (Some(goal), Some(index)) => format!("Goal {}/{}: {goal}", index + 1, goals.len()),
        _ => EMPTY_GOALS.to_string(),
    }
}

pub fn win_line(wins: &AffirmationBoard) -> String {
    match (wins.current(), wins.carousel().index()) {
        (Some(Affirmation { text, .. }), Some(index)) => {
            format!("Win {}/{}: {text}", index + 1, wins.len())
        }
        _ => EMPTY_WINS.to_string(),
    }
}

/// Full dashboard: player, goal and win panels
pub fn status(player: &TonePlayer, goals: &Carousel<GoalImage>, wins: &AffirmationBoard) -> String {
    let mut out = format!(
        "{}\n{}\n{}",
        player_line(player),
        goal_line(goals),
        win_line(wins)
    );
    if wins.is_form_open() {
        out.push_str("\nAdding a win: type it and press enter, or `win cancel`.");
    }
    out
}

/// One-line description of a player event, for the log
pub fn event_line(event: &PlayerEvent) -> String {
    match event {
        PlayerEvent::TrackSelected { file } => format!("selected {file}"),
        PlayerEvent::StateChanged { state } => format!("state {state:?}"),
        PlayerEvent::VolumeChanged { level, is_muted } => {
            format!("volume {level:.2} muted={is_muted}")
        }
        PlayerEvent::Ended { file } => format!("{file} ended"),
    }
}
