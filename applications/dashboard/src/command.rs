//! Line commands accepted by the interactive dashboard

use std::str::FromStr;
use thiserror::Error;

/// Direction for manual rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Next,
    Prev,
}

/// How a track was named on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackRef {
    /// Zero-based position (typed one-based)
    Index(usize),
    /// File name, e.g. `isochronic-tone-2.mp3`
    File(String),
}

/// Past successes sub-commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WinCommand {
    Step(Step),
    /// `win add` with inline text, or `None` to open the form
    Add(Option<String>),
    Cancel,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Play,
    Pause,
    Toggle,
    Track(TrackRef),
    Volume(f32),
    Mute,
    Unmute,
    ToggleMute,
    Goal(Step),
    Win(WinCommand),
    Status,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command `{0}`, type `help` for the list")]
    Unknown(String),

    #[error("`{command}` expects {expected}")]
    BadArgument {
        command: &'static str,
        expected: &'static str,
    },
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_ascii_lowercase().as_str() {
            "" => Err(ParseCommandError::Empty),
            "play" => no_args(Command::Play, "play", rest),
            "pause" => no_args(Command::Pause, "pause", rest),
            "toggle" | "p" => no_args(Command::Toggle, "toggle", rest),
            "mute" => match rest {
                "" => Ok(Command::Mute),
                "toggle" => Ok(Command::ToggleMute),
                _ => Err(ParseCommandError::BadArgument {
                    command: "mute",
                    expected: "no argument or `toggle`",
                }),
            },
            "unmute" => no_args(Command::Unmute, "unmute", rest),
            "track" => parse_track(rest).map(Command::Track),
            "volume" | "vol" => parse_volume(rest).map(Command::Volume),
            "goal" | "goals" => parse_step("goal", rest).map(Command::Goal),
            "win" | "wins" => parse_win(rest).map(Command::Win),
            "status" => no_args(Command::Status, "status", rest),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(ParseCommandError::Unknown(other.to_string())),
        }
    }
}

fn no_args(command: Command, name: &'static str, rest: &str) -> Result<Command, ParseCommandError> {
    if rest.is_empty() {
        Ok(command)
    } else {
        Err(ParseCommandError::BadArgument {
            command: name,
            expected: "no argument",
        })
    }
}

fn parse_track(arg: &str) -> Result<TrackRef, ParseCommandError> {
    let bad = ParseCommandError::BadArgument {
        command: "track",
        expected: "a number (1-3) or a file name",
    };

    if arg.is_empty() {
        return Err(bad);
    }
    match arg.parse::<usize>() {
        Ok(0) => Err(bad),
        Ok(n) => Ok(TrackRef::Index(n - 1)),
        Err(_) => Ok(TrackRef::File(arg.to_string())),
    }
}

fn parse_volume(arg: &str) -> Result<f32, ParseCommandError> {
    let bad = ParseCommandError::BadArgument {
        command: "volume",
        expected: "a level between 0 and 1 (or a percentage like 40%)",
    };

    let level = match arg.strip_suffix('%') {
        Some(percent) => percent.trim().parse::<f32>().map(|p| p / 100.0),
        None => arg.parse::<f32>(),
    }
    .map_err(|_| bad.clone())?;

    if level.is_finite() {
        Ok(level)
    } else {
        Err(bad)
    }
}

fn parse_step(command: &'static str, arg: &str) -> Result<Step, ParseCommandError> {
    match arg.to_ascii_lowercase().as_str() {
        "next" | "n" | "" => Ok(Step::Next),
        "prev" | "previous" | "p" => Ok(Step::Prev),
        _ => Err(ParseCommandError::BadArgument {
            command,
            expected: "`next` or `prev`",
        }),
    }
}

fn parse_win(rest: &str) -> Result<WinCommand, ParseCommandError> {
    let (sub, text) = match rest.split_once(char::is_whitespace) {
        Some((sub, text)) => (sub, text.trim()),
        None => (rest, ""),
    };

    match sub.to_ascii_lowercase().as_str() {
        "add" => Ok(WinCommand::Add(
            (!text.is_empty()).then(|| text.to_string()),
        )),
        "cancel" if text.is_empty() => Ok(WinCommand::Cancel),
        _ if text.is_empty() => parse_step("win", sub).map(WinCommand::Step),
        _ => Err(ParseCommandError::BadArgument {
            command: "win",
            expected: "`next`, `prev`, `add [text]` or `cancel`",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Result<Command, ParseCommandError> {
        line.parse()
    }

    #[test]
    fn parses_player_commands() {
        assert_eq!(parse("play").unwrap(), Command::Play);
        assert_eq!(parse("  PAUSE ").unwrap(), Command::Pause);
        assert_eq!(parse("toggle").unwrap(), Command::Toggle);
        assert_eq!(parse("mute").unwrap(), Command::Mute);
        assert_eq!(parse("mute toggle").unwrap(), Command::ToggleMute);
        assert_eq!(parse("unmute").unwrap(), Command::Unmute);
    }

    #[test]
    fn parses_tracks_by_number_and_file() {
        assert_eq!(parse("track 2").unwrap(), Command::Track(TrackRef::Index(1)));
        assert_eq!(
            parse("track isochronic-tone-3.mp3").unwrap(),
            Command::Track(TrackRef::File("isochronic-tone-3.mp3".into()))
        );
        assert!(parse("track 0").is_err());
        assert!(parse("track").is_err());
    }

    #[test]
    fn parses_volume_levels() {
        assert_eq!(parse("volume 0.25").unwrap(), Command::Volume(0.25));
        assert_eq!(parse("vol 40%").unwrap(), Command::Volume(0.4));
        // Clamping is the player's job
        assert_eq!(parse("volume 3").unwrap(), Command::Volume(3.0));
        assert!(parse("volume loud").is_err());
        assert!(parse("volume NaN").is_err());
    }

    #[test]
    fn parses_rotation() {
        assert_eq!(parse("goal next").unwrap(), Command::Goal(Step::Next));
        assert_eq!(parse("goal prev").unwrap(), Command::Goal(Step::Prev));
        assert_eq!(parse("goal").unwrap(), Command::Goal(Step::Next));
        assert_eq!(
            parse("win prev").unwrap(),
            Command::Win(WinCommand::Step(Step::Prev))
        );
        assert!(parse("goal sideways").is_err());
    }

    #[test]
    fn parses_win_add() {
        assert_eq!(
            parse("win add   Ran a half marathon ").unwrap(),
            Command::Win(WinCommand::Add(Some("Ran a half marathon".into())))
        );
        assert_eq!(parse("win add").unwrap(), Command::Win(WinCommand::Add(None)));
        assert_eq!(parse("win cancel").unwrap(), Command::Win(WinCommand::Cancel));
        assert!(parse("win next please").is_err());
    }

    #[test]
    fn reports_unknown_and_empty() {
        assert_eq!(parse("   "), Err(ParseCommandError::Empty));
        assert_eq!(
            parse("dance"),
            Err(ParseCommandError::Unknown("dance".into()))
        );
    }
}
