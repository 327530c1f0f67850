/// Track domain type
use serde::{Deserialize, Serialize};

/// Built-in isochronic tones as `(label, file)` pairs
const TONES: [(&str, &str); 3] = [
    ("Tone 1", "isochronic-tone-1.mp3"),
    ("Tone 2", "isochronic-tone-2.mp3"),
    ("Tone 3", "isochronic-tone-3.mp3"),
];

/// Isochronic tone track
///
/// The set of tracks is fixed at build time; `file` doubles as the identity
/// used for selection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Track {
    /// Button label
    pub label: String,

    /// File name, resolved against the asset root
    pub file: String,
}

impl Track {
    /// Create a track
    pub fn new(label: impl Into<String>, file: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            file: file.into(),
        }
    }

    /// The three built-in tones, in display order
    pub fn tone_tracks() -> Vec<Track> {
        TONES
            .iter()
            .map(|(label, file)| Track::new(*label, *file))
            .collect()
    }

    /// File of the track selected on startup
    pub fn default_file() -> &'static str {
        TONES[0].1
    }
}
