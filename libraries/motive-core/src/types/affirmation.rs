/// Affirmation ("win") domain type
use serde::{Deserialize, Serialize};

/// Affirmation identifier
///
/// Defaults ship with small ids; user-added entries use millisecond timestamps.
pub type AffirmationId = i64;

/// A past success shown in the rotating list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Affirmation {
    /// Unique identifier within the list
    pub id: AffirmationId,

    /// Display text
    pub text: String,
}

impl Affirmation {
    /// Create an affirmation
    pub fn new(id: AffirmationId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }

    /// Entry shown when neither the local store nor the defaults can be read
    pub fn placeholder() -> Self {
        Self::new(0, "Every step forward counts. Add your first win!")
    }

    /// Pick an id for a new entry
    ///
    /// Uses `now_ms` unless an existing entry already holds an id at or above
    /// it, in which case the next id past the maximum is used. When the
    /// maximum is `i64::MAX` the first unused id below `now_ms` is taken.
    pub fn fresh_id(existing: &[Affirmation], now_ms: i64) -> AffirmationId {
        match existing.iter().map(|a| a.id).max() {
            Some(max) if max >= now_ms => max
                .checked_add(1)
                .unwrap_or_else(|| Self::unused_below(existing, now_ms)),
            _ => now_ms,
        }
    }

    fn unused_below(existing: &[Affirmation], start: i64) -> AffirmationId {
        let taken: std::collections::HashSet<AffirmationId> =
            existing.iter().map(|a| a.id).collect();
        // The list is finite, so a free id exists within `len + 1` steps.
        let mut id = start;
        while taken.contains(&id) {
            id = id.wrapping_sub(1);
        }
        id
    }
}
