/// Goal visualization image
use serde::{Deserialize, Serialize};
use std::fmt;

/// Path or URL of a goal image
///
/// Serialized as a bare string, matching the entries of `goals.json`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GoalImage(String);

impl GoalImage {
    /// Create a goal image reference
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Get the inner path
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GoalImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for GoalImage {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}
