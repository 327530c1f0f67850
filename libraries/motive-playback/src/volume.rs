//! Volume and mute state
//!
//! Mirrors the media element's `volume`/`muted` pair: a linear level in
//! `[0.0, 1.0]` and a mute flag that preserves the level.

/// Volume level with mute
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Volume {
    /// Volume level (0.0-1.0)
    level: f32,

    /// Mute state (preserves volume level)
    muted: bool,
}

impl Volume {
    /// Create a volume, clamping `level` into range
    ///
    /// Non-finite levels fall back to full volume.
    pub fn new(level: f32) -> Self {
        let level = if level.is_finite() {
            level.clamp(0.0, 1.0)
        } else {
            1.0
        };

        Self {
            level,
            muted: false,
        }
    }

    /// Set volume level, clamped to 0.0-1.0
    ///
    /// Returns `false` (and keeps the old level) for NaN or infinite input.
    pub fn set_level(&mut self, level: f32) -> bool {
        if !level.is_finite() {
            return false;
        }
        self.level = level.clamp(0.0, 1.0);
        true
    }

    /// Get current volume level (0.0-1.0)
    pub fn level(&self) -> f32 {
        self.level
    }

    /// Set mute state
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Toggle mute state
    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    /// Check if muted
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Level as a whole percentage, for display
    pub fn percent(&self) -> u8 {
        (self.level * 100.0).round() as u8
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::new(1.0)
    }
}
