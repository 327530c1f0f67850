//! Auto-advance timers
//!
//! Each rotating collection owns one `AutoAdvance`. The timer never touches
//! the collection itself: it sends a [`RotationTick`] to whoever owns the
//! state, so the index stays single-owner.
//!
//! Aborting a timer task does not recall ticks already sitting in the
//! channel. Every arming gets a new generation, and the owner checks
//! [`AutoAdvance::is_current`] before acting on a tick.

use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, warn};

/// Period shared by the slideshow and the affirmation rotation
pub const DEFAULT_ROTATION_INTERVAL: Duration = Duration::from_secs(30);

/// Which collection a tick is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotationTarget {
    /// Goal image slideshow
    Goals,

    /// Past successes list
    Affirmations,
}

/// One timer firing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationTick {
    /// Collection to advance
    pub target: RotationTarget,

    /// Arming that produced the tick
    pub generation: u64,
}

/// Cancellable periodic ticker scoped to one collection
///
/// `rearm` must be called from within a tokio runtime. The first tick
/// arrives one full period after arming.
#[derive(Debug)]
pub struct AutoAdvance {
    target: RotationTarget,
    period: Duration,
    generation: u64,
    tx: UnboundedSender<RotationTick>,
    handle: Option<JoinHandle<()>>,
}

impl AutoAdvance {
    /// Create a disarmed timer
    pub fn new(
        target: RotationTarget,
        period: Duration,
        tx: UnboundedSender<RotationTick>,
    ) -> Self {
        Self {
            target,
            period,
            generation: 0,
            tx,
            handle: None,
        }
    }

    /// Restart the timer for a collection of `len` items
    ///
    /// Cancels any running timer first, which also makes ticks from earlier
    /// armings stale. Empty collections (and a zero period) leave the timer
    /// disarmed.
    pub fn rearm(&mut self, len: usize) {
        self.cancel();

        if len == 0 {
            debug!(target = ?self.target, "Collection empty, auto-advance disabled");
            return;
        }
        if self.period.is_zero() {
            warn!(target = ?self.target, "Zero rotation period, auto-advance disabled");
            return;
        }

        let tx = self.tx.clone();
        let tick = RotationTick {
            target: self.target,
            generation: self.generation,
        };
        let period = self.period;

        self.handle = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                interval.tick().await;
                if tx.send(tick).is_err() {
                    // Receiver gone, nothing left to advance
                    break;
                }
            }
        }));

        debug!(
            target = ?self.target,
            generation = self.generation,
            period_secs = period.as_secs(),
            len,
            "Auto-advance armed"
        );
    }

    /// Stop the timer if it is running
    pub fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    /// Check that `tick` came from this timer's latest arming
    pub fn is_current(&self, tick: &RotationTick) -> bool {
        tick.target == self.target && tick.generation == self.generation
    }

    /// Check if a timer task is live
    pub fn is_armed(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Tick period
    pub fn period(&self) -> Duration {
        self.period
    }
}

impl Drop for AutoAdvance {
    fn drop(&mut self) {
        self.cancel();
    }
}
