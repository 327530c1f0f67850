//! Motive Rotation
//!
//! The rotation/selection side of the dashboard: the goal slideshow and the
//! past successes list.
//!
//! This crate provides:
//! - `Carousel<T>`: an index that moves forward/backward with wraparound
//! - Fisher-Yates shuffle for freshly loaded collections
//! - `AutoAdvance`: a cancellable timer that ticks a collection forward
//! - Loaders with the fallback rules (local store first for affirmations)
//! - `AffirmationBoard`: the add-a-win form and its persistence
//!
//! # Example: Rotating a collection
//!
//! ```rust
//! use motive_rotation::Carousel;
//!
//! let mut goals = Carousel::new(vec!["cabin.jpg", "boat.jpg", "medal.jpg"]);
//! assert_eq!(goals.current(), Some(&"cabin.jpg"));
//!
//! goals.prev();
//! assert_eq!(goals.current(), Some(&"medal.jpg"));
//!
//! goals.next();
//! assert_eq!(goals.index(), Some(0));
//! ```
//!
//! # Example: Timers
//!
//! ```rust,no_run
//! use motive_rotation::{AutoAdvance, RotationTarget, DEFAULT_ROTATION_INTERVAL};
//! use tokio::sync::mpsc;
//!
//! # async fn example() {
//! let (tx, mut rx) = mpsc::unbounded_channel();
//! let mut timer = AutoAdvance::new(RotationTarget::Goals, DEFAULT_ROTATION_INTERVAL, tx);
//! timer.rearm(3);
//!
//! while let Some(tick) = rx.recv().await {
//!     if timer.is_current(&tick) {
//!         // advance the matching carousel
//!     }
//! }
//! # }
//! ```

mod affirmations;
mod auto_advance;
mod carousel;
mod loader;
mod shuffle;

pub use affirmations::{AffirmationBoard, SubmitOutcome};
pub use auto_advance::{AutoAdvance, RotationTarget, RotationTick, DEFAULT_ROTATION_INTERVAL};
pub use carousel::Carousel;
pub use loader::{
    load_affirmations, load_goals, AFFIRMATIONS_RESOURCE, AFFIRMATIONS_STORE_KEY, GOALS_RESOURCE,
};
pub use shuffle::{shuffle, shuffle_with};
