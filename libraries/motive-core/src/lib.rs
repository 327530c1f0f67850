//! Motive Core
//!
//! Platform-agnostic types, traits, and error handling for the Motive dashboard.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Track`, `GoalImage`, `Affirmation`
//! - **Core Traits**: `LocalStore` (persisted key/value state), `ResourceFetcher`
//!   (static JSON resources)
//! - **Error Handling**: Unified `MotiveError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use motive_core::types::{Affirmation, Track};
//!
//! let tracks = Track::tone_tracks();
//! assert_eq!(tracks.len(), 3);
//!
//! let win = Affirmation::new(1, "Finished the first 10k");
//! assert_eq!(win.text, "Finished the first 10k");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod storage;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{MotiveError, Result};
pub use storage::{InMemoryStore, LocalStore};
pub use traits::{fetch_json, ResourceFetcher};

pub use types::{Affirmation, AffirmationId, GoalImage, Track};
