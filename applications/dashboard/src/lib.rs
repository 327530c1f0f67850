//! Motive Dashboard Library
//!
//! Terminal motivation dashboard: an isochronic tone player, a rotating goal
//! slideshow and a rotating, user-extendable list of past successes.
//!
//! This library exposes the core components for testing purposes.

pub mod command;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod media;
pub mod render;

// Re-export commonly used types for convenience
pub use command::{Command, ParseCommandError};
pub use config::DashboardConfig;
pub use dashboard::{Dashboard, Response};
pub use error::{DashboardError, Result};
pub use media::{fetch_tones, RodioMedia};
