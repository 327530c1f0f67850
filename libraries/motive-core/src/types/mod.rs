//! Domain types shared across the workspace

mod affirmation;
mod goal;
mod track;

pub use affirmation::{Affirmation, AffirmationId};
pub use goal::GoalImage;
pub use track::Track;
