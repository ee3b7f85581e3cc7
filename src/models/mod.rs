//! Domain models for Habit Builder.
//!
//! # Core Concepts
//!
//! - [`Goal`]: a named counter with a progress value and a target ceiling.
//!   `0 <= progress <= max` and `max >= 1` hold after every mutation.
//! - [`DraftGoal`]: the new-goal form's staged name and max, reset after each
//!   successful creation.
//! - [`GoalStats`] / [`ColorBand`]: derived read views, never stored.

mod goal;
mod stats;

pub use goal::*;
pub use stats::*;
