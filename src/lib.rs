//! Habit Builder: named goals with progress toward a target, kept in a local
//! key-value store.
//!
//! The [`store::GoalStore`] is the core. It owns the goal list, reconciles
//! live edits of each goal's target with the committed value, and writes the
//! whole list back through a [`store::GoalRepository`] after every change.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod render;
pub mod session;
pub mod stats;
pub mod store;

pub use error::StoreError;
