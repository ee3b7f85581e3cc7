//! JSON encoding of the goal collection.
//!
//! The stored form is an ordered array of `{id, name, progress, max}`
//! records. Decoding checks every record against the goal invariants so a
//! hand-edited or corrupted value is reported instead of loaded.

use std::collections::HashSet;

use crate::error::{Result, StoreError};
use crate::models::Goal;

pub fn encode(goals: &[Goal]) -> Result<String> {
    Ok(serde_json::to_string(goals)?)
}

pub fn decode(raw: &str) -> Result<Vec<Goal>> {
    let goals: Vec<Goal> = serde_json::from_str(raw)?;

    let mut seen = HashSet::new();
    for (index, goal) in goals.iter().enumerate() {
        if let Some(reason) = goal.violation() {
            tracing::warn!(index, id = %goal.id(), reason, "Rejecting stored goal");
            return Err(StoreError::InvalidRecord {
                index,
                reason: reason.to_string(),
            });
        }
        if !seen.insert(goal.id()) {
            tracing::warn!(index, id = %goal.id(), "Rejecting duplicate goal id");
            return Err(StoreError::InvalidRecord {
                index,
                reason: format!("duplicate id {}", goal.id()),
            });
        }
    }

    Ok(goals)
}
