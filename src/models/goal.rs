use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Target assigned to a goal when the requested one is missing or not positive.
pub const DEFAULT_MAX: u32 = 10;

/// Opaque identifier of a goal, stable for the goal's lifetime.
///
/// Serialized as a plain string. Fresh ids are UUID v4 text, but any string
/// loaded from storage is accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GoalId(String);

impl GoalId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for GoalId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for GoalId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for GoalId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for GoalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named counter with a current progress value and a target ceiling.
///
/// Fields are private so that `0 <= progress <= max` and `max >= 1` can only
/// be broken by going through [`Goal::from_parts`], which the storage codec
/// validates separately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    id: GoalId,
    name: String,
    progress: u32,
    max: u32,
}

impl Goal {
    /// Build a fresh goal with zero progress.
    ///
    /// Returns `None` when `name` is empty after trimming. A `max` of zero
    /// falls back to [`DEFAULT_MAX`].
    pub fn new(name: &str, max: u32) -> Option<Self> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        Some(Self {
            id: GoalId::new(),
            name: name.to_string(),
            progress: 0,
            max: if max > 0 { max } else { DEFAULT_MAX },
        })
    }

    /// Reassemble a goal from stored fields without checking invariants.
    pub fn from_parts(id: GoalId, name: String, progress: u32, max: u32) -> Self {
        Self {
            id,
            name,
            progress,
            max,
        }
    }

    pub fn id(&self) -> &GoalId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn progress(&self) -> u32 {
        self.progress
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn is_complete(&self) -> bool {
        self.progress == self.max
    }

    pub fn can_increment(&self) -> bool {
        self.progress < self.max
    }

    pub fn percentage(&self) -> u32 {
        crate::stats::percentage(self.progress, self.max)
    }

    /// Advance progress by one unless already at the ceiling.
    pub(crate) fn increment(&mut self) -> bool {
        if !self.can_increment() {
            return false;
        }
        self.progress += 1;
        true
    }

    pub(crate) fn reset(&mut self) {
        self.progress = 0;
    }

    /// Move the ceiling, clamping progress down if needed. Zero is ignored.
    pub(crate) fn retarget(&mut self, max: u32) -> bool {
        if max == 0 {
            return false;
        }
        self.max = max;
        self.progress = self.progress.min(max);
        true
    }

    /// Describe the first invariant this goal violates, if any.
    pub fn violation(&self) -> Option<&'static str> {
        if self.name.trim().is_empty() {
            Some("name is empty")
        } else if self.max == 0 {
            Some("max must be at least 1")
        } else if self.progress > self.max {
            Some("progress exceeds max")
        } else {
            None
        }
    }
}

/// Value staged in the new-goal form's max field.
///
/// `Value` holds a parsed positive target. `Editing` holds raw text that
/// did not (yet) parse, including the empty string while the field is cleared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftMax {
    Value(u32),
    Editing(String),
}

impl DraftMax {
    /// Target to use when creating a goal from this draft.
    pub fn resolve(&self) -> u32 {
        match self {
            Self::Value(n) if *n > 0 => *n,
            _ => DEFAULT_MAX,
        }
    }

    pub fn display(&self) -> String {
        match self {
            Self::Value(n) => n.to_string(),
            Self::Editing(raw) => raw.clone(),
        }
    }
}

impl Default for DraftMax {
    fn default() -> Self {
        Self::Value(DEFAULT_MAX)
    }
}

/// Staging state for the goal about to be created.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftGoal {
    pub name: String,
    pub max: DraftMax,
}

impl DraftGoal {
    /// Whether submitting now would create a goal.
    pub fn is_submittable(&self) -> bool {
        !self.name.trim().is_empty()
    }
}
