//! The authoritative in-memory goal collection.
//!
//! [`GoalStore`] owns the goals, the max-field [`EditBuffer`] and the
//! new-goal draft. Every mutation runs to completion on `&mut self` and then
//! writes the whole collection through the injected [`GoalRepository`].
//! Requests that reference an unknown goal, or carry unusable input, are
//! no-ops rather than errors; only the repository can fail.

mod codec;
mod edit_buffer;
mod repository;

pub use codec::{decode, encode};
pub use edit_buffer::{
    parse_leading_int, parse_positive, positive_target, CommitAction, EditBuffer, MaxField,
};
pub use repository::{GoalRepository, KeyValueStore, MemoryStore, GOALS_KEY};

use crate::error::Result;
use crate::models::*;
use crate::stats;

pub struct GoalStore<R: GoalRepository> {
    repo: R,
    goals: Vec<Goal>,
    edit_buffer: EditBuffer,
    draft: DraftGoal,
}

impl<R: GoalRepository> GoalStore<R> {
    /// Load the saved collection from `repo`. Nothing saved yet means an
    /// empty collection.
    pub fn open(repo: R) -> Result<Self> {
        let goals = match repo.load()? {
            Some(raw) => decode(&raw)?,
            None => Vec::new(),
        };
        tracing::info!(count = goals.len(), "Loaded goals");

        Ok(Self {
            repo,
            goals,
            edit_buffer: EditBuffer::new(),
            draft: DraftGoal::default(),
        })
    }

    // ============================================================
    // Queries
    // ============================================================

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn get(&self, id: &GoalId) -> Option<&Goal> {
        self.goals.iter().find(|g| g.id() == id)
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    /// Text to show in a goal's max field: the raw buffer while editing,
    /// otherwise the committed max. `None` for an unknown goal.
    pub fn max_display(&self, id: &GoalId) -> Option<String> {
        self.get(id).map(|goal| self.edit_buffer.display(id, goal.max()))
    }

    pub fn edit_buffer(&self) -> &EditBuffer {
        &self.edit_buffer
    }

    pub fn percentage(&self, id: &GoalId) -> Option<u32> {
        self.get(id).map(Goal::percentage)
    }

    pub fn color_band(&self, id: &GoalId) -> Option<ColorBand> {
        self.percentage(id).map(stats::color_band)
    }

    pub fn stats(&self) -> GoalStats {
        stats::aggregate(&self.goals)
    }

    pub fn draft(&self) -> &DraftGoal {
        &self.draft
    }

    // ============================================================
    // Goal mutations
    // ============================================================

    /// Append a new goal. A blank name is ignored and leaves the draft
    /// untouched; a zero `requested_max` falls back to [`DEFAULT_MAX`].
    pub fn create(&mut self, name: &str, requested_max: u32) -> Result<Option<Goal>> {
        let Some(goal) = Goal::new(name, requested_max) else {
            tracing::debug!("Ignoring goal with blank name");
            return Ok(None);
        };

        tracing::debug!(id = %goal.id(), name = goal.name(), max = goal.max(), "Created goal");
        self.goals.push(goal.clone());
        self.draft = DraftGoal::default();
        self.persist()?;
        Ok(Some(goal))
    }

    /// Create a goal from the current draft fields.
    pub fn submit_draft(&mut self) -> Result<Option<Goal>> {
        let name = self.draft.name.clone();
        let max = self.draft.max.resolve();
        self.create(&name, max)
    }

    pub fn increment(&mut self, id: &GoalId) -> Result<bool> {
        let Some(goal) = self.goal_mut(id) else {
            return Ok(false);
        };
        if !goal.increment() {
            tracing::debug!(%id, "Goal already at max");
            return Ok(false);
        }
        tracing::debug!(%id, progress = goal.progress(), "Incremented goal");
        self.persist()?;
        Ok(true)
    }

    /// Zero a goal's progress. Persists even when progress was already 0.
    pub fn reset(&mut self, id: &GoalId) -> Result<bool> {
        let Some(goal) = self.goal_mut(id) else {
            return Ok(false);
        };
        goal.reset();
        tracing::debug!(%id, "Reset goal");
        self.persist()?;
        Ok(true)
    }

    /// Set a goal's max, clamping progress down to it. Zero is ignored.
    pub fn retarget(&mut self, id: &GoalId, new_max: u32) -> Result<bool> {
        let Some(goal) = self.goal_mut(id) else {
            return Ok(false);
        };
        if !goal.retarget(new_max) {
            tracing::debug!(%id, "Ignoring non-positive max");
            return Ok(false);
        }
        tracing::debug!(%id, max = new_max, progress = goal.progress(), "Retargeted goal");
        self.persist()?;
        Ok(true)
    }

    /// Remove a goal along with any in-progress edit of its max field.
    pub fn delete(&mut self, id: &GoalId) -> Result<bool> {
        let Some(index) = self.goals.iter().position(|g| g.id() == id) else {
            return Ok(false);
        };
        self.goals.remove(index);
        self.edit_buffer.remove(id);
        tracing::debug!(%id, "Deleted goal");
        self.persist()?;
        Ok(true)
    }

    // ============================================================
    // Max field editing
    // ============================================================

    /// A keystroke in a goal's max field. The raw text is kept for display;
    /// if it parses to a positive integer the goal is retargeted immediately.
    /// Input for an unknown goal is dropped.
    pub fn on_buffer_input(&mut self, id: &GoalId, raw: &str) -> Result<()> {
        if self.get(id).is_none() {
            tracing::debug!(%id, "Ignoring max edit for unknown goal");
            return Ok(());
        }
        if let Some(max) = self.edit_buffer.input(id, raw) {
            self.retarget(id, max)?;
        }
        Ok(())
    }

    /// Focus left a goal's max field. A blank buffer forces max to 1; any
    /// other buffer is dropped, leaving the last valid max in place.
    pub fn on_buffer_commit(&mut self, id: &GoalId) -> Result<()> {
        match self.edit_buffer.commit(id) {
            CommitAction::ForceMinimum => {
                self.retarget(id, 1)?;
            }
            CommitAction::Discard => {
                tracing::debug!(%id, "Discarded max edit");
            }
            CommitAction::None => {}
        }
        Ok(())
    }

    // ============================================================
    // Draft editing
    // ============================================================

    pub fn set_draft_name(&mut self, name: &str) {
        self.draft.name = name.to_string();
    }

    /// A keystroke in the new-goal max field.
    pub fn set_draft_max_input(&mut self, raw: &str) {
        self.draft.max = match parse_positive(raw) {
            Some(n) => DraftMax::Value(n),
            None => DraftMax::Editing(raw.to_string()),
        };
    }

    /// Focus left the new-goal max field; anything unparsed reverts to the
    /// default.
    pub fn on_draft_max_blur(&mut self) {
        if let DraftMax::Editing(_) = self.draft.max {
            self.draft.max = DraftMax::default();
        }
    }

    fn goal_mut(&mut self, id: &GoalId) -> Option<&mut Goal> {
        let goal = self.goals.iter_mut().find(|g| g.id() == id);
        if goal.is_none() {
            tracing::debug!(%id, "Ignoring unknown goal");
        }
        goal
    }

    fn persist(&self) -> Result<()> {
        let serialized = encode(&self.goals)?;
        self.repo.save(&serialized)?;
        Ok(())
    }
}
