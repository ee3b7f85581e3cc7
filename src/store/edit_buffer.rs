//! Raw-text overlay for the per-goal max field.
//!
//! A field is either `Committed` (showing the goal's stored max) or
//! `Editing(raw)` (showing exactly what was typed). Typing that parses to a
//! positive integer is applied to the goal live without leaving `Editing`;
//! only a commit (focus loss) returns the field to `Committed`.

use std::collections::HashMap;

use crate::models::GoalId;

/// Display state of one goal's max field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MaxField {
    #[default]
    Committed,
    Editing(String),
}

/// What a commit asks the store to do with the underlying goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitAction {
    /// The field was not being edited.
    None,
    /// The buffer was blank; the goal's max must be forced to 1.
    ForceMinimum,
    /// The buffer is dropped; whatever was valid has already been applied.
    Discard,
}

impl MaxField {
    /// Record `raw` as the displayed text and return the value to apply
    /// live, if it parses to a positive integer.
    pub fn input(&mut self, raw: &str) -> Option<u32> {
        *self = Self::Editing(raw.to_string());
        parse_positive(raw)
    }

    pub fn commit(&mut self) -> CommitAction {
        match std::mem::take(self) {
            Self::Committed => CommitAction::None,
            Self::Editing(raw) if raw.trim().is_empty() => CommitAction::ForceMinimum,
            Self::Editing(_) => CommitAction::Discard,
        }
    }

    pub fn display(&self, committed_max: u32) -> String {
        match self {
            Self::Committed => committed_max.to_string(),
            Self::Editing(raw) => raw.clone(),
        }
    }
}

/// Fields currently being edited, keyed by goal. Absent means `Committed`.
#[derive(Debug, Clone, Default)]
pub struct EditBuffer {
    fields: HashMap<GoalId, MaxField>,
}

impl EditBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&mut self, id: &GoalId, raw: &str) -> Option<u32> {
        self.fields.entry(id.clone()).or_default().input(raw)
    }

    pub fn commit(&mut self, id: &GoalId) -> CommitAction {
        match self.fields.remove(id) {
            Some(mut field) => field.commit(),
            None => CommitAction::None,
        }
    }

    pub fn remove(&mut self, id: &GoalId) {
        self.fields.remove(id);
    }

    pub fn get(&self, id: &GoalId) -> Option<&str> {
        match self.fields.get(id) {
            Some(MaxField::Editing(raw)) => Some(raw.as_str()),
            _ => None,
        }
    }

    pub fn is_editing(&self, id: &GoalId) -> bool {
        self.get(id).is_some()
    }

    pub fn display(&self, id: &GoalId, committed_max: u32) -> String {
        self.fields
            .get(id)
            .map(|field| field.display(committed_max))
            .unwrap_or_else(|| committed_max.to_string())
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Parse the longest integer prefix of `raw`.
///
/// Leading whitespace and one sign character are accepted; parsing stops at
/// the first non-digit, so `"12abc"` is 12 and `"3.9"` is 3. Returns `None`
/// when no digit follows. Values beyond `i64` saturate.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    let mut any = false;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        any = true;
        value = value.saturating_mul(10).saturating_add(i64::from(b - b'0'));
    }

    if !any {
        return None;
    }
    Some(if negative { -value } else { value })
}

/// Leading-prefix parse restricted to positive targets. Values above
/// `u32::MAX` are capped there.
pub fn parse_positive(raw: &str) -> Option<u32> {
    parse_leading_int(raw).and_then(positive_target)
}

/// Narrow a requested target to `u32`, capping at `u32::MAX`. Non-positive
/// requests yield `None`.
pub fn positive_target(value: i64) -> Option<u32> {
    if value > 0 {
        Some(u32::try_from(value).unwrap_or(u32::MAX))
    } else {
        None
    }
}
