use serde::{Deserialize, Serialize};

/// Coarse bucket of a completion percentage, used to colour progress bars.
///
/// Bands are inclusive lower bounds checked from the top down:
/// `100 → Complete`, `>= 75 → High`, `>= 50 → Mid`, `>= 25 → Low`,
/// anything else `Critical`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ColorBand {
    Complete,
    High,
    Mid,
    Low,
    Critical,
}

impl ColorBand {
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            100 => Self::Complete,
            p if p >= 75 => Self::High,
            p if p >= 50 => Self::Mid,
            p if p >= 25 => Self::Low,
            _ => Self::Critical,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Complete => "complete",
            Self::High => "high",
            Self::Mid => "mid",
            Self::Low => "low",
            Self::Critical => "critical",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "complete" => Some(Self::Complete),
            "high" => Some(Self::High),
            "mid" => Some(Self::Mid),
            "low" => Some(Self::Low),
            "critical" => Some(Self::Critical),
            _ => None,
        }
    }
}

/// Aggregate figures shown in the statistics footer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct GoalStats {
    pub total_goals: usize,
    /// Goals whose progress has reached their max.
    pub completed_goals: usize,
    /// Rounded mean of per-goal percentages. `None` when there are no goals,
    /// in which case the footer is suppressed.
    pub average_progress: Option<u32>,
}
