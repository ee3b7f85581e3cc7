//! Pure derivations over goals: percentages, colour bands and the footer
//! statistics.

use crate::models::{ColorBand, Goal, GoalStats};

/// Completion percentage, rounded half-up to the nearest integer.
///
/// `max` is at least 1 for every valid goal; a zero `max` is treated as 1
/// rather than dividing by zero.
pub fn percentage(progress: u32, max: u32) -> u32 {
    let max = u64::from(max.max(1));
    let progress = u64::from(progress);
    ((200 * progress + max) / (2 * max)) as u32
}

pub fn color_band(percentage: u32) -> ColorBand {
    ColorBand::from_percentage(percentage)
}

/// Compute the statistics footer for a collection.
pub fn aggregate(goals: &[Goal]) -> GoalStats {
    let total_goals = goals.len();
    let completed_goals = goals.iter().filter(|g| g.is_complete()).count();

    let average_progress = if total_goals == 0 {
        None
    } else {
        let sum: u64 = goals.iter().map(|g| u64::from(g.percentage())).sum();
        let n = total_goals as u64;
        Some(((2 * sum + n) / (2 * n)) as u32)
    };

    GoalStats {
        total_goals,
        completed_goals,
        average_progress,
    }
}
