//! Plain-text rendering of goals and the statistics footer.

use crate::models::{ColorBand, Goal, GoalStats};

const BAR_WIDTH: usize = 20;
const FILLED: char = '█';
const EMPTY: char = '░';

/// Render a progress bar `BAR_WIDTH` cells wide for a percentage.
pub fn progress_bar(percentage: u32) -> String {
    let filled = (percentage.min(100) as usize * BAR_WIDTH + 50) / 100;
    let mut bar = String::with_capacity(BAR_WIDTH * 3 + 2);
    bar.push('[');
    bar.extend(std::iter::repeat(FILLED).take(filled));
    bar.extend(std::iter::repeat(EMPTY).take(BAR_WIDTH - filled));
    bar.push(']');
    bar
}

/// Render one goal as two lines.
///
/// Example output:
/// ```text
///  1. Read                 [████████████░░░░░░░░] 3 / 5   60% (mid)
///     id: 6f1c...  max: 5
/// ```
pub fn render_goal(position: usize, goal: &Goal, max_display: &str) -> String {
    let percentage = goal.percentage();
    let band = ColorBand::from_percentage(percentage);
    let mut out = format!(
        "{:>2}. {:<20} {} {} / {}  {:>3}% ({})\n",
        position,
        goal.name(),
        progress_bar(percentage),
        goal.progress(),
        goal.max(),
        percentage,
        band.as_str(),
    );
    out.push_str(&format!("    id: {}  max: {}", goal.id(), max_display));
    if goal.is_complete() {
        out.push_str("  Completed!");
    }
    out.push('\n');
    out
}

/// Render a goal list, using `max_display` for each goal's max field.
pub fn render_goals<'a>(
    goals: impl IntoIterator<Item = (&'a Goal, String)>,
) -> String {
    let mut out = String::new();
    for (i, (goal, max_display)) in goals.into_iter().enumerate() {
        out.push_str(&render_goal(i + 1, goal, &max_display));
    }
    if out.is_empty() {
        out.push_str("No goals yet. Add your first goal to start tracking your progress!\n");
    }
    out
}

/// Render the statistics footer. Empty when there are no goals.
pub fn render_stats(stats: &GoalStats) -> String {
    let Some(average) = stats.average_progress else {
        return String::new();
    };
    format!(
        "Total goals: {}  Completed: {}  Average progress: {}%\n",
        stats.total_goals, stats.completed_goals, average
    )
}
