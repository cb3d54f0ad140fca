//! Progress report assembly

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::{Execution, Habit};

use super::metrics::success_percentage;
use super::streaks::current_streak;

/// A progress report over a date range, ready for JSON serialization.
///
/// Field order is the serialization order; callers depend on it when
/// rendering the report, so the six fields stay in this sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressReport {
    /// Habit name as supplied
    pub habit_name: String,
    /// Range start, `YYYY-MM-DD`
    pub start_date: String,
    /// Range end, `YYYY-MM-DD`
    pub end_date: String,
    /// Current streak rendered as `"<n> days"`
    pub current_streak: String,
    /// Success rate over the range, two decimals with a `%` suffix
    pub success_rate: String,
    /// Newline-joined history lines, `"<date>: Completed"` or
    /// `"<date>: Not completed"`, sorted ascending by date
    pub history: String,
}

/// Build a progress report for one habit over `[start, end]`.
///
/// Resolving the habit reference is the caller's job; an unresolvable id is
/// reported by the caller as [`Error::NotFound`] before this is invoked.
/// `today` feeds the current-streak computation and is injected so tests can
/// fix it. An inverted range errors rather than producing an empty report.
pub fn generate_progress_report(
    habit: &Habit,
    executions: &[Execution],
    start: NaiveDate,
    end: NaiveDate,
    today: NaiveDate,
) -> Result<ProgressReport> {
    if start > end {
        return Err(Error::InvalidDateRange { start, end });
    }

    let streak = current_streak(executions, today);
    let rate = success_percentage(executions, start, end);

    let mut in_range: Vec<&Execution> = executions
        .iter()
        .filter(|e| e.date >= start && e.date <= end)
        .collect();
    in_range.sort_by_key(|e| e.date);

    let history = in_range
        .iter()
        .map(|e| {
            format!(
                "{}: {}",
                e.date,
                if e.completed { "Completed" } else { "Not completed" }
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    tracing::debug!(
        habit = %habit.name,
        streak,
        rate,
        entries = in_range.len(),
        "Progress report assembled"
    );

    Ok(ProgressReport {
        habit_name: habit.name.clone(),
        start_date: start.to_string(),
        end_date: end.to_string(),
        current_streak: format!("{} days", streak),
        success_rate: format!("{:.2}%", rate),
        history,
    })
}
