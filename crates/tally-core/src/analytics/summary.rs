//! One-call habit summary
//!
//! Fans out to the individual analytics so callers surfacing a stats view
//! (a dashboard card, an API response) get everything in one pass.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Execution, Habit};

use super::metrics::{completion_rate, is_improving_trend};
use super::streaks::{current_streak, longest_streak};

/// Aggregate derived metrics for one habit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitSummary {
    pub habit_id: i64,
    pub habit_name: String,
    pub current_streak: u32,
    pub longest_streak: u32,
    /// All-time success percentage in [0.0, 100.0]
    pub success_percentage: f64,
    pub improving_trend: bool,
    pub total_executions: usize,
    pub completed_executions: usize,
}

/// Compute all derived metrics for a habit in one call.
///
/// The input list may be in any order; a date-ascending copy feeds the
/// order-sensitive computations (`longest_streak`, `is_improving_trend`).
pub fn summarize(habit: &Habit, executions: &[Execution], today: NaiveDate) -> HabitSummary {
    let mut ascending: Vec<Execution> = executions.to_vec();
    ascending.sort_by_key(|e| e.date);

    let completed = executions.iter().filter(|e| e.completed).count();

    HabitSummary {
        habit_id: habit.id,
        habit_name: habit.name.clone(),
        current_streak: current_streak(executions, today),
        longest_streak: longest_streak(&ascending),
        success_percentage: completion_rate(executions) * 100.0,
        improving_trend: is_improving_trend(&ascending),
        total_executions: executions.len(),
        completed_executions: completed,
    }
}
