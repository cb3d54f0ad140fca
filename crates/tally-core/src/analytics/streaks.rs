//! Streak computations
//!
//! Two deliberately different notions of "streak" live here:
//!
//! - [`current_streak`] walks backwards from a reference date and is
//!   calendar-aware: a day with no record breaks the streak.
//! - [`longest_streak`] counts consecutive completed *entries* in the order
//!   the caller supplies and never looks at dates.
//!
//! Downstream callers depend on this asymmetry; do not unify them.

use chrono::{Duration, NaiveDate};

use crate::models::Execution;

/// Count consecutive completed days ending at or before `today`.
///
/// The input list does not need to be sorted; a copy is sorted descending by
/// date (the original list is never reordered). Walking back one day at a
/// time from `today`:
///
/// - a completed record for the expected date extends the streak,
/// - a not-completed record for the expected date ends it,
/// - a day with no record at all ends it.
///
/// Returns 0 when there is no completed record for `today` itself. When
/// duplicate records exist for the expected date, the first one in the
/// sorted copy decides (the sort is stable, so first-inserted wins).
pub fn current_streak(executions: &[Execution], today: NaiveDate) -> u32 {
    let mut sorted: Vec<&Execution> = executions.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    let mut streak = 0;
    let mut expected = today;

    loop {
        match sorted.iter().find(|e| e.date == expected) {
            Some(e) if e.completed => {
                streak += 1;
                expected -= Duration::days(1);
            }
            // A real not-completed mark and a missing day both end the streak
            _ => break,
        }
    }

    streak
}

/// Longest run of consecutive completed entries in the given order.
///
/// PRECONDITION: the caller supplies the history sorted ascending by date.
/// This function does not re-sort and does not detect calendar gaps: two
/// completed entries a week apart still count as consecutive. That differs
/// from [`current_streak`] on purpose (see module docs).
pub fn longest_streak(executions: &[Execution]) -> u32 {
    let mut longest = 0;
    let mut run = 0;

    for execution in executions {
        if execution.completed {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 0;
        }
    }

    longest
}

#[cfg(test)]
mod tests {
    use super::*;

    fn execution(id: i64, date: NaiveDate, completed: bool) -> Execution {
        Execution {
            id,
            habit_id: 1,
            date,
            completed,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_current_streak_empty_history() {
        assert_eq!(current_streak(&[], date(2023, 6, 15)), 0);
    }

    #[test]
    fn test_current_streak_stops_at_not_completed() {
        let today = date(2023, 6, 15);
        let executions = vec![
            execution(1, today, true),
            execution(2, today - Duration::days(1), true),
            execution(3, today - Duration::days(2), false),
        ];
        assert_eq!(current_streak(&executions, today), 2);
    }

    #[test]
    fn test_current_streak_missing_day_breaks_streak() {
        let today = date(2023, 6, 15);
        // No record for today-1; the completed run further back must not count
        let executions = vec![
            execution(1, today, true),
            execution(2, today - Duration::days(2), true),
            execution(3, today - Duration::days(3), true),
        ];
        assert_eq!(current_streak(&executions, today), 1);
    }

    #[test]
    fn test_current_streak_zero_when_today_not_completed() {
        let today = date(2023, 6, 15);
        let executions = vec![
            execution(1, today, false),
            execution(2, today - Duration::days(1), true),
        ];
        assert_eq!(current_streak(&executions, today), 0);
    }

    #[test]
    fn test_current_streak_zero_when_today_missing() {
        let today = date(2023, 6, 15);
        let executions = vec![execution(1, today - Duration::days(1), true)];
        assert_eq!(current_streak(&executions, today), 0);
    }

    #[test]
    fn test_current_streak_input_unsorted() {
        let today = date(2023, 6, 15);
        let executions = vec![
            execution(1, today - Duration::days(1), true),
            execution(2, today, true),
            execution(3, today - Duration::days(2), true),
        ];
        assert_eq!(current_streak(&executions, today), 3);
    }

    #[test]
    fn test_current_streak_duplicate_date_first_inserted_wins() {
        let today = date(2023, 6, 15);
        let executions = vec![
            execution(1, today, true),
            execution(2, today, false), // later duplicate does not override
        ];
        assert_eq!(current_streak(&executions, today), 1);
    }

    #[test]
    fn test_current_streak_does_not_reorder_input() {
        let today = date(2023, 6, 15);
        let executions = vec![
            execution(1, today - Duration::days(1), true),
            execution(2, today, true),
        ];
        let before: Vec<i64> = executions.iter().map(|e| e.id).collect();
        current_streak(&executions, today);
        let after: Vec<i64> = executions.iter().map(|e| e.id).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_longest_streak_basic() {
        let start = date(2023, 1, 1);
        let flags = [true, true, true, false, true, true];
        let executions: Vec<Execution> = flags
            .iter()
            .enumerate()
            .map(|(i, &c)| execution(i as i64, start + Duration::days(i as i64), c))
            .collect();
        assert_eq!(longest_streak(&executions), 3);
    }

    #[test]
    fn test_longest_streak_empty() {
        assert_eq!(longest_streak(&[]), 0);
    }

    #[test]
    fn test_longest_streak_ignores_calendar_gaps() {
        // Entries a week apart still count as one run; only a not-completed
        // entry resets the counter.
        let executions = vec![
            execution(1, date(2023, 1, 1), true),
            execution(2, date(2023, 1, 8), true),
            execution(3, date(2023, 1, 15), true),
        ];
        assert_eq!(longest_streak(&executions), 3);
    }

    #[test]
    fn test_streak_semantics_differ_on_gapped_history() {
        // Same gapped history: longest_streak sees one run of 3,
        // current_streak stops at the gap.
        let today = date(2023, 1, 15);
        let executions = vec![
            execution(1, date(2023, 1, 1), true),
            execution(2, date(2023, 1, 8), true),
            execution(3, today, true),
        ];
        assert_eq!(longest_streak(&executions), 3);
        assert_eq!(current_streak(&executions, today), 1);
    }
}
