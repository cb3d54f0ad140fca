//! Rule-based improvement suggestions
//!
//! Generates natural-language suggestions from fixed template tables keyed by
//! performance tier, habit frequency, description keywords, and habit age.
//! The exact strings and their order are a compatibility contract for callers
//! that display or test the list, so every template lives in the tables below
//! rather than inline in the logic.

use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

use crate::models::{Execution, Frequency, Habit};

use super::metrics::completion_rate;

/// Completion-rate tier driving the first block of suggestions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PerformanceTier {
    /// Completion rate below 50%
    Low,
    /// Completion rate in [50%, 80%)
    Medium,
    /// Completion rate of 80% or above
    High,
}

impl PerformanceTier {
    /// Classify a completion rate in `[0.0, 1.0]`
    pub fn from_completion_rate(rate: f64) -> Self {
        if rate < 0.5 {
            Self::Low
        } else if rate < 0.8 {
            Self::Medium
        } else {
            Self::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl std::fmt::Display for PerformanceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Template tables. `{habit}` is replaced with the habit name.
// ---------------------------------------------------------------------------

const HEADER: &str = "Suggestions for improving your '{habit}' habit:";

const LOW_TIER_LINES: [&str; 3] = [
    "Try breaking '{habit}' into smaller, more manageable steps.",
    "Set a daily reminder so '{habit}' doesn't slip your mind.",
    "Consider lowering the difficulty of '{habit}' until it feels achievable.",
];

const MEDIUM_TIER_LINES: [&str; 3] = [
    "You're making good progress with '{habit}'! Look for what gets in the way on the days you miss.",
    "Pair '{habit}' with something you already do consistently.",
    "Reward yourself after completing '{habit}' to reinforce the routine.",
];

const HIGH_TIER_LINES: [&str; 3] = [
    "Great job maintaining '{habit}'! Consider raising the challenge to keep growing.",
    "Share your success with '{habit}' with a friend to stay accountable.",
    "Reflect on the benefits '{habit}' has brought you so far.",
];

// Frequency lines: daily habits get a tier-dependent line, weekly habits get
// one scheduling line regardless of tier.
const DAILY_ROUTINE_LINE: &str =
    "Try linking '{habit}' to an existing daily routine, like right after brushing your teeth.";
const DAILY_EXPAND_LINE: &str =
    "Since you're doing so well, consider adding a related habit alongside '{habit}'.";
const WEEKLY_SCHEDULE_LINE: &str =
    "Schedule a specific day and time for '{habit}' to make it a fixed part of your week.";

// Keyword lines: each keyword match in the description contributes its pair,
// duplicates included, in order of appearance.
const FITNESS_LINES: [&str; 2] = [
    "Vary your exercise routine now and then to keep it interesting.",
    "Track your workout metrics (reps, distance, time) to make progress visible.",
];
const LEARNING_LINES: [&str; 2] = [
    "Try the Pomodoro technique: 25 minutes of focused work, then a 5-minute break.",
    "Keep a short log of what you read or study to reinforce what you've learned.",
];

const ESTABLISHED_HABIT_LINE: &str =
    "You've been working on this habit for over a month. Take a moment to reflect on your progress and adjust your approach if needed.";
const NEW_HABIT_LINE: &str =
    "This habit is still relatively new. Be patient with yourself and focus on consistency.";

fn render(template: &str, habit_name: &str) -> String {
    template.replace("{habit}", habit_name)
}

fn keyword_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\b(exercise|workout|read|study)\b").expect("keyword pattern is valid")
    })
}

/// Generate the ordered suggestion list for a habit.
///
/// Output order: header, performance-tier lines, frequency line, keyword
/// lines (in order of appearance in the description), habit-age line.
/// `today` drives the age check and is injected so tests can fix it. An
/// empty history counts as a completion rate of 0 (Low tier) rather than
/// faulting on the division.
pub fn generate_suggestions(
    habit: &Habit,
    executions: &[Execution],
    today: NaiveDate,
) -> Vec<String> {
    let rate = completion_rate(executions);
    let tier = PerformanceTier::from_completion_rate(rate);

    let mut suggestions = vec![render(HEADER, &habit.name)];

    let tier_lines = match tier {
        PerformanceTier::Low => &LOW_TIER_LINES,
        PerformanceTier::Medium => &MEDIUM_TIER_LINES,
        PerformanceTier::High => &HIGH_TIER_LINES,
    };
    suggestions.extend(tier_lines.iter().map(|t| render(t, &habit.name)));

    let frequency_line = match (habit.frequency, tier) {
        (Frequency::Daily, PerformanceTier::High) => DAILY_EXPAND_LINE,
        (Frequency::Daily, _) => DAILY_ROUTINE_LINE,
        (Frequency::Weekly, _) => WEEKLY_SCHEDULE_LINE,
    };
    suggestions.push(render(frequency_line, &habit.name));

    let description = habit.description.to_lowercase();
    for keyword in keyword_regex().find_iter(&description) {
        let lines = match keyword.as_str() {
            "exercise" | "workout" => &FITNESS_LINES,
            _ => &LEARNING_LINES, // "read" | "study"
        };
        suggestions.extend(lines.iter().map(|t| render(t, &habit.name)));
    }

    let age_days = (today - habit.created_on).num_days();
    suggestions.push(
        if age_days > 30 {
            ESTABLISHED_HABIT_LINE
        } else {
            NEW_HABIT_LINE
        }
        .to_string(),
    );

    tracing::debug!(
        habit = %habit.name,
        tier = %tier,
        rate,
        count = suggestions.len(),
        "Suggestions generated"
    );

    suggestions
}
