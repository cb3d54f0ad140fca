//! Tally Core Library
//!
//! The habit execution analytics engine for Tally:
//! - Domain models for habits and their execution history
//! - Streak computations (current and longest, with distinct semantics)
//! - Success rate and improving-trend metrics
//! - Progress report assembly over a date range
//! - Rule-based improvement suggestions from template tables
//!
//! The engine is pure: it is handed a habit and its already-loaded execution
//! list, never touches storage or the clock, and never mutates its inputs.
//! Loading data and resolving habit references are the surrounding
//! application's concerns.

pub mod analytics;
pub mod error;
pub mod models;

pub use analytics::{
    completion_rate, current_streak, generate_progress_report, generate_suggestions,
    is_improving_trend, longest_streak, success_percentage, summarize, HabitSummary,
    PerformanceTier, ProgressReport,
};
pub use error::{Error, Result};
pub use models::{Execution, Frequency, Habit};
