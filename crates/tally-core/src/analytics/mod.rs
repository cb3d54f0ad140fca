//! Execution Analytics Engine
//!
//! Pure, side-effect-free computations over a habit's recorded execution
//! history:
//!
//! - **Streaks** - current (calendar-gap-aware) and longest (entry-order) runs
//! - **Metrics** - success percentage, completion rate, improving-trend check
//! - **Progress reports** - serializable summary over a date range
//! - **Suggestions** - rule-based improvement text from templates
//!
//! Every operation takes its full input as arguments and returns a value; no
//! hidden state, no I/O, no mutation of the supplied lists. "Today" is always
//! an injected parameter so tests can supply fixed dates.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tally_core::analytics;
//!
//! let streak = analytics::current_streak(&executions, today);
//! let report = analytics::generate_progress_report(&habit, &executions, start, end, today)?;
//! ```

pub mod metrics;
pub mod report;
pub mod streaks;
pub mod suggestions;
pub mod summary;

pub use metrics::{completion_rate, is_improving_trend, success_percentage};
pub use report::{generate_progress_report, ProgressReport};
pub use streaks::{current_streak, longest_streak};
pub use suggestions::{generate_suggestions, PerformanceTier};
pub use summary::{summarize, HabitSummary};
