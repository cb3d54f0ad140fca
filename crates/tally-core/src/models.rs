//! Domain models for Tally

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How often a habit is meant to be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
}

impl Frequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
        }
    }
}

impl std::str::FromStr for Frequency {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            _ => Err(format!("Unknown frequency: {}", s)),
        }
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A tracked habit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habit {
    pub id: i64,
    /// The user who owns this habit
    pub user_id: i64,
    pub name: String,
    /// Free text, may be empty
    pub description: String,
    pub frequency: Frequency,
    /// Immutable after creation
    pub created_on: NaiveDate,
    pub active: bool,
}

/// A single progress mark for a habit on a calendar date
///
/// The source system allows multiple executions for the same date; lists of
/// executions are insertion-ordered, not date-sorted, unless an operation
/// says otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Execution {
    pub id: i64,
    pub habit_id: i64,
    pub date: NaiveDate,
    pub completed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_frequency_round_trip() {
        assert_eq!(Frequency::Daily.as_str(), "daily");
        assert_eq!(Frequency::from_str("WEEKLY").unwrap(), Frequency::Weekly);
        assert!(Frequency::from_str("fortnightly").is_err());
    }

    #[test]
    fn test_frequency_serde_rename() {
        let json = serde_json::to_string(&Frequency::Weekly).unwrap();
        assert_eq!(json, "\"weekly\"");
    }
}
