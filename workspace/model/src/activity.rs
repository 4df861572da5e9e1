use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of an activity row.
///
/// Statuses outside the four known ones are kept verbatim in `Other` so the
/// table can still show them with a neutral badge.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum ActivityStatus {
    Active,
    Completed,
    Pending,
    Processing,
    Other(String),
}

impl ActivityStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ActivityStatus::Active => "active",
            ActivityStatus::Completed => "completed",
            ActivityStatus::Pending => "pending",
            ActivityStatus::Processing => "processing",
            ActivityStatus::Other(raw) => raw,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, ActivityStatus::Other(_))
    }
}

impl From<&str> for ActivityStatus {
    fn from(raw: &str) -> Self {
        match raw {
            "active" => ActivityStatus::Active,
            "completed" => ActivityStatus::Completed,
            "pending" => ActivityStatus::Pending,
            "processing" => ActivityStatus::Processing,
            other => ActivityStatus::Other(other.to_string()),
        }
    }
}

impl From<String> for ActivityStatus {
    fn from(raw: String) -> Self {
        ActivityStatus::from(raw.as_str())
    }
}

impl From<ActivityStatus> for String {
    fn from(status: ActivityStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for ActivityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One transaction-like entry of the activity feed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityRow {
    pub id: u32,
    /// ISO date, `YYYY-MM-DD`.
    pub date: String,
    pub activity: String,
    pub user: String,
    /// Signed amount; zero means the activity carried no value.
    pub value: f64,
    pub status: ActivityStatus,
}
