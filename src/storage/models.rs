//! Grievance models as persisted by the backend.
//!
//! Status and priority stay string-typed on read: the backend does not
//! enforce a closed set, and the read side passes them through untouched.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Lifecycle status labels used by the backend.
pub mod status {
    pub const SUBMITTED: &str = "Submitted";
    pub const UNDER_REVIEW: &str = "Under Review";
    pub const IN_PROGRESS: &str = "In Progress";
    pub const RESOLVED: &str = "Resolved";
}

/// A grievance row with its joined timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrievanceRecord {
    #[serde(deserialize_with = "opaque_id")]
    pub id: String,
    #[serde(default)]
    pub user_id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub category: String,
    pub status: String,
    #[serde(default)]
    pub priority: String,
    pub created_at: String,
    #[serde(default)]
    pub description: String,

    // Ordered oldest lifecycle step first
    #[serde(default, alias = "grievance_timeline", deserialize_with = "null_as_empty")]
    pub timeline_entries: Vec<TimelineEntry>,
}

/// One lifecycle step of a grievance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub status: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
    pub created_at: String,
}

/// Grievance priority as chosen on submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Insert payload for a new grievance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewGrievance {
    pub user_id: String,
    pub title: String,
    pub category: String,
    pub priority: Priority,
    pub description: String,
    pub status: String,
    pub timeline_entries: Vec<TimelineEntry>,
}

/// Accept string or numeric ids; the backend may use either.
fn opaque_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number id, got {}",
            other
        ))),
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<TimelineEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<TimelineEntry>>::deserialize(deserializer)?.unwrap_or_default())
}
