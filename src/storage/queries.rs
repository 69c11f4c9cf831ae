//! Backend query builders.
//!
//! Generates PostgREST-style request descriptors for grievance storage.
//! Actual execution is handled by the host application.

use serde_json::{json, Value};

use super::models::NewGrievance;

pub const GRIEVANCES_TABLE: &str = "grievances";
pub const TIMELINE_TABLE: &str = "grievance_timeline";

/// A read request against one backend table.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectQuery {
    pub table: &'static str,
    pub select: &'static str,
    pub filters: Vec<(String, String)>,
    pub order: Option<&'static str>,
}

impl SelectQuery {
    /// Render as a REST path plus query string, e.g.
    /// `grievances?select=...&user_id=eq.abc&order=created_at.desc`.
    pub fn to_request_path(&self) -> String {
        let mut parts = vec![format!("select={}", urlencoding::encode(self.select))];
        for (column, condition) in &self.filters {
            parts.push(format!("{}={}", column, urlencoding::encode(condition)));
        }
        if let Some(order) = self.order {
            parts.push(format!("order={}", order));
        }
        format!("{}?{}", self.table, parts.join("&"))
    }
}

/// Get the list of columns written on grievance insert.
pub fn get_grievance_columns() -> Vec<&'static str> {
    vec![
        "user_id",
        "title",
        "category",
        "priority",
        "description",
        "status",
    ]
}

/// Build the select for one owner's grievances, newest first, with the
/// timeline joined in oldest step first.
pub fn build_grievance_select(owner_id: &str) -> SelectQuery {
    SelectQuery {
        table: GRIEVANCES_TABLE,
        select: "*,grievance_timeline(*)",
        filters: vec![
            ("user_id".to_string(), format!("eq.{}", owner_id)),
            // Embedded rows carry no order unless asked for
            (
                format!("{}.order", TIMELINE_TABLE),
                "created_at.asc".to_string(),
            ),
        ],
        order: Some("created_at.desc"),
    }
}

/// Build the grievance row body for insert (timeline excluded).
pub fn build_grievance_insert(grievance: &NewGrievance) -> Value {
    json!({
        "user_id": grievance.user_id,
        "title": grievance.title,
        "category": grievance.category,
        "priority": grievance.priority.as_str(),
        "description": grievance.description,
        "status": grievance.status,
    })
}

/// Build the timeline row bodies for a freshly inserted grievance.
pub fn build_timeline_insert(grievance_id: &str, grievance: &NewGrievance) -> Vec<Value> {
    grievance
        .timeline_entries
        .iter()
        .map(|entry| {
            json!({
                "grievance_id": grievance_id,
                "status": entry.status,
                "description": entry.description,
                "completed": entry.completed,
                "created_at": entry.created_at,
            })
        })
        .collect()
}
