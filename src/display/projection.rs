//! Display projection of persisted grievances.
//!
//! Pure mapping from `GrievanceRecord` to the shape the tracking screen
//! renders. Nothing here is written back.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::logging::structured::LogContext;
use crate::storage::models::{GrievanceRecord, TimelineEntry};

use super::relative_time::{
    format_relative_date, format_timeline_date, format_timeline_time, parse_timestamp,
};

/// A grievance ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayGrievance {
    pub id: String,
    pub title: String,
    pub category: String,
    pub status: String,
    pub priority: String,
    pub date: String,
    pub description: String,
    pub timeline: Vec<DisplayTimelineEntry>,
}

/// A timeline step ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayTimelineEntry {
    pub status: String,
    pub date: String,
    pub time: String,
    pub description: String,
    pub completed: bool,
}

/// Project one record. Timeline order is kept exactly as stored.
pub fn project_grievance(
    record: &GrievanceRecord,
    now: DateTime<Utc>,
    ctx: &LogContext,
) -> DisplayGrievance {
    let date = match parse_timestamp(&record.created_at) {
        Some(created_at) => format_relative_date(created_at, now),
        None => {
            log::warn!(
                "{} TIMESTAMP_UNPARSEABLE grievance_id={} created_at={:?}",
                ctx,
                record.id,
                record.created_at
            );
            record.created_at.clone()
        }
    };

    DisplayGrievance {
        id: record.id.clone(),
        title: record.title.clone(),
        category: record.category.clone(),
        status: record.status.clone(),
        priority: record.priority.clone(),
        date,
        description: record.description.clone(),
        timeline: record
            .timeline_entries
            .iter()
            .map(|entry| project_timeline_entry(entry, ctx))
            .collect(),
    }
}

fn project_timeline_entry(entry: &TimelineEntry, ctx: &LogContext) -> DisplayTimelineEntry {
    let (date, time) = match parse_timestamp(&entry.created_at) {
        Some(at) => (format_timeline_date(at), format_timeline_time(at)),
        None => {
            log::warn!(
                "{} TIMELINE_TIMESTAMP_UNPARSEABLE status={:?} created_at={:?}",
                ctx,
                entry.status,
                entry.created_at
            );
            (entry.created_at.clone(), String::new())
        }
    };

    DisplayTimelineEntry {
        status: entry.status.clone(),
        date,
        time,
        description: entry.description.clone(),
        completed: entry.completed,
    }
}
