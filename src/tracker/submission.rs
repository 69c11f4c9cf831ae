//! Grievance submission (write path).
//!
//! Unlike reads, every failure here is returned to the caller so the
//! submission screen can show it and let the user try again.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Deserialize;

use crate::error::GrievanceError;
use crate::storage::models::{status, GrievanceRecord, NewGrievance, Priority, TimelineEntry};
use crate::storage::store::{GrievanceStore, Identity, IdentityProvider};

use super::context::RequestContext;

pub const SUBMITTED_DESCRIPTION: &str = "Grievance submitted successfully";

/// User input from the submission form.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GrievanceDraft {
    pub title: String,
    pub category: String,
    pub description: String,
    #[serde(default)]
    pub priority: Option<Priority>,
}

/// Validate a draft and build the insert payload for `identity`.
pub fn build_new_grievance(
    identity: &Identity,
    draft: &GrievanceDraft,
    now: DateTime<Utc>,
) -> Result<NewGrievance, GrievanceError> {
    let title = required("title", &draft.title)?;
    let category = required("category", &draft.category)?;
    let description = required("description", &draft.description)?;

    Ok(NewGrievance {
        user_id: identity.user_id.clone(),
        title,
        category,
        priority: draft.priority.unwrap_or_default(),
        description,
        status: status::SUBMITTED.to_string(),
        timeline_entries: vec![TimelineEntry {
            status: status::SUBMITTED.to_string(),
            description: SUBMITTED_DESCRIPTION.to_string(),
            completed: true,
            created_at: now.to_rfc3339_opts(SecondsFormat::Secs, true),
        }],
    })
}

/// Submit a grievance on behalf of the current identity.
pub fn submit_grievance<I, S>(
    identity: &I,
    store: &S,
    draft: &GrievanceDraft,
    now: DateTime<Utc>,
) -> Result<GrievanceRecord, GrievanceError>
where
    I: IdentityProvider + ?Sized,
    S: GrievanceStore + ?Sized,
{
    let ctx = RequestContext::new("submit", now);

    let identity = match identity.current_identity() {
        Some(identity) => identity,
        None => {
            log::warn!("{} GRIEVANCE_SUBMIT_REJECTED reason=not_authenticated", ctx.log_context());
            return Err(GrievanceError::NotAuthenticated);
        }
    };
    let log_ctx = ctx.user_context(&identity.user_id);

    let new_grievance = build_new_grievance(&identity, draft, now).map_err(|e| {
        log::info!("{} GRIEVANCE_SUBMIT_INVALID error={}", log_ctx, e);
        e
    })?;

    match store.insert_grievance(&new_grievance) {
        Ok(record) => {
            crate::log_info!(
                log_ctx,
                "GRIEVANCE_SUBMITTED",
                id = record.id,
                category = record.category,
                priority = new_grievance.priority,
            );
            Ok(record)
        }
        Err(e) => {
            crate::log_error!(log_ctx, "GRIEVANCE_SUBMIT_FAILED", error = e.to_string());
            Err(GrievanceError::WriteFailure(e))
        }
    }
}

fn required(field: &'static str, value: &str) -> Result<String, GrievanceError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(GrievanceError::Validation { field });
    }
    Ok(trimmed.to_string())
}
