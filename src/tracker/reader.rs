//! Grievance read adapter.
//!
//! Fetches the current identity's grievances and projects them for
//! display. Single-shot and best effort: a missing identity or a failed
//! fetch yields an empty list, never an error to the screen.

use chrono::{DateTime, Utc};

use crate::display::projection::{project_grievance, DisplayGrievance};
use crate::error::GrievanceError;
use crate::storage::store::{GrievanceStore, IdentityProvider};

use super::context::RequestContext;

/// Read side of grievance tracking.
#[derive(Debug, Clone)]
pub struct GrievanceReader<I, S> {
    identity: I,
    store: S,
}

impl<I: IdentityProvider, S: GrievanceStore> GrievanceReader<I, S> {
    pub fn new(identity: I, store: S) -> Self {
        Self { identity, store }
    }

    /// Load display grievances, newest first as ordered by the store.
    ///
    /// Failures are logged and degrade to an empty list.
    pub fn load(&self, now: DateTime<Utc>) -> Vec<DisplayGrievance> {
        let ctx = RequestContext::new("load", now);

        match self.try_load(&ctx) {
            Ok(grievances) => grievances,
            Err(GrievanceError::NotAuthenticated) => {
                log::debug!("{} GRIEVANCE_LOAD_SKIPPED reason=not_authenticated", ctx.log_context());
                Vec::new()
            }
            Err(e) => {
                crate::log_warn!(ctx.log_context(), "GRIEVANCE_LOAD_FAILED", error = e.to_string());
                Vec::new()
            }
        }
    }

    /// Like [`load`](Self::load) but reports why nothing was loaded.
    pub fn try_load(&self, ctx: &RequestContext) -> Result<Vec<DisplayGrievance>, GrievanceError> {
        let identity = self
            .identity
            .current_identity()
            .ok_or(GrievanceError::NotAuthenticated)?;
        let log_ctx = ctx.user_context(&identity.user_id);

        log::debug!("{} GRIEVANCE_QUERY_START", log_ctx);

        let records = self
            .store
            .query_grievances(&identity.user_id)
            .map_err(GrievanceError::FetchFailure)?;

        let grievances: Vec<DisplayGrievance> = records
            .iter()
            .map(|record| project_grievance(record, ctx.now, &log_ctx))
            .collect();

        crate::log_info!(log_ctx, "GRIEVANCE_LOAD_COMPLETE", count = grievances.len());

        Ok(grievances)
    }

    pub fn identity(&self) -> &I {
        &self.identity
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
