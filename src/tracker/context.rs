//! Request context management.
//!
//! Provides per-call context for logging and a pinned clock.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::logging::structured::LogContext;

/// Context for one read or write call.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub request_id: String,
    pub now: DateTime<Utc>,
}

impl RequestContext {
    /// `kind` prefixes the id, e.g. `load-1a2b3c4d`.
    pub fn new(kind: &str, now: DateTime<Utc>) -> Self {
        let request_id = format!("{}-{}", kind, &Uuid::new_v4().to_string()[..8]);
        Self { request_id, now }
    }

    pub fn log_context(&self) -> LogContext {
        LogContext::new(&self.request_id)
    }

    pub fn user_context(&self, user_id: &str) -> LogContext {
        self.log_context().with_user(user_id)
    }
}
