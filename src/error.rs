//! Error taxonomy.
//!
//! Read paths degrade to empty or fallback values and only log these;
//! the write path and authentication surface them to the caller.

use thiserror::Error;

/// Errors reported by a grievance store collaborator.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("backend error: {0}")]
    Backend(String),
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors surfaced by grievance operations.
#[derive(Error, Debug)]
pub enum GrievanceError {
    #[error("no authenticated identity")]
    NotAuthenticated,
    #[error("fetch failed: {0}")]
    FetchFailure(#[source] StoreError),
    #[error("write failed: {0}")]
    WriteFailure(#[source] StoreError),
    #[error("{field} must not be empty")]
    Validation { field: &'static str },
}

/// Errors reported by a routing collaborator.
#[derive(Error, Debug)]
pub enum RouteError {
    #[error("route request failed: {0}")]
    Request(String),
    #[error("route response parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("routing service returned no route (code={0})")]
    NoRoute(String),
}

/// Errors from the authentication provider.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("invalid email or password")]
    Rejected,
    #[error("malformed email address: {0}")]
    InvalidEmail(String),
    #[error("account list parse error: {0}")]
    Accounts(#[from] serde_json::Error),
    #[error("account list read error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from environment configuration.
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("missing required env var: {0}")]
    Missing(String),
    #[error("invalid {key}: {reason}")]
    Invalid { key: String, reason: String },
}
