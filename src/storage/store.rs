//! Collaborator traits for identity, grievance storage and local
//! key-value storage.
//!
//! The host application implements these against its real backend; the
//! crate only ever calls them once per operation.

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

use super::models::{GrievanceRecord, NewGrievance};

/// The authenticated principal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub user_id: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
}

impl Identity {
    pub fn new(user_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            email: None,
            display_name: None,
        }
    }
}

/// Source of the current authenticated identity.
pub trait IdentityProvider {
    fn current_identity(&self) -> Option<Identity>;
}

/// Query/insert access to persisted grievances.
pub trait GrievanceStore {
    /// All grievances owned by `owner_id`, newest first, timelines joined.
    fn query_grievances(&self, owner_id: &str) -> Result<Vec<GrievanceRecord>, StoreError>;

    /// Persist a new grievance and return it as stored.
    fn insert_grievance(&self, grievance: &NewGrievance) -> Result<GrievanceRecord, StoreError>;
}

/// Device-local string key-value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

impl<T: IdentityProvider + ?Sized> IdentityProvider for &T {
    fn current_identity(&self) -> Option<Identity> {
        (**self).current_identity()
    }
}

impl<T: GrievanceStore + ?Sized> GrievanceStore for &T {
    fn query_grievances(&self, owner_id: &str) -> Result<Vec<GrievanceRecord>, StoreError> {
        (**self).query_grievances(owner_id)
    }

    fn insert_grievance(&self, grievance: &NewGrievance) -> Result<GrievanceRecord, StoreError> {
        (**self).insert_grievance(grievance)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}

/// Parse a raw backend response body (JSON array of rows) into records.
///
/// Row order is preserved as returned by the backend.
pub fn parse_grievance_rows(body: &str) -> Result<Vec<GrievanceRecord>, StoreError> {
    Ok(serde_json::from_str::<Vec<GrievanceRecord>>(body)?)
}
