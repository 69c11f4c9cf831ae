//! In-process collaborator implementations.
//!
//! Used by tests and by hosts running without a backend connection.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::Utc;
use parking_lot::{Mutex, RwLock};
use uuid::Uuid;

use crate::display::relative_time::parse_timestamp;
use crate::error::StoreError;

use super::models::{GrievanceRecord, NewGrievance};
use super::store::{GrievanceStore, Identity, IdentityProvider, KeyValueStore};

impl IdentityProvider for Option<Identity> {
    fn current_identity(&self) -> Option<Identity> {
        self.clone()
    }
}

/// Grievance store backed by a vector of rows.
#[derive(Debug, Default)]
pub struct MemoryStore {
    rows: RwLock<Vec<GrievanceRecord>>,
    failure: Mutex<Option<String>>,
    queries: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<GrievanceRecord>) -> Self {
        Self {
            rows: RwLock::new(records),
            ..Self::default()
        }
    }

    /// Make every subsequent call fail with `message`; `None` restores service.
    pub fn set_failure(&self, message: Option<&str>) {
        *self.failure.lock() = message.map(|m| m.to_string());
    }

    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.rows.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.read().is_empty()
    }

    fn check_failure(&self) -> Result<(), StoreError> {
        match self.failure.lock().as_ref() {
            Some(message) => Err(StoreError::Backend(message.clone())),
            None => Ok(()),
        }
    }
}

impl GrievanceStore for MemoryStore {
    fn query_grievances(&self, owner_id: &str) -> Result<Vec<GrievanceRecord>, StoreError> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;

        let mut owned: Vec<GrievanceRecord> = self
            .rows
            .read()
            .iter()
            .filter(|r| r.user_id.as_deref() == Some(owner_id))
            .cloned()
            .collect();

        // created_at.desc; unparseable timestamps sort last
        owned.sort_by(|a, b| {
            let a_ts = parse_timestamp(&a.created_at);
            let b_ts = parse_timestamp(&b.created_at);
            b_ts.cmp(&a_ts)
        });

        Ok(owned)
    }

    fn insert_grievance(&self, grievance: &NewGrievance) -> Result<GrievanceRecord, StoreError> {
        self.check_failure()?;

        let record = GrievanceRecord {
            id: Uuid::new_v4().to_string(),
            user_id: Some(grievance.user_id.clone()),
            title: grievance.title.clone(),
            category: grievance.category.clone(),
            status: grievance.status.clone(),
            priority: grievance.priority.as_str().to_string(),
            created_at: Utc::now().to_rfc3339(),
            description: grievance.description.clone(),
            timeline_entries: grievance.timeline_entries.clone(),
        };

        self.rows.write().push(record.clone());
        log::debug!(
            "MEMORY_STORE_INSERT id={} user_id={}",
            record.id,
            grievance.user_id
        );
        Ok(record)
    }
}

/// Key-value store backed by a hash map.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.lock().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.lock().remove(key);
    }
}
