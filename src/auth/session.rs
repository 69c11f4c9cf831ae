//! Login session over device-local key-value storage.
//!
//! Persists the same flags the app screens read: `isLoggedIn`,
//! `userName` and `userId`.

use parking_lot::RwLock;

use crate::error::AuthError;
use crate::storage::store::{Identity, IdentityProvider, KeyValueStore};

use super::provider::{Authenticator, Credential};

pub const KEY_LOGGED_IN: &str = "isLoggedIn";
pub const KEY_USER_NAME: &str = "userName";
pub const KEY_USER_ID: &str = "userId";

/// Current login state; also the identity source for grievance reads.
#[derive(Debug)]
pub struct Session<K> {
    store: K,
    current: RwLock<Option<Identity>>,
}

impl<K: KeyValueStore> Session<K> {
    pub fn new(store: K) -> Self {
        Self {
            store,
            current: RwLock::new(None),
        }
    }

    /// Rebuild the session from flags persisted by an earlier login.
    pub fn restore(store: K) -> Self {
        let restored = match (store.get(KEY_LOGGED_IN).as_deref(), store.get(KEY_USER_ID)) {
            (Some("true"), Some(user_id)) => Some(Identity {
                user_id,
                email: None,
                display_name: store.get(KEY_USER_NAME),
            }),
            _ => None,
        };

        log::debug!("SESSION_RESTORE logged_in={}", restored.is_some());

        Self {
            store,
            current: RwLock::new(restored),
        }
    }

    pub fn login<A: Authenticator + ?Sized>(
        &self,
        authenticator: &A,
        credential: &Credential,
    ) -> Result<Identity, AuthError> {
        let identity = authenticator.authenticate(credential)?;

        self.store.set(KEY_LOGGED_IN, "true");
        self.store.set(KEY_USER_ID, &identity.user_id);
        match &identity.display_name {
            Some(name) => self.store.set(KEY_USER_NAME, name),
            // Never leave a previous user's name behind
            None => self.store.remove(KEY_USER_NAME),
        }

        *self.current.write() = Some(identity.clone());
        log::info!("SESSION_LOGIN user_id={}", identity.user_id);
        Ok(identity)
    }

    pub fn logout(&self) {
        self.store.remove(KEY_LOGGED_IN);
        self.store.remove(KEY_USER_ID);
        self.store.remove(KEY_USER_NAME);

        if let Some(identity) = self.current.write().take() {
            log::info!("SESSION_LOGOUT user_id={}", identity.user_id);
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.current.read().is_some()
    }

    /// Cached display name for greeting screens.
    pub fn display_name(&self) -> Option<String> {
        self.store.get(KEY_USER_NAME)
    }
}

impl<K: KeyValueStore> IdentityProvider for Session<K> {
    fn current_identity(&self) -> Option<Identity> {
        self.current.read().clone()
    }
}
