//! Pluggable authentication.
//!
//! Accounts are injected (or loaded from a JSON file) instead of being
//! embedded in source. Passwords are held only as SHA-256 hex digests.

use std::fs;
use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::AuthError;
use crate::storage::store::Identity;

lazy_static! {
    static ref EMAIL_PATTERN: Regex =
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap();
}

/// Login form input.
#[derive(Debug, Clone)]
pub struct Credential {
    pub email: String,
    pub password: String,
}

impl Credential {
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: email.to_string(),
            password: password.to_string(),
        }
    }
}

/// A known account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub user_id: String,
    pub email: String,
    pub name: String,
    pub password_sha256: String,
}

/// Turns a credential into an identity or rejects it.
pub trait Authenticator {
    fn authenticate(&self, credential: &Credential) -> Result<Identity, AuthError>;
}

/// Authenticator over a fixed, injected account list.
#[derive(Debug, Clone, Default)]
pub struct StaticAuthenticator {
    accounts: Vec<Account>,
}

impl StaticAuthenticator {
    pub fn new(accounts: Vec<Account>) -> Self {
        Self { accounts }
    }

    /// Load accounts from a JSON array.
    pub fn from_json(json: &str) -> Result<Self, AuthError> {
        let accounts: Vec<Account> = serde_json::from_str(json)?;
        log::info!("AUTH_ACCOUNTS_LOADED count={}", accounts.len());
        Ok(Self::new(accounts))
    }

    pub fn from_path(path: &Path) -> Result<Self, AuthError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }
}

impl Authenticator for StaticAuthenticator {
    fn authenticate(&self, credential: &Credential) -> Result<Identity, AuthError> {
        let email = credential.email.trim();
        if !is_valid_email(email) {
            return Err(AuthError::InvalidEmail(email.to_string()));
        }

        let digest = hash_password(&credential.password);
        let account = self
            .accounts
            .iter()
            .find(|a| a.email.eq_ignore_ascii_case(email) && a.password_sha256 == digest);

        match account {
            Some(account) => {
                log::info!("AUTH_ACCEPTED user_id={}", account.user_id);
                Ok(Identity {
                    user_id: account.user_id.clone(),
                    email: Some(account.email.clone()),
                    display_name: Some(account.name.clone()),
                })
            }
            None => {
                log::warn!("AUTH_REJECTED email={}", email);
                Err(AuthError::Rejected)
            }
        }
    }
}

/// SHA-256 hex digest of a password.
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}
