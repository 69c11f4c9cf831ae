//! Environment configuration.
//!
//! Reads `ECOYATRA_*` variables (with optional `.env` layers) into one
//! `AppConfig`. The backend endpoint and key exist only here and are
//! handed to whatever needs them.

use std::env;
use std::path::PathBuf;

use crate::error::ConfigError;

pub const DEFAULT_ROUTING_URL: &str = "https://router.project-osrm.org";

/// The single backend the host talks to.
#[derive(Debug, Clone, PartialEq)]
pub struct BackendConfig {
    pub url: String,
    pub anon_key: String,
}

impl BackendConfig {
    pub fn new(url: &str, anon_key: &str) -> Self {
        Self {
            url: url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
        }
    }

    /// REST URL for a request path built by `storage::queries`.
    pub fn rest_url(&self, request_path: &str) -> String {
        format!("{}/rest/v1/{}", self.url, request_path)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub backend: BackendConfig,
    pub routing_url: String,
    pub accounts_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        load_dotenv_layers();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let backend_url = read_var(&lookup, "ECOYATRA_BACKEND_URL")?;
        if !backend_url.starts_with("http://") && !backend_url.starts_with("https://") {
            return Err(ConfigError::Invalid {
                key: "ECOYATRA_BACKEND_URL".to_string(),
                reason: format!("not an http(s) URL: {backend_url}"),
            });
        }

        let config = Self {
            backend: BackendConfig::new(
                &backend_url,
                &read_var(&lookup, "ECOYATRA_BACKEND_ANON_KEY")?,
            ),
            routing_url: lookup("ECOYATRA_ROUTING_URL")
                .unwrap_or_else(|| DEFAULT_ROUTING_URL.to_string()),
            accounts_path: lookup("ECOYATRA_ACCOUNTS_PATH").map(PathBuf::from),
        };

        log::info!(
            "CONFIG_LOADED backend={} routing={} accounts_file={}",
            config.backend.url,
            config.routing_url,
            config.accounts_path.is_some()
        );
        Ok(config)
    }
}

fn read_var<F>(lookup: &F, key: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ConfigError::Missing(key.to_string())),
    }
}

fn load_dotenv_layers() {
    for path in [".env", "../.env"] {
        let _ = dotenvy::from_path(path);
    }
}
