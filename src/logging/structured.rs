//! Request-scoped log lines.
//!
//! A screen refocus can fire several grievance loads for the same user at
//! once, so every line carries the `load-`/`submit-` request id that issued
//! it and, once the identity is known, the user id. Events are written as
//! `UPPER_SNAKE_EVENT key=value`.

use std::fmt;

/// Prefix for every line logged during one load or submission.
#[derive(Debug, Clone)]
pub struct LogContext {
    pub request_id: String,
    pub user_id: Option<String>,
}

impl LogContext {
    pub fn new(request_id: &str) -> Self {
        Self {
            request_id: request_id.to_string(),
            user_id: None,
        }
    }

    /// Same request, now attributed to `user_id`.
    pub fn with_user(&self, user_id: &str) -> Self {
        Self {
            request_id: self.request_id.clone(),
            user_id: Some(user_id.to_string()),
        }
    }
}

impl fmt::Display for LogContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.user_id {
            Some(uid) => write!(f, "[request={}] [user={}]", self.request_id, uid),
            None => write!(f, "[request={}]", self.request_id),
        }
    }
}

/// `log::info!` with a context prefix and `key = value` fields.
#[macro_export]
macro_rules! log_info {
    ($ctx:expr, $event:expr $(, $key:ident = $value:expr)* $(,)?) => {
        log::info!(
            "{} {} {}",
            $ctx,
            $event,
            format_args!(concat!($(stringify!($key), "={:?} "),*), $($value),*)
        );
    };
}

/// As [`log_info!`], at warn level.
#[macro_export]
macro_rules! log_warn {
    ($ctx:expr, $event:expr $(, $key:ident = $value:expr)* $(,)?) => {
        log::warn!(
            "{} {} {}",
            $ctx,
            $event,
            format_args!(concat!($(stringify!($key), "={:?} "),*), $($value),*)
        );
    };
}

/// As [`log_info!`], at error level.
#[macro_export]
macro_rules! log_error {
    ($ctx:expr, $event:expr $(, $key:ident = $value:expr)* $(,)?) => {
        log::error!(
            "{} {} {}",
            $ctx,
            $event,
            format_args!(concat!($(stringify!($key), "={:?} "),*), $($value),*)
        );
    };
}

/// As [`log_info!`], at debug level.
#[macro_export]
macro_rules! log_debug {
    ($ctx:expr, $event:expr $(, $key:ident = $value:expr)* $(,)?) => {
        log::debug!(
            "{} {} {}",
            $ctx,
            $event,
            format_args!(concat!($(stringify!($key), "={:?} "),*), $($value),*)
        );
    };
}
