//! Logging module.
//!
//! Request/user correlation prefix and field macros over the `log` facade;
//! `crate::init_logger` installs `env_logger`.

pub mod structured;

pub use structured::*;
