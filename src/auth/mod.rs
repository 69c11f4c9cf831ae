//! Authentication module.
//!
//! Pluggable credential check and the persisted login session.

pub mod provider;
pub mod session;

pub use provider::*;
pub use session::*;
