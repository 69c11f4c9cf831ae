//! Storage module.
//!
//! Grievance models, backend query builders and the collaborator traits
//! the host implements. Actual network I/O is handled by the host
//! application; `memory` provides in-process implementations.

pub mod memory;
pub mod models;
pub mod queries;
pub mod store;

pub use memory::*;
pub use models::*;
pub use queries::*;
pub use store::*;
