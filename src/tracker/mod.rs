//! Grievance tracking module.
//!
//! Coordinates the tracking and submission screens' data:
//! - Read adapter (identity -> store query -> display projection)
//! - Summary stats
//! - Stale-load protection
//! - Submission write path

pub mod context;
pub mod generation;
pub mod reader;
pub mod stats;
pub mod submission;

pub use context::*;
pub use generation::*;
pub use reader::*;
pub use stats::*;
pub use submission::*;
