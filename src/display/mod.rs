//! Display module.
//!
//! Projection of persisted grievances into the display model, with
//! relative-date labels and timeline date/time formatting.

pub mod projection;
pub mod relative_time;

pub use projection::*;
pub use relative_time::*;
