//! Route preview module.
//!
//! Derives the trip map's route line and distance/duration labels:
//! - Preview derivation with straight-line fallback
//! - OSRM request/reply wire format

pub mod osrm;
pub mod preview;

pub use osrm::*;
pub use preview::*;
