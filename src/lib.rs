//! EcoYatra Core - data layer for grievance tracking and trip route previews
//!
//! This crate holds the logic behind the EcoYatra app screens; the host
//! application owns rendering and network transport and plugs in through
//! the collaborator traits in `storage` and `routing`. The implementation
//! prioritizes:
//!
//! 1. **Graceful degradation** - read paths fall back to empty or
//!    straight-line results, only writes surface errors
//! 2. **Logging** - every decision point logged with request context
//! 3. **Determinism** - the clock is injected, projections are pure
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//! - `tracker` - Read adapter, stats, stale-load guard, submission
//! - `display` - Display projection and relative-date labels
//! - `storage` - Models, query builders, collaborator traits
//! - `routing` - Route preview derivation and OSRM wire format
//! - `auth` - Pluggable authenticator and login session
//! - `config` - Environment configuration
//! - `logging` - Structured logging with request context

pub mod auth;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod routing;
pub mod storage;
pub mod tracker;

pub use display::projection::{DisplayGrievance, DisplayTimelineEntry};
pub use error::{AuthError, ConfigError, GrievanceError, RouteError, StoreError};
pub use routing::preview::{Coordinate, RoutePreview};
pub use storage::models::{GrievanceRecord, TimelineEntry};
pub use storage::store::{GrievanceStore, Identity, IdentityProvider, KeyValueStore};
pub use tracker::reader::GrievanceReader;
pub use tracker::stats::{compute_stats, GrievanceStats};

/// Initialize the process-wide logger.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_logger() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .format_timestamp_millis()
        .try_init();
}
