//! Stale-load protection for the tracking screen.
//!
//! Every load takes a ticket from a monotonically increasing counter.
//! Only the result of the most recently issued ticket is applied; a slow
//! response from an older load never overwrites newer state.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use crate::display::projection::DisplayGrievance;
use crate::storage::store::{GrievanceStore, IdentityProvider};

use super::reader::GrievanceReader;
use super::stats::{compute_stats, GrievanceStats};

/// Generation number handed to one load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadTicket(u64);

impl LoadTicket {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

/// Issues load tickets.
#[derive(Debug, Default)]
pub struct LoadGeneration {
    latest: AtomicU64,
}

impl LoadGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> LoadTicket {
        LoadTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn latest(&self) -> u64 {
        self.latest.load(Ordering::SeqCst)
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.latest()
    }
}

/// What the tracking screen currently shows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackerSnapshot {
    pub generation: u64,
    pub grievances: Vec<DisplayGrievance>,
    pub stats: GrievanceStats,
}

/// Screen-scoped grievance state guarded against stale loads.
#[derive(Debug, Default)]
pub struct TrackerState {
    generation: LoadGeneration,
    snapshot: RwLock<TrackerSnapshot>,
}

impl TrackerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_load(&self) -> LoadTicket {
        self.generation.begin()
    }

    /// Apply a load result. Returns false if the ticket is stale.
    pub fn apply(&self, ticket: LoadTicket, grievances: Vec<DisplayGrievance>) -> bool {
        let mut snapshot = self.snapshot.write();

        if !self.generation.is_current(ticket) || ticket.0 <= snapshot.generation {
            log::debug!(
                "TRACKER_LOAD_DISCARDED generation={} latest={} applied={}",
                ticket.0,
                self.generation.latest(),
                snapshot.generation
            );
            return false;
        }

        let stats = compute_stats(&grievances);
        *snapshot = TrackerSnapshot {
            generation: ticket.0,
            grievances,
            stats,
        };

        log::debug!(
            "TRACKER_LOAD_APPLIED generation={} total={} resolved={} pending={}",
            ticket.0,
            stats.total,
            stats.resolved,
            stats.pending
        );
        true
    }

    /// Issue a ticket, load through `reader`, and apply the result.
    pub fn refresh<I, S>(&self, reader: &GrievanceReader<I, S>, now: DateTime<Utc>) -> bool
    where
        I: IdentityProvider,
        S: GrievanceStore,
    {
        let ticket = self.begin_load();
        let grievances = reader.load(now);
        self.apply(ticket, grievances)
    }

    pub fn snapshot(&self) -> TrackerSnapshot {
        self.snapshot.read().clone()
    }

    pub fn stats(&self) -> GrievanceStats {
        self.snapshot.read().stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grievance(id: &str, status: &str) -> DisplayGrievance {
        DisplayGrievance {
            id: id.to_string(),
            title: "t".to_string(),
            category: "c".to_string(),
            status: status.to_string(),
            priority: "Low".to_string(),
            date: "Just now".to_string(),
            description: String::new(),
            timeline: Vec::new(),
        }
    }

    #[test]
    fn test_tickets_increase() {
        let generation = LoadGeneration::new();
        let first = generation.begin();
        let second = generation.begin();
        assert!(second > first);
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }

    #[test]
    fn test_stale_result_discarded() {
        let state = TrackerState::new();
        let older = state.begin_load();
        let newer = state.begin_load();

        // Newer load finishes first
        assert!(state.apply(newer, vec![grievance("fresh", "Resolved")]));
        // Older load finishes late and must not overwrite
        assert!(!state.apply(older, vec![grievance("stale", "Submitted")]));

        let snapshot = state.snapshot();
        assert_eq!(snapshot.generation, newer.generation());
        assert_eq!(snapshot.grievances[0].id, "fresh");
        assert_eq!(snapshot.stats.resolved, 1);
    }

    #[test]
    fn test_older_result_discarded_while_newer_pending() {
        let state = TrackerState::new();
        let older = state.begin_load();
        let _newer = state.begin_load();

        assert!(!state.apply(older, vec![grievance("stale", "Submitted")]));
        assert!(state.snapshot().grievances.is_empty());
    }

    #[test]
    fn test_same_ticket_applied_once() {
        let state = TrackerState::new();
        let ticket = state.begin_load();
        assert!(state.apply(ticket, vec![grievance("a", "Submitted")]));
        assert!(!state.apply(ticket, Vec::new()));
        assert_eq!(state.stats().total, 1);
    }
}
