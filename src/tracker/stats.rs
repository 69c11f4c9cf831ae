//! Grievance summary counts.

use serde::Serialize;

use crate::display::projection::DisplayGrievance;
use crate::storage::models::status;

/// Summary counts shown above the grievance list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct GrievanceStats {
    pub total: usize,
    pub resolved: usize,
    pub pending: usize,
}

/// Count total, resolved (exact `"Resolved"` match) and pending grievances.
pub fn compute_stats(grievances: &[DisplayGrievance]) -> GrievanceStats {
    let resolved = grievances
        .iter()
        .filter(|g| g.status == status::RESOLVED)
        .count();

    GrievanceStats {
        total: grievances.len(),
        resolved,
        pending: grievances.len() - resolved,
    }
}
