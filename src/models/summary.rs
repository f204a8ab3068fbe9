use crate::core::calculator::metrics::{Metrics, Totals};
use crate::core::calculator::timeline::Timeline;
use crate::core::clock::ClockInstant;
use crate::models::record::Identity;
use serde::Serialize;

/// Breakdown of one person's day.
#[derive(Debug, Clone, Serialize)]
pub struct GroupSummary {
    pub identity: Identity,
    pub instants: Vec<ClockInstant>,
    pub timeline: Timeline,
}

impl GroupSummary {
    pub fn totals(&self) -> Totals {
        Totals {
            work_seconds: self.timeline.total_work_seconds,
            break_seconds: self.timeline.total_break_seconds,
        }
    }
}

/// Result of one aggregation pass over a record snapshot.
#[derive(Debug, Default, Clone, Serialize)]
pub struct AttendanceReport {
    pub groups: Vec<GroupSummary>,
    #[serde(skip)]
    pub totals: Totals,
}

impl AttendanceReport {
    pub fn metrics(&self) -> Metrics {
        Metrics::from(self.totals)
    }
}
