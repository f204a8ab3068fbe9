use crate::core::calculator::grouping::group_records;
use crate::core::calculator::metrics::{Metrics, Totals};
use crate::core::calculator::timeline::build_timeline;
use crate::models::record::AttendanceRecord;
use crate::models::summary::{AttendanceReport, GroupSummary};
use tracing::debug;

/// Aggregation engine. Stateless: every call works on the snapshot it is given.
pub struct Core;

impl Core {
    /// Group, pair and total a snapshot of records, keeping the per-identity
    /// breakdown.
    pub fn build_report(records: &[AttendanceRecord]) -> AttendanceReport {
        let valid = records.iter().filter(|r| r.is_valid()).count();
        if valid < 2 {
            debug!(valid, "not enough valid records to form an interval");
            return AttendanceReport::default();
        }

        let mut totals = Totals::default();
        let groups: Vec<GroupSummary> = group_records(records)
            .into_iter()
            .map(|group| {
                let timeline = build_timeline(&group.instants);
                let summary = GroupSummary {
                    identity: group.identity,
                    instants: group.instants,
                    timeline,
                };
                totals += summary.totals();
                summary
            })
            .collect();

        debug!(
            groups = groups.len(),
            work_seconds = totals.work_seconds,
            break_seconds = totals.break_seconds,
            "aggregation finished"
        );

        AttendanceReport { groups, totals }
    }

    /// Worked, break and total time for a snapshot of records.
    pub fn aggregate(records: &[AttendanceRecord]) -> Metrics {
        Self::build_report(records).metrics()
    }
}
