//! Partition records by identity and order each group's clock events.

use crate::core::clock::ClockInstant;
use crate::models::record::{AttendanceRecord, Identity};
use std::collections::HashMap;
use tracing::trace;

/// Clock events of one identity, sorted ascending.
#[derive(Debug, Clone)]
pub struct Group {
    pub identity: Identity,
    pub instants: Vec<ClockInstant>,
}

/// Group valid records by identity, keeping groups in order of first
/// appearance. Each group's instants are sorted with a stable sort, so equal
/// times keep their input order.
pub fn group_records<'a, I>(records: I) -> Vec<Group>
where
    I: IntoIterator<Item = &'a AttendanceRecord>,
{
    let mut index: HashMap<Identity, usize> = HashMap::new();
    let mut groups: Vec<Group> = Vec::new();

    for record in records.into_iter().filter(|r| r.is_valid()) {
        let identity = record.identity();
        let instant = ClockInstant::parse(&record.clock_time);

        match index.get(&identity) {
            Some(&i) => groups[i].instants.push(instant),
            None => {
                index.insert(identity.clone(), groups.len());
                groups.push(Group {
                    identity,
                    instants: vec![instant],
                });
            }
        }
    }

    for group in &mut groups {
        group.instants.sort();
        trace!(identity = %group.identity, events = group.instants.len(), "group sorted");
    }

    groups
}
