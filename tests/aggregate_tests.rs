mod common;
use common::{SAMPLE_TIMES, day};

use proptest::prelude::*;
use rattendance::core::calculator::metrics::split_hours_minutes;
use rattendance::{AttendanceRecord, Core, Metrics};

#[test]
fn test_fewer_than_two_valid_records_yield_zero() {
    assert!(Core::aggregate(&[]).is_zero());
    assert!(Core::aggregate(&day("Alice", "6", "14-11-2025", &["09:00 AM"])).is_zero());

    // second row is missing its registration id, so only one is usable
    let mut records = day("Alice", "6", "14-11-2025", &["09:00 AM", "05:00 PM"]);
    records[1].registration_id = "   ".into();
    assert!(Core::aggregate(&records).is_zero());
}

#[test]
fn test_odd_count_ignores_trailing_instant() {
    let records = day("Alice", "6", "14-11-2025", &["09:00 AM", "10:00 AM", "11:00 AM"]);
    let m = Core::aggregate(&records);

    assert_eq!((m.work_hours, m.work_minutes), (1, 0));
    assert_eq!((m.break_hours, m.break_minutes), (0, 0));
    assert_eq!((m.total_clock_hours, m.total_clock_minutes), (1, 0));
}

#[test]
fn test_four_events_give_two_pairs_and_one_break() {
    let records = day("Pugalendhi S", "6", "14-11-2025", &SAMPLE_TIMES);
    let m = Core::aggregate(&records);

    assert_eq!(
        m,
        Metrics {
            work_hours: 2,
            work_minutes: 53,
            break_hours: 0,
            break_minutes: 3,
            total_clock_hours: 2,
            total_clock_minutes: 56,
        }
    );
}

#[test]
fn test_full_day_of_ten_events() {
    // sample day from the attendance sheet, listed newest first
    let records = day(
        "Pugalendhi S",
        "6",
        "14-11-2025",
        &[
            "06:59 PM", "05:00 PM", "04:43 PM", "02:10 PM", "02:07 PM", "01:47 PM", "01:15 PM",
            "12:10 PM", "11:51 AM", "09:06 AM",
        ],
    );
    let report = Core::build_report(&records);
    let m = report.metrics();

    // 09:06-11:51 165, 12:10-01:15 65, 01:47-02:07 20, 02:10-04:43 153, 05:00-06:59 119
    assert_eq!((m.work_hours, m.work_minutes), (8, 42));
    // 19 + 32 + 3 + 17
    assert_eq!((m.break_hours, m.break_minutes), (1, 11));
    assert_eq!((m.total_clock_hours, m.total_clock_minutes), (9, 53));

    assert_eq!(report.groups.len(), 1);
    assert_eq!(report.groups[0].timeline.pairs.len(), 5);
    assert_eq!(report.groups[0].timeline.gaps.len(), 4);
    assert!(report.groups[0].timeline.unpaired.is_none());
}

#[test]
fn test_identities_never_share_breaks() {
    // interleaved in time: Alice 09-10, Bob 10:30-11, Alice 12-13
    let mut records = day("Alice", "1", "14-11-2025", &["09:00 AM", "10:00 AM"]);
    records.extend(day("Bob", "2", "14-11-2025", &["10:30 AM", "11:00 AM"]));
    records.extend(day("Alice", "1", "15-11-2025", &["12:00 PM", "01:00 PM"]));

    let m = Core::aggregate(&records);
    assert_eq!((m.work_hours, m.work_minutes), (2, 30));
    assert_eq!((m.break_hours, m.break_minutes), (0, 0));
}

#[test]
fn test_identity_is_case_sensitive_but_trimmed() {
    let mut records = day("Alice", "1", "14-11-2025", &["09:00 AM", "10:00 AM"]);
    records.push(AttendanceRecord::new(3, " Alice ", "1", "14-11-2025", "10:15 AM"));
    records.push(AttendanceRecord::new(4, "Alice", "1 ", "14-11-2025", "11:00 AM"));
    records.push(AttendanceRecord::new(5, "alice", "1", "14-11-2025", "12:00 PM"));

    let report = Core::build_report(&records);
    assert_eq!(report.groups.len(), 2);

    let m = report.metrics();
    // Alice: 09:00-10:00 work, 10:00-10:15 break, 10:15-11:00 work
    assert_eq!((m.work_hours, m.work_minutes), (1, 45));
    assert_eq!((m.break_hours, m.break_minutes), (0, 15));
}

#[test]
fn test_malformed_time_contributes_no_negative_duration() {
    // "oops" falls back to midnight and sorts first: pairs (00:00, 09:00) and
    // (10:00, 11:00)
    let records = day("Alice", "6", "14-11-2025", &["09:00 AM", "oops", "10:00 AM", "11:00 AM"]);
    let m = Core::aggregate(&records);

    assert_eq!((m.work_hours, m.work_minutes), (10, 0));
    assert_eq!((m.break_hours, m.break_minutes), (1, 0));
}

#[test]
fn test_zero_length_pairs_are_dropped() {
    let records = day("Alice", "6", "14-11-2025", &["09:00 AM", "09:00 AM", "10:00 AM", "10:30 AM"]);
    let report = Core::build_report(&records);
    let timeline = &report.groups[0].timeline;

    assert!(!timeline.pairs[0].is_accepted());
    assert!(timeline.pairs[1].is_accepted());

    let m = report.metrics();
    assert_eq!((m.work_hours, m.work_minutes), (0, 30));
    assert_eq!((m.break_hours, m.break_minutes), (1, 0));
}

#[test]
fn test_aggregate_is_repeatable() {
    let records = day("Alice", "6", "14-11-2025", &SAMPLE_TIMES);
    assert_eq!(Core::aggregate(&records), Core::aggregate(&records));
}

#[test]
fn test_split_rounds_only_the_remainder() {
    assert_eq!(split_hours_minutes(0.0), (0, 0));
    assert_eq!(split_hours_minutes(173.0), (2, 53));
    assert_eq!(split_hours_minutes(59.4), (0, 59));
    // remainder rounds up to 60 without carrying into hours
    assert_eq!(split_hours_minutes(119.6), (1, 60));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_aggregate_is_order_independent(
        seed in prop::collection::vec(any::<u32>(), 10),
    ) {
        let mut records = day(
            "Pugalendhi S",
            "6",
            "14-11-2025",
            &["06:59 PM", "05:00 PM", "04:43 PM", "02:10 PM", "02:07 PM"],
        );
        records.extend(day("Alice", "7", "14-11-2025", &SAMPLE_TIMES));
        records.push(AttendanceRecord::new(10, "Alice", "7", "14-11-2025", "bad"));

        let expected = Core::aggregate(&records);

        let mut keyed: Vec<(u32, AttendanceRecord)> =
            seed.into_iter().zip(records).collect();
        keyed.sort_by_key(|(k, _)| *k);
        let shuffled: Vec<AttendanceRecord> = keyed.into_iter().map(|(_, r)| r).collect();

        prop_assert_eq!(Core::aggregate(&shuffled), expected);
    }
}
