//! Bulk ingestion of tab-separated rows copied from a spreadsheet.
//!
//! Column order: sequence number, name, registration id, date, clock time.
//! Extra columns are ignored.

use crate::errors::{AppError, AppResult};
use crate::models::record::AttendanceRecord;
use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

const MIN_COLUMNS: usize = 5;

/// Parse pasted text into records.
///
/// Lines with fewer than five columns or a non-integer first column are
/// skipped silently. Fails with [`AppError::NoValidRows`] only when nothing
/// at all could be read.
pub fn parse_tab_separated(text: &str) -> AppResult<Vec<AttendanceRecord>> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(text.as_bytes());

    let mut records = Vec::new();

    for (line, row) in reader.records().enumerate() {
        let row = match row {
            Ok(r) => r,
            Err(e) => {
                debug!(line = line + 1, error = %e, "skipping unreadable line");
                continue;
            }
        };

        match record_from_row(&row) {
            Some(rec) => records.push(rec),
            None => debug!(line = line + 1, columns = row.len(), "skipping line"),
        }
    }

    if records.is_empty() {
        return Err(AppError::NoValidRows);
    }

    Ok(records)
}

fn record_from_row(row: &StringRecord) -> Option<AttendanceRecord> {
    if row.len() < MIN_COLUMNS {
        return None;
    }

    let sequence_number: i64 = row.get(0)?.trim().parse().ok()?;
    let col = |i: usize| row.get(i).map(str::trim).unwrap_or_default().to_string();

    Some(AttendanceRecord {
        sequence_number,
        name: col(1),
        registration_id: col(2),
        date: col(3),
        clock_time: col(4),
    })
}
