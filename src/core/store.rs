//! In-memory record store backing the editable grid.
//!
//! Lives for one interactive session. The aggregation engine never reads it
//! directly: callers take a `snapshot()` and hand that to `Core`.

use crate::core::ingest::parse_tab_separated;
use crate::errors::{AppError, AppResult};
use crate::models::record::{AttendanceRecord, RecordField, RowId};
use tracing::info;

#[derive(Debug, Clone)]
pub struct StoredRow {
    pub id: RowId,
    pub record: AttendanceRecord,
}

#[derive(Debug, Default)]
pub struct RecordStore {
    rows: Vec<StoredRow>,
    next_id: u64,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<AttendanceRecord>) -> Self {
        let mut store = Self::new();
        store.replace_all(records);
        store
    }

    fn allocate_id(&mut self) -> RowId {
        self.next_id += 1;
        RowId(self.next_id)
    }

    fn position(&self, id: RowId) -> AppResult<usize> {
        self.rows
            .iter()
            .position(|r| r.id == id)
            .ok_or(AppError::RowNotFound(id))
    }

    /// Append an empty row numbered after the last one.
    pub fn add(&mut self) -> RowId {
        let id = self.allocate_id();
        let record = AttendanceRecord {
            sequence_number: self.rows.len() as i64 + 1,
            ..AttendanceRecord::default()
        };
        self.rows.push(StoredRow { id, record });
        info!(%id, "row added");
        id
    }

    pub fn update(&mut self, id: RowId, field: RecordField, value: &str) -> AppResult<()> {
        let pos = self.position(id)?;
        self.rows[pos].record.set_field(field, value)?;
        info!(%id, field = field.header(), "row updated");
        Ok(())
    }

    /// Remove a row and renumber the remaining ones 1..N in display order.
    pub fn delete(&mut self, id: RowId) -> AppResult<()> {
        let pos = self.position(id)?;
        self.rows.remove(pos);
        for (i, row) in self.rows.iter_mut().enumerate() {
            row.record.sequence_number = i as i64 + 1;
        }
        info!(%id, remaining = self.rows.len(), "row deleted");
        Ok(())
    }

    pub fn replace_all(&mut self, records: Vec<AttendanceRecord>) {
        self.rows.clear();
        for record in records {
            let id = self.allocate_id();
            self.rows.push(StoredRow { id, record });
        }
        info!(rows = self.rows.len(), "rows replaced");
    }

    pub fn clear(&mut self) {
        self.rows.clear();
        info!("rows cleared");
    }

    /// Ingest pasted text and replace every row with it.
    /// On failure the store is left untouched.
    pub fn paste(&mut self, text: &str) -> AppResult<usize> {
        let records = parse_tab_separated(text)?;
        let n = records.len();
        self.replace_all(records);
        Ok(n)
    }

    pub fn get(&self, id: RowId) -> Option<&AttendanceRecord> {
        self.rows.iter().find(|r| r.id == id).map(|r| &r.record)
    }

    pub fn rows(&self) -> &[StoredRow] {
        &self.rows
    }

    /// Owned copy of the current records, in display order.
    pub fn snapshot(&self) -> Vec<AttendanceRecord> {
        self.rows.iter().map(|r| r.record.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
