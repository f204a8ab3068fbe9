use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable handle of a row inside a `RecordStore`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RowId(pub u64);

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One raw row of the attendance log, as typed or pasted by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub sequence_number: i64, // display order hint, ignored by the engine
    pub name: String,
    pub registration_id: String,
    pub date: String,
    pub clock_time: String, // "HH:MM AM|PM", parsed only by the engine
}

impl AttendanceRecord {
    pub fn new(
        sequence_number: i64,
        name: impl Into<String>,
        registration_id: impl Into<String>,
        date: impl Into<String>,
        clock_time: impl Into<String>,
    ) -> Self {
        Self {
            sequence_number,
            name: name.into(),
            registration_id: registration_id.into(),
            date: date.into(),
            clock_time: clock_time.into(),
        }
    }

    /// A record takes part in aggregation only when every identity field
    /// and the clock time are non-blank.
    pub fn is_valid(&self) -> bool {
        [
            &self.name,
            &self.registration_id,
            &self.date,
            &self.clock_time,
        ]
        .iter()
        .all(|s| !s.trim().is_empty())
    }

    pub fn identity(&self) -> Identity {
        Identity {
            name: self.name.trim().to_string(),
            registration_id: self.registration_id.trim().to_string(),
            date: self.date.trim().to_string(),
        }
    }

    pub fn field(&self, field: RecordField) -> String {
        match field {
            RecordField::Sequence => self.sequence_number.to_string(),
            RecordField::Name => self.name.clone(),
            RecordField::RegistrationId => self.registration_id.clone(),
            RecordField::Date => self.date.clone(),
            RecordField::ClockTime => self.clock_time.clone(),
        }
    }

    /// Overwrite one column with user input.
    pub fn set_field(&mut self, field: RecordField, value: &str) -> AppResult<()> {
        match field {
            RecordField::Sequence => {
                self.sequence_number = value
                    .trim()
                    .parse()
                    .map_err(|_| AppError::InvalidSequenceNumber(value.to_string()))?;
            }
            RecordField::Name => self.name = value.to_string(),
            RecordField::RegistrationId => self.registration_id = value.to_string(),
            RecordField::Date => self.date = value.to_string(),
            RecordField::ClockTime => self.clock_time = value.to_string(),
        }
        Ok(())
    }
}

/// Grouping key: one person on one day.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Identity {
    pub name: String,
    pub registration_id: String,
    pub date: String,
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}|{}", self.name, self.registration_id, self.date)
    }
}

/// Editable columns of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordField {
    Sequence,
    Name,
    RegistrationId,
    Date,
    ClockTime,
}

impl RecordField {
    pub const ALL: [RecordField; 5] = [
        RecordField::Sequence,
        RecordField::Name,
        RecordField::RegistrationId,
        RecordField::Date,
        RecordField::ClockTime,
    ];

    /// Parse a column name typed in the session (case-insensitive).
    pub fn rf_from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "sequence" | "seq" | "sno" => Some(Self::Sequence),
            "name" => Some(Self::Name),
            "reg" | "regno" | "registration" => Some(Self::RegistrationId),
            "date" => Some(Self::Date),
            "time" | "clock" => Some(Self::ClockTime),
            _ => None,
        }
    }

    pub fn header(&self) -> &'static str {
        match self {
            RecordField::Sequence => "S.No",
            RecordField::Name => "Name",
            RecordField::RegistrationId => "Reg No",
            RecordField::Date => "Date",
            RecordField::ClockTime => "Time",
        }
    }
}
