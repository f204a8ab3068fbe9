//! Time-of-day values and the 12-hour clock strings they are read from.
//!
//! Attendance logs carry times like `"06:59 PM"` without any calendar
//! context, so instants are modelled as seconds since midnight and never
//! as full datetimes. Subtracting two instants always yields a pure
//! time-of-day delta.

use chrono::NaiveTime;
use serde::Serialize;
use std::fmt;
use tracing::debug;

const SECONDS_PER_DAY: u32 = 24 * 60 * 60;

/// A time of day with second resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct ClockInstant(u32);

impl ClockInstant {
    /// Sentinel used for clock strings that cannot be read.
    pub const MIDNIGHT: ClockInstant = ClockInstant(0);

    pub fn from_hms(hour: u32, minute: u32, second: u32) -> Option<Self> {
        if hour > 23 || minute > 59 || second > 59 {
            return None;
        }
        Some(Self(hour * 3600 + minute * 60 + second))
    }

    pub fn hour(&self) -> u32 {
        self.0 / 3600
    }

    pub fn minute(&self) -> u32 {
        (self.0 % 3600) / 60
    }

    /// Signed delta `self - earlier`, in seconds.
    pub fn seconds_since(&self, earlier: ClockInstant) -> i64 {
        i64::from(self.0) - i64::from(earlier.0)
    }

    /// Strict reading of `"H:MM AM"` / `"HH:MM PM"`.
    ///
    /// Hour must be 1-12 and minute 0-59, with exactly one space before an
    /// uppercase `AM`/`PM`. Surrounding whitespace is ignored.
    pub fn try_parse(text: &str) -> Option<Self> {
        let (time, period) = text.trim().split_once(' ')?;
        let (hour, minute) = time.split_once(':')?;

        let hour = parse_clock_field(hour)?;
        let minute = parse_clock_field(minute)?;
        if !(1..=12).contains(&hour) || minute > 59 {
            return None;
        }

        let hour = match (period, hour) {
            ("AM", 12) => 0,
            ("AM", h) => h,
            ("PM", 12) => 12,
            ("PM", h) => h + 12,
            _ => return None,
        };

        Self::from_hms(hour, minute, 0)
    }

    /// Permissive reading: malformed input resolves to [`ClockInstant::MIDNIGHT`]
    /// so one bad row never aborts an aggregation pass.
    pub fn parse(text: &str) -> Self {
        Self::try_parse(text).unwrap_or_else(|| {
            debug!(input = text, "malformed clock string, using midnight");
            Self::MIDNIGHT
        })
    }

    pub fn to_naive_time(&self) -> NaiveTime {
        NaiveTime::from_num_seconds_from_midnight_opt(self.0 % SECONDS_PER_DAY, 0)
            .unwrap_or(NaiveTime::MIN)
    }

    /// Zero-padded 12-hour form, e.g. `"06:59 PM"` or `"12:00 AM"`.
    pub fn format(&self) -> String {
        self.to_naive_time().format("%I:%M %p").to_string()
    }
}

impl From<NaiveTime> for ClockInstant {
    fn from(t: NaiveTime) -> Self {
        use chrono::Timelike;
        Self(t.num_seconds_from_midnight())
    }
}

impl fmt::Display for ClockInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

fn parse_clock_field(s: &str) -> Option<u32> {
    if s.is_empty() || s.len() > 2 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Free-function form of [`ClockInstant::parse`].
pub fn parse_clock(text: &str) -> ClockInstant {
    ClockInstant::parse(text)
}

/// Free-function form of [`ClockInstant::format`].
pub fn format_clock(instant: ClockInstant) -> String {
    instant.format()
}
