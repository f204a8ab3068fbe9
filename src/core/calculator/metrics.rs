use serde::Serialize;

/// Raw totals of one aggregation pass, in seconds.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    pub work_seconds: i64,
    pub break_seconds: i64,
}

impl Totals {
    pub fn work_minutes(&self) -> f64 {
        self.work_seconds as f64 / 60.0
    }

    pub fn break_minutes(&self) -> f64 {
        self.break_seconds as f64 / 60.0
    }

    /// Work plus break, not the wall-clock span of the day.
    pub fn total_minutes(&self) -> f64 {
        (self.work_seconds + self.break_seconds) as f64 / 60.0
    }
}

impl std::ops::AddAssign for Totals {
    fn add_assign(&mut self, rhs: Self) {
        self.work_seconds += rhs.work_seconds;
        self.break_seconds += rhs.break_seconds;
    }
}

/// Split a minute total into whole hours and a rounded minute remainder.
///
/// Rounding touches only the remainder, so the parts of different metrics
/// are not guaranteed to add up after independent splitting.
pub fn split_hours_minutes(total_minutes: f64) -> (u64, u64) {
    let total = total_minutes.max(0.0);
    let hours = (total / 60.0).floor() as u64;
    let minutes = (total % 60.0).round() as u64;
    (hours, minutes)
}

/// Summary numbers shown on the cards.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Metrics {
    pub work_hours: u64,
    pub work_minutes: u64,
    pub break_hours: u64,
    pub break_minutes: u64,
    pub total_clock_hours: u64,
    pub total_clock_minutes: u64,
}

impl Metrics {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

impl From<Totals> for Metrics {
    fn from(t: Totals) -> Self {
        let (work_hours, work_minutes) = split_hours_minutes(t.work_minutes());
        let (break_hours, break_minutes) = split_hours_minutes(t.break_minutes());
        let (total_clock_hours, total_clock_minutes) = split_hours_minutes(t.total_minutes());

        Self {
            work_hours,
            work_minutes,
            break_hours,
            break_minutes,
            total_clock_hours,
            total_clock_minutes,
        }
    }
}
