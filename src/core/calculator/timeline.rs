use crate::core::clock::ClockInstant;
use serde::Serialize;

/// One (in, out) pair taken from a sorted group of instants.
#[derive(Debug, Clone, Serialize)]
pub struct Pair {
    pub in_time: ClockInstant,
    pub out_time: ClockInstant,
    pub duration_seconds: i64,
}

impl Pair {
    /// Only strictly positive spans count as work.
    pub fn is_accepted(&self) -> bool {
        self.duration_seconds > 0
    }
}

/// Gap between the OUT of one pair and the IN of the next.
#[derive(Debug, Clone, Serialize)]
pub struct Gap {
    pub start: ClockInstant,
    pub end: ClockInstant,
    pub duration_seconds: i64,
}

#[derive(Debug, Default, Clone, Serialize)]
pub struct Timeline {
    pub pairs: Vec<Pair>,
    pub gaps: Vec<Gap>,
    pub unpaired: Option<ClockInstant>,
    pub total_work_seconds: i64,
    pub total_break_seconds: i64,
}

/// Pair already-sorted instants into work intervals and collect the breaks
/// between them.
///
/// Instants are consumed two at a time from index 0. An odd trailing instant
/// is kept in `unpaired` and contributes nothing. Non-positive pair durations
/// and gaps are dropped, never clamped.
pub fn build_timeline(sorted: &[ClockInstant]) -> Timeline {
    if sorted.len() < 2 {
        return Timeline {
            unpaired: sorted.first().copied(),
            ..Timeline::default()
        };
    }

    // -----------------------------
    // Build Pairs
    // -----------------------------
    let pairs: Vec<Pair> = sorted
        .chunks_exact(2)
        .map(|chunk| Pair {
            in_time: chunk[0],
            out_time: chunk[1],
            duration_seconds: chunk[1].seconds_since(chunk[0]),
        })
        .collect();

    let unpaired = sorted.chunks_exact(2).remainder().first().copied();

    let total_work_seconds = pairs
        .iter()
        .filter(|p| p.is_accepted())
        .map(|p| p.duration_seconds)
        .sum();

    // -----------------------------
    // Compute GAPS between pairs
    // -----------------------------
    let gaps: Vec<Gap> = pairs
        .windows(2)
        .filter_map(|w| {
            let start = w[0].out_time;
            let end = w[1].in_time;
            let duration_seconds = end.seconds_since(start);
            (duration_seconds > 0).then_some(Gap {
                start,
                end,
                duration_seconds,
            })
        })
        .collect();

    let total_break_seconds = gaps.iter().map(|g| g.duration_seconds).sum();

    Timeline {
        pairs,
        gaps,
        unpaired,
        total_work_seconds,
        total_break_seconds,
    }
}
