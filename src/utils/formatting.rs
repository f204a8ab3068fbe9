//! Formatting utilities used for CLI outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Render an (hours, minutes) pair, e.g. `02h 53m` or `02:53` when `short`.
pub fn hm2readable(hours: u64, minutes: u64, short: bool) -> String {
    if short {
        format!("{:02}:{:02}", hours, minutes)
    } else {
        format!("{:02}h {:02}m", hours, minutes)
    }
}

/// Render a span in seconds as whole minutes, e.g. `153 min`.
pub fn secs2readable(seconds: i64) -> String {
    format!("{} min", seconds / 60)
}
