/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";

/// Wrap `value` in `color` when colours are enabled.
pub fn paint(value: &str, color: &str, enabled: bool) -> String {
    if enabled {
        format!("{color}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Grey out blank cells and zero durations.
pub fn colorize_optional(value: &str, enabled: bool) -> String {
    let v = value.trim();
    if v.is_empty() || v == "00h 00m" || v == "0 min" {
        paint(value, GREY, enabled)
    } else {
        value.to_string()
    }
}

/// Pairs whose duration was dropped are shown in red.
pub fn colorize_pair(value: &str, accepted: bool, enabled: bool) -> String {
    if accepted {
        paint(value, GREEN, enabled)
    } else {
        paint(value, RED, enabled)
    }
}
