#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rattendance::AttendanceRecord;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rat() -> Command {
    cargo_bin_cmd!("rattendance")
}

/// Path of a config file that does not exist, so the binary runs on defaults
pub fn missing_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rattendance.conf", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write `content` into a temp input file and return its path
pub fn temp_input(name: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rattendance.tsv", name));
    let p = path.to_string_lossy().to_string();
    fs::write(&p, content).expect("write temp input");
    p
}

/// One person's day with the given clock times, in input order
pub fn day(name: &str, reg: &str, date: &str, times: &[&str]) -> Vec<AttendanceRecord> {
    times
        .iter()
        .enumerate()
        .map(|(i, t)| AttendanceRecord::new(i as i64 + 1, name, reg, date, *t))
        .collect()
}

/// Tab-separated rows for one person's day
pub fn tsv(name: &str, reg: &str, date: &str, times: &[&str]) -> String {
    times
        .iter()
        .enumerate()
        .map(|(i, t)| format!("{}\t{}\t{}\t{}\t{}\n", i + 1, name, reg, date, t))
        .collect()
}

pub const SAMPLE_TIMES: [&str; 4] = ["01:47 PM", "02:07 PM", "02:10 PM", "04:43 PM"];
