use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{SAMPLE_TIMES, missing_config, rat, temp_input, tsv};

#[test]
fn test_summary_from_file() {
    let cfg = missing_config("summary_file");
    let input = temp_input("summary_file", &tsv("Pugalendhi S", "6", "14-11-2025", &SAMPLE_TIMES));

    rat()
        .args(["--config", &cfg, "summary", "--file", &input])
        .assert()
        .success()
        .stdout(contains("Attendance summary"))
        .stdout(contains("02h 53m"))
        .stdout(contains("00h 03m"))
        .stdout(contains("02h 56m"));
}

#[test]
fn test_summary_from_stdin_as_json() {
    let cfg = missing_config("summary_json");

    let output = rat()
        .args(["--config", &cfg, "summary", "--json"])
        .write_stdin(tsv("Alice", "6", "14-11-2025", &SAMPLE_TIMES))
        .output()
        .expect("run summary");
    assert!(output.status.success());

    let v: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json output");
    assert_eq!(v["work_hours"], 2);
    assert_eq!(v["work_minutes"], 53);
    assert_eq!(v["break_hours"], 0);
    assert_eq!(v["break_minutes"], 3);
    assert_eq!(v["total_clock_hours"], 2);
    assert_eq!(v["total_clock_minutes"], 56);
}

#[test]
fn test_summary_details_lists_pairs_and_breaks() {
    let cfg = missing_config("summary_details");
    let input = temp_input(
        "summary_details",
        &tsv("Alice", "6", "14-11-2025", &["09:00 AM", "10:00 AM", "11:00 AM"]),
    );

    rat()
        .args(["--config", &cfg, "summary", "--details", "--file", &input])
        .assert()
        .success()
        .stdout(contains("Alice|6|14-11-2025"))
        .stdout(contains("60 min"))
        .stdout(contains("unpaired: 11:00 AM"))
        .stdout(contains("break").not());
}

#[test]
fn test_summary_without_valid_rows_fails() {
    let cfg = missing_config("summary_invalid");

    rat()
        .args(["--config", &cfg, "summary"])
        .write_stdin("no\tvalid\trows\there\tat all\n")
        .assert()
        .failure()
        .stderr(contains("No valid data found"));
}

#[test]
fn test_table_prints_rows() {
    let cfg = missing_config("table");
    let input = temp_input("table", &tsv("Alice", "6", "14-11-2025", &SAMPLE_TIMES));

    rat()
        .args(["--config", &cfg, "table", "--file", &input])
        .assert()
        .success()
        .stdout(contains("Reg No"))
        .stdout(contains("Alice"))
        .stdout(contains("04:43 PM"));
}

#[test]
fn test_session_edits_and_recomputes() {
    let cfg = missing_config("session_edit");
    let script = "add\n\
                  set 1 name Alice\n\
                  set 1 reg 6\n\
                  set 1 date 14-11-2025\n\
                  set 1 time 09:00 AM\n\
                  add\n\
                  set 2 name Alice\n\
                  set 2 reg 6\n\
                  set 2 date 14-11-2025\n\
                  set 2 time 10:30 AM\n\
                  show\n\
                  quit\n";

    rat()
        .args(["--config", &cfg, "session"])
        .write_stdin(script)
        .assert()
        .success()
        .stdout(contains("01h 30m"));
}

#[test]
fn test_session_paste_delete_and_bad_commands() {
    let cfg = missing_config("session_paste");
    let mut script = String::from("paste\n");
    script.push_str(&tsv("Alice", "6", "14-11-2025", &SAMPLE_TIMES));
    script.push_str(".\n");
    // drop the 04:43 PM row: 01:47-02:07 pair, trailing 02:10 ignored
    script.push_str("del 4\nbogus\ndel nope\nset 1 color red\nquit\n");

    rat()
        .args(["--config", &cfg, "session"])
        .write_stdin(script)
        .assert()
        .success()
        .stdout(contains("4 rows loaded"))
        .stdout(contains("00h 20m"))
        .stderr(contains("Unknown command 'bogus'"))
        .stderr(contains("Invalid row id: nope"))
        .stderr(contains("Unknown field 'color'"));
}

#[test]
fn test_config_print_uses_defaults() {
    let cfg = missing_config("config_print");

    rat()
        .args(["--config", &cfg, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("separator_char"))
        .stdout(contains("log_level: warn"));
}

#[test]
fn test_init_writes_config_and_respects_it() {
    let cfg = missing_config("init_write");

    rat().args(["--config", &cfg, "init"]).assert().success();
    let content = fs::read_to_string(&cfg).expect("config written");
    assert!(content.contains("show_details: false"));

    fs::write(&cfg, content.replace("show_details: false", "show_details: true"))
        .expect("update config");
    let input = temp_input("init_write", &tsv("Alice", "6", "14-11-2025", &SAMPLE_TIMES));

    rat()
        .args(["--config", &cfg, "summary", "--file", &input])
        .assert()
        .success()
        .stdout(contains("Alice|6|14-11-2025"));
}

#[test]
fn test_init_test_mode_writes_nothing() {
    let cfg = missing_config("init_test_mode");

    rat()
        .args(["--config", &cfg, "--test", "init"])
        .assert()
        .success();
    assert!(fs::metadata(&cfg).is_err());
}

#[test]
fn test_broken_config_is_reported() {
    let cfg = missing_config("broken_config");
    fs::write(&cfg, "show_details: [not, a, bool").expect("write config");

    rat()
        .args(["--config", &cfg, "summary"])
        .write_stdin(tsv("Alice", "6", "14-11-2025", &SAMPLE_TIMES))
        .assert()
        .failure()
        .stderr(contains("Configuration error"));
}
