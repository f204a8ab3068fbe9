//! Text rendering of the grid, the summary cards and the per-identity
//! breakdown. Everything returns a `String`; callers decide where it goes.

use crate::config::Config;
use crate::core::calculator::metrics::Metrics;
use crate::core::store::StoredRow;
use crate::models::record::RecordField;
use crate::models::summary::{AttendanceReport, GroupSummary};
use crate::utils::colors::{BLUE, YELLOW, colorize_optional, colorize_pair, paint};
use crate::utils::formatting::{bold, secs2readable};
use crate::utils::hm2readable;
use crate::utils::table::{Column, Table};

pub fn render_grid(rows: &[StoredRow]) -> String {
    if rows.is_empty() {
        return "No rows. Use 'add' or 'paste' to enter data.\n".to_string();
    }

    let mut columns = vec![Column::new("ID")];
    columns.extend(RecordField::ALL.iter().map(|f| Column::new(f.header())));

    let mut table = Table::new(columns);
    for row in rows {
        let mut cells = vec![row.id.to_string()];
        cells.extend(RecordField::ALL.iter().map(|f| row.record.field(*f)));
        table.add_row(cells);
    }

    table.render()
}

pub fn render_cards(metrics: &Metrics, cfg: &Config) -> String {
    let sep = cfg.separator_char.repeat(36);
    let work = hm2readable(metrics.work_hours, metrics.work_minutes, false);
    let brk = hm2readable(metrics.break_hours, metrics.break_minutes, false);
    let total = hm2readable(metrics.total_clock_hours, metrics.total_clock_minutes, false);

    let title = if cfg.color {
        bold("Attendance summary")
    } else {
        "Attendance summary".to_string()
    };

    let mut out = String::new();
    out.push_str(&format!("{}\n{}\n", title, sep));
    out.push_str(&format!(
        "Work time   : {}\n",
        colorize_optional(&work, cfg.color)
    ));
    out.push_str(&format!(
        "Break time  : {}\n",
        colorize_optional(&brk, cfg.color)
    ));
    out.push_str(&format!(
        "Total clock : {}\n",
        colorize_optional(&total, cfg.color)
    ));
    out.push_str(&sep);
    out.push('\n');
    out
}

fn render_group(group: &GroupSummary, cfg: &Config) -> String {
    let mut out = format!(
        "\n{} ({} events)\n",
        paint(&group.identity.to_string(), BLUE, cfg.color),
        group.instants.len()
    );

    for (i, pair) in group.timeline.pairs.iter().enumerate() {
        let span = format!("{} -> {}", pair.in_time, pair.out_time);
        let duration = if pair.is_accepted() {
            secs2readable(pair.duration_seconds)
        } else {
            "dropped".to_string()
        };
        out.push_str(&format!(
            "  #{:<2} {}  {}\n",
            i + 1,
            colorize_pair(&span, pair.is_accepted(), cfg.color),
            duration
        ));
    }

    for gap in &group.timeline.gaps {
        out.push_str(&format!(
            "  {} {} -> {}  {}\n",
            paint("break", YELLOW, cfg.color),
            gap.start,
            gap.end,
            secs2readable(gap.duration_seconds)
        ));
    }

    if let Some(t) = group.timeline.unpaired {
        out.push_str(&format!("  unpaired: {}\n", t));
    }

    out
}

pub fn render_details(report: &AttendanceReport, cfg: &Config) -> String {
    if report.groups.is_empty() {
        return "\nNot enough valid rows to form an interval.\n".to_string();
    }
    report.groups.iter().map(|g| render_group(g, cfg)).collect()
}
