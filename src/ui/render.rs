//! Projects a loaded record onto terminal output.
//!
//! Free text (log lines, names, emails) is always passed through
//! `escape::for_terminal` before it is printed.

use crate::models::ClockRecord;
use crate::utils::escape::for_terminal;
use crate::utils::table::{Column, Table};
use crate::utils::time::localize_iso;
use ansi_term::Colour;

pub const NO_ACTIVITY: &str = "No activity yet";
pub const NO_EMPLOYEES: &str = "No employees yet";

/// "Clocked in since ..." or "Not clocked in".
pub fn status_line(record: &ClockRecord, time_format: &str) -> String {
    match record.active_since() {
        Some(since) => format!(
            "Clocked in since {}",
            for_terminal(&localize_iso(since, time_format))
        ),
        // Clocked in with no timestamp: only reachable through hand-edited data.
        None if record.clocked_in => "Clocked in".to_string(),
        None => "Not clocked in".to_string(),
    }
}

pub fn print_status(record: &ClockRecord, time_format: &str) {
    let text = status_line(record, time_format);
    let colour = if record.clocked_in {
        Colour::Green
    } else {
        Colour::Yellow
    };
    println!("🕒 {}", colour.bold().paint(text));
}

/// Log lines, newest first, at most `limit` of them.
pub fn activity_lines(record: &ClockRecord, limit: Option<usize>) -> Vec<String> {
    let take = limit.unwrap_or(usize::MAX);
    record.logs.iter().take(take).map(|l| for_terminal(l)).collect()
}

pub fn print_activity(record: &ClockRecord, limit: Option<usize>) {
    if record.logs.is_empty() {
        println!("{}", Colour::Fixed(8).paint(NO_ACTIVITY));
        return;
    }

    println!("📜 Activity:\n");
    for line in activity_lines(record, limit) {
        let colour = if line.starts_with("Clocked in") {
            Colour::Green
        } else if line.starts_with("Clocked out") {
            Colour::Red
        } else {
            Colour::White
        };
        println!("  • {}", colour.paint(line));
    }

    let hidden = record.logs.len().saturating_sub(limit.unwrap_or(usize::MAX));
    if hidden > 0 {
        println!("  … {} older entries", hidden);
    }
}

/// Roster as a table with 0-based indexes, as used by `employee remove`.
pub fn employee_table(record: &ClockRecord) -> Option<String> {
    if record.employees.is_empty() {
        return None;
    }

    let mut table = Table::new(vec![
        Column::new("#"),
        Column::new("Name"),
        Column::new("Email"),
    ]);
    for (i, e) in record.employees.iter().enumerate() {
        let email = if e.has_email() {
            for_terminal(&e.email)
        } else {
            "--".to_string()
        };
        table.add_row(vec![i.to_string(), for_terminal(&e.name), email]);
    }
    Some(table.render())
}

pub fn print_employees(record: &ClockRecord) {
    match employee_table(record) {
        Some(table) => {
            println!("👥 Employees:\n");
            print!("{}", table);
        }
        None => println!("{}", Colour::Fixed(8).paint(NO_EMPLOYEES)),
    }
}
