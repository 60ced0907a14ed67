use prettytable::{Attr, Cell, Row, Table};
use serde::Serialize;
use std::fmt;

use crate::subject::Subject;

/// Point-in-time view of one subject's counters.
///
/// Counters are read independently, so a snapshot taken while other threads
/// are recording may pair a total with a count from a slightly different
/// moment.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StatsSnapshot {
    pub subject: Subject,
    pub accumulated_ns: u64,
    pub count: u64,
    pub avg_ns: u64,
}

impl StatsSnapshot {
    pub fn new(subject: Subject, accumulated_ns: u64, count: u64) -> Self {
        let avg_ns = if count == 0 { 0 } else { accumulated_ns / count };
        Self {
            subject,
            accumulated_ns,
            count,
            avg_ns,
        }
    }
}

/// Snapshot of every registered subject, in registry order.
#[derive(Debug, Clone, Serialize)]
pub struct TallyReport {
    pub subjects: Vec<StatsSnapshot>,
}

impl TallyReport {
    pub fn to_json(&self) -> eyre::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> eyre::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn table(&self) -> Table {
        let mut table = Table::new();

        let header_cells: Vec<Cell> = ["Subject", "Calls", "Avg", "Total"]
            .iter()
            .map(|header| Cell::new(header).with_style(Attr::Bold))
            .collect();
        table.add_row(Row::new(header_cells));

        for snap in &self.subjects {
            table.add_row(Row::new(vec![
                Cell::new(snap.subject.name()),
                Cell::new(&snap.count.to_string()),
                Cell::new(&format_duration(snap.avg_ns)),
                Cell::new(&format_duration(snap.accumulated_ns)),
            ]));
        }

        table
    }
}

impl fmt::Display for TallyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.table())
    }
}

/// Formats a duration in nanoseconds into a human-readable string with appropriate units.
pub fn format_duration(ns: u64) -> String {
    if ns < 1_000 {
        format!("{} ns", ns)
    } else if ns < 1_000_000 {
        format!("{:.2} µs", ns as f64 / 1_000.0)
    } else if ns < 1_000_000_000 {
        format!("{:.2} ms", ns as f64 / 1_000_000.0)
    } else {
        format!("{:.2} s", ns as f64 / 1_000_000_000.0)
    }
}
