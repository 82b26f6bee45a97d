//! Timeline formatting for presentation layers.
//!
//! Turns a schedule into per-item rows of burst, start and finish times.
//! Burst times are reconstructed purely from consecutive finish-time
//! deltas; the burst assigner is never consulted.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{Discipline, Schedule, ScheduleEntry};

/// One row of a rendered timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineRow {
    /// Item name.
    pub name: String,
    /// `finish_time - previous finish_time`.
    pub burst_time: u64,
    /// Previous finish time (0 for the first row).
    pub start_time: u64,
    /// Cumulative finish time.
    pub finish_time: u64,
}

/// A horizontal bar for Gantt-style charts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GanttBar {
    /// Zero-based lane (row) index, in execution order.
    pub lane: usize,
    /// Item name used as the lane label.
    pub label: String,
    /// Bar start.
    pub start: u64,
    /// Bar length.
    pub duration: u64,
}

/// Structured summary of a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Discipline that produced the schedule.
    pub discipline: Discipline,
    /// Rows in execution order.
    pub rows: Vec<TimelineRow>,
}

impl Timeline {
    /// Whether the timeline has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Total completion time.
    pub fn total_time(&self) -> u64 {
        self.rows.last().map(|r| r.finish_time).unwrap_or(0)
    }

    /// Chart-ready bars, one lane per row.
    pub fn gantt_bars(&self) -> Vec<GanttBar> {
        self.rows
            .iter()
            .enumerate()
            .map(|(lane, row)| GanttBar {
                lane,
                label: row.name.clone(),
                start: row.start_time,
                duration: row.burst_time,
            })
            .collect()
    }

    /// Flattened text rendering.
    ///
    /// ```text
    /// Process Completion Order:
    ///
    /// a.pdf: Burst Time = 3, Finish Time = 3
    /// ```
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Timeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Process Completion Order:")?;
        writeln!(f)?;
        for row in &self.rows {
            writeln!(
                f,
                "{}: Burst Time = {}, Finish Time = {}",
                row.name, row.burst_time, row.finish_time
            )?;
        }
        Ok(())
    }
}

/// Builds a timeline from schedule entries.
pub fn format_entries(discipline: Discipline, entries: &[ScheduleEntry]) -> Timeline {
    let mut previous = 0;
    let rows = entries
        .iter()
        .map(|e| {
            let row = TimelineRow {
                name: e.name.clone(),
                burst_time: e.finish_time.saturating_sub(previous),
                start_time: previous,
                finish_time: e.finish_time,
            };
            previous = e.finish_time;
            row
        })
        .collect();
    Timeline { discipline, rows }
}

/// Builds a timeline from a schedule.
pub fn format(schedule: &Schedule) -> Timeline {
    format_entries(schedule.discipline, &schedule.entries)
}
