//! Schedule (solution) model.
//!
//! A schedule is the execution order of all items under one discipline,
//! each paired with the virtual time at which it completes.
//!
//! # Invariant
//!
//! Finish times are strictly increasing (for positive bursts) and equal the
//! running sum of burst times in execution order. The burst of entry `i` is
//! therefore `finish[i] - finish[i-1]`, with `finish[-1] = 0`.

use serde::{Deserialize, Serialize};

use super::Discipline;

/// One completed item in a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Item name.
    pub name: String,
    /// Cumulative virtual time at which the item completes.
    pub finish_time: u64,
}

impl ScheduleEntry {
    /// Creates a new entry.
    pub fn new(name: impl Into<String>, finish_time: u64) -> Self {
        Self {
            name: name.into(),
            finish_time,
        }
    }
}

/// A complete single-processor, non-preemptive schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Discipline that produced this order.
    pub discipline: Discipline,
    /// Entries in execution order.
    pub entries: Vec<ScheduleEntry>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new(discipline: Discipline) -> Self {
        Self {
            discipline,
            entries: Vec::new(),
        }
    }

    /// Appends an entry.
    pub fn add_entry(&mut self, entry: ScheduleEntry) {
        self.entries.push(entry);
    }

    /// Number of scheduled items.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was scheduled.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total completion time: the last finish time, or 0 when empty.
    pub fn total_time(&self) -> u64 {
        self.entries.last().map(|e| e.finish_time).unwrap_or(0)
    }

    /// Item names in execution order.
    pub fn order(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    /// `(name, finish_time)` pairs in execution order.
    pub fn pairs(&self) -> Vec<(&str, u64)> {
        self.entries
            .iter()
            .map(|e| (e.name.as_str(), e.finish_time))
            .collect()
    }

    /// Finds the finish time of an item.
    pub fn finish_time_of(&self, name: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.finish_time)
    }

    /// Start time of the entry at `index` (the previous finish time).
    pub fn start_time_at(&self, index: usize) -> Option<u64> {
        if index >= self.entries.len() {
            return None;
        }
        Some(if index == 0 {
            0
        } else {
            self.entries[index - 1].finish_time
        })
    }

    /// Burst times reconstructed from consecutive finish-time deltas.
    pub fn burst_times(&self) -> Vec<u64> {
        let mut previous = 0;
        self.entries
            .iter()
            .map(|e| {
                let burst = e.finish_time.saturating_sub(previous);
                previous = e.finish_time;
                burst
            })
            .collect()
    }
}
