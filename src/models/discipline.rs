//! Scheduling discipline selector.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The scheduling policy that determines execution order.
///
/// Every discipline is non-preemptive and runs on a single virtual processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Discipline {
    /// First In First Out: listing order is arrival order.
    Fifo,
    /// Shortest Job First: ascending burst time, stable on ties.
    Sjf,
    /// Extension priority rank, then file name.
    Priority,
}

impl Discipline {
    /// All disciplines, in presentation order.
    pub const ALL: [Discipline; 3] = [Discipline::Fifo, Discipline::Sjf, Discipline::Priority];

    /// Short identifier ("FIFO", "SJF", "PRIORITY").
    pub fn name(&self) -> &'static str {
        match self {
            Discipline::Fifo => "FIFO",
            Discipline::Sjf => "SJF",
            Discipline::Priority => "PRIORITY",
        }
    }

    /// Human-readable description.
    pub fn description(&self) -> &'static str {
        match self {
            Discipline::Fifo => "First-In, First-Out",
            Discipline::Sjf => "Shortest Job First",
            Discipline::Priority => "Priority Scheduling",
        }
    }
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown discipline name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown scheduling discipline: {0} (expected fifo, sjf or priority)")]
pub struct ParseDisciplineError(pub String);

impl FromStr for Discipline {
    type Err = ParseDisciplineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fifo" | "fcfs" => Ok(Discipline::Fifo),
            "sjf" => Ok(Discipline::Sjf),
            "priority" | "prio" => Ok(Discipline::Priority),
            _ => Err(ParseDisciplineError(s.to_string())),
        }
    }
}
