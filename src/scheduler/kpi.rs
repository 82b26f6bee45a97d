//! Schedule quality metrics (KPIs).
//!
//! Computes the classic single-processor performance indicators from a
//! completed schedule. All items arrive at t=0, so turnaround equals finish
//! time and waiting time equals start time.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Last finish time (= sum of bursts) |
//! | Avg Turnaround | Mean finish time |
//! | Avg Waiting | Mean start time |
//! | Max Waiting | Latest start time |
//! | Throughput | Items completed per time unit |

use serde::{Deserialize, Serialize};

use crate::models::{Discipline, Schedule};

/// Schedule performance indicators.
///
/// All time values are in virtual time units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleKpi {
    /// Discipline the schedule was produced with.
    pub discipline: Discipline,
    /// Number of items scheduled.
    pub item_count: usize,
    /// Last finish time.
    pub makespan: u64,
    /// Mean finish time.
    pub avg_turnaround: f64,
    /// Mean start time.
    pub avg_waiting: f64,
    /// Longest wait of any single item.
    pub max_waiting: u64,
    /// Items per time unit (0.0 for an empty schedule).
    pub throughput: f64,
}

impl ScheduleKpi {
    /// Computes KPIs from a schedule.
    pub fn calculate(schedule: &Schedule) -> Self {
        let n = schedule.len();
        let mut total_turnaround: u64 = 0;
        let mut total_waiting: u64 = 0;
        let mut max_waiting: u64 = 0;
        let mut start: u64 = 0;

        for entry in &schedule.entries {
            total_turnaround = total_turnaround.saturating_add(entry.finish_time);
            total_waiting = total_waiting.saturating_add(start);
            max_waiting = max_waiting.max(start);
            start = entry.finish_time;
        }

        let makespan = schedule.total_time();
        let (avg_turnaround, avg_waiting) = if n == 0 {
            (0.0, 0.0)
        } else {
            (
                total_turnaround as f64 / n as f64,
                total_waiting as f64 / n as f64,
            )
        };
        let throughput = if makespan == 0 {
            0.0
        } else {
            n as f64 / makespan as f64
        };

        Self {
            discipline: schedule.discipline,
            item_count: n,
            makespan,
            avg_turnaround,
            avg_waiting,
            max_waiting,
            throughput,
        }
    }

    /// Picks the discipline with the lowest average waiting time.
    ///
    /// Ties keep the earliest entry.
    pub fn best_by_waiting(kpis: &[ScheduleKpi]) -> Option<&ScheduleKpi> {
        kpis.iter().fold(None, |best: Option<&ScheduleKpi>, k| match best {
            Some(b) if b.avg_waiting <= k.avg_waiting => Some(b),
            _ => Some(k),
        })
    }
}
