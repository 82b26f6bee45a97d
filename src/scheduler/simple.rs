//! Non-preemptive single-processor scheduling engine.
//!
//! # Algorithm
//!
//! 1. Order items with the discipline's rule engine (FIFO, SJF or PRIORITY).
//! 2. Walk the order once, accumulating burst times into finish times:
//!    `finish[i] = finish[i-1] + burst[i]`, `finish[-1] = 0`.
//!
//! The accumulation pass is shared by all disciplines, so identical orders
//! always yield identical schedules.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for accumulation.

use tracing::debug;

use crate::dispatching::{RuleEngine, SchedulingContext};
use crate::models::{Discipline, Item, Schedule, ScheduleEntry};
use crate::priority::PriorityTable;

/// Scheduling engine over pre-assigned items.
///
/// Every input item appears exactly once in the output; nothing is dropped,
/// duplicated or preempted. An empty input yields an empty schedule.
///
/// # Example
///
/// ```
/// use file_sched::models::{items, Discipline};
/// use file_sched::scheduler::SchedulingEngine;
///
/// let list = items([("a.pdf", 3), ("b.txt", 1), ("c.mp4", 2)]);
/// let engine = SchedulingEngine::new();
///
/// let sjf = engine.schedule(&list, Discipline::Sjf);
/// assert_eq!(sjf.pairs(), vec![("b.txt", 1), ("c.mp4", 3), ("a.pdf", 6)]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SchedulingEngine {
    context: SchedulingContext,
}

impl SchedulingEngine {
    /// Creates an engine with the default priority table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the priority table used by the PRIORITY discipline.
    pub fn with_priorities(mut self, priorities: PriorityTable) -> Self {
        self.context.priorities = priorities;
        self
    }

    /// Sets the full rule context.
    pub fn with_context(mut self, context: SchedulingContext) -> Self {
        self.context = context;
        self
    }

    /// Priority table in use.
    pub fn priorities(&self) -> &PriorityTable {
        &self.context.priorities
    }

    /// Execution order for a discipline (a permutation of `items`).
    pub fn execution_order(&self, items: &[Item], discipline: Discipline) -> Vec<Item> {
        RuleEngine::for_discipline(discipline).sort(items, &self.context)
    }

    /// Computes the full schedule for a discipline.
    pub fn schedule(&self, items: &[Item], discipline: Discipline) -> Schedule {
        let order = self.execution_order(items, discipline);
        let schedule = accumulate(discipline, &order);
        debug!(
            %discipline,
            items = schedule.len(),
            total_time = schedule.total_time(),
            "schedule computed"
        );
        schedule
    }

    /// Schedules the same items under every discipline.
    pub fn schedule_all(&self, items: &[Item]) -> Vec<Schedule> {
        Discipline::ALL
            .iter()
            .map(|&d| self.schedule(items, d))
            .collect()
    }
}

/// Converts an execution order into cumulative finish times.
///
/// Finish times saturate at `u64::MAX`.
pub fn accumulate(discipline: Discipline, order: &[Item]) -> Schedule {
    let mut schedule = Schedule::new(discipline);
    let mut time: u64 = 0;
    for item in order {
        time = time.saturating_add(item.burst_time);
        schedule.add_entry(ScheduleEntry::new(item.name.clone(), time));
    }
    schedule
}

/// FIFO schedule with the default context.
pub fn fifo(items: &[Item]) -> Schedule {
    SchedulingEngine::new().schedule(items, Discipline::Fifo)
}

/// SJF schedule with the default context.
pub fn sjf(items: &[Item]) -> Schedule {
    SchedulingEngine::new().schedule(items, Discipline::Sjf)
}

/// PRIORITY schedule with the default priority table.
pub fn priority_schedule(items: &[Item]) -> Schedule {
    SchedulingEngine::new().schedule(items, Discipline::Priority)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::items;

    fn example() -> Vec<Item> {
        items([("a.pdf", 3), ("b.txt", 1), ("c.mp4", 2)])
    }

    #[test]
    fn test_end_to_end_fifo() {
        assert_eq!(
            fifo(&example()).pairs(),
            vec![("a.pdf", 3), ("b.txt", 4), ("c.mp4", 6)]
        );
    }

    #[test]
    fn test_end_to_end_sjf() {
        assert_eq!(
            sjf(&example()).pairs(),
            vec![("b.txt", 1), ("c.mp4", 3), ("a.pdf", 6)]
        );
    }

    #[test]
    fn test_end_to_end_priority() {
        assert_eq!(
            priority_schedule(&example()).pairs(),
            vec![("a.pdf", 3), ("b.txt", 4), ("c.mp4", 6)]
        );
    }

    #[test]
    fn test_sjf_stability_example() {
        let list = items([("a", 5), ("b", 3), ("c", 5), ("d", 3)]);
        let schedule = sjf(&list);
        assert_eq!(schedule.order(), vec!["b", "d", "a", "c"]);
        assert_eq!(schedule.pairs(), vec![("b", 3), ("d", 6), ("a", 11), ("c", 16)]);
    }

    #[test]
    fn test_priority_tie_break_example() {
        let list = items([("report.pdf", 4), ("memo.pdf", 2)]);
        assert_eq!(
            priority_schedule(&list).pairs(),
            vec![("memo.pdf", 2), ("report.pdf", 6)]
        );
    }

    #[test]
    fn test_fifo_with_duplicate_bursts() {
        let list = items([("z", 2), ("y", 2), ("x", 2)]);
        assert_eq!(fifo(&list).order(), vec!["z", "y", "x"]);
    }

    #[test]
    fn test_empty_input() {
        for d in Discipline::ALL {
            let schedule = SchedulingEngine::new().schedule(&[], d);
            assert!(schedule.is_empty());
            assert_eq!(schedule.discipline, d);
            assert_eq!(schedule.total_time(), 0);
        }
    }

    #[test]
    fn test_total_time_is_sum_of_bursts() {
        let list = example();
        let total: u64 = list.iter().map(|i| i.burst_time).sum();
        for schedule in SchedulingEngine::new().schedule_all(&list) {
            assert_eq!(schedule.total_time(), total);
        }
    }

    #[test]
    fn test_identical_order_identical_schedule() {
        // Same order through different disciplines → same finish times.
        let list = example();
        let engine = SchedulingEngine::new();
        let a = engine.schedule(&list, Discipline::Fifo);
        let b = engine.schedule(&list, Discipline::Priority);
        assert_eq!(a.entries, b.entries);
    }

    #[test]
    fn test_custom_priorities() {
        let list = items([("a.pdf", 1), ("b.png", 1)]);
        let engine = SchedulingEngine::new()
            .with_priorities(PriorityTable::standard().with_priority("png", 0));
        assert_eq!(
            engine.schedule(&list, Discipline::Priority).order(),
            vec!["b.png", "a.pdf"]
        );
    }

    #[test]
    fn test_accumulate() {
        let schedule = accumulate(Discipline::Fifo, &items([("p", 4), ("q", 1)]));
        assert_eq!(schedule.pairs(), vec![("p", 4), ("q", 5)]);
        assert_eq!(schedule.burst_times(), vec![4, 1]);
    }

    #[test]
    fn test_accumulate_saturates_on_huge_bursts() {
        let list = items([("a", u64::MAX - 1), ("b", u64::MAX), ("c", 3)]);
        for schedule in SchedulingEngine::new().schedule_all(&list) {
            assert_eq!(schedule.len(), 3);
            assert_eq!(schedule.total_time(), u64::MAX);
            let finishes: Vec<u64> = schedule.entries.iter().map(|e| e.finish_time).collect();
            assert!(finishes.windows(2).all(|w| w[0] <= w[1]));
        }
    }
}
