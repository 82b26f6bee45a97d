//! Scheduling context for dispatching rule evaluation.

use crate::priority::PriorityTable;

/// State passed to dispatching rules.
///
/// Carries the priority table consulted by the priority rule. Arrival order
/// is always the input order.
#[derive(Debug, Clone, Default)]
pub struct SchedulingContext {
    /// Extension → rank table.
    pub priorities: PriorityTable,
}

impl SchedulingContext {
    /// Creates a context with the default priority table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the priority table.
    pub fn with_priorities(mut self, priorities: PriorityTable) -> Self {
        self.priorities = priorities;
        self
    }
}
