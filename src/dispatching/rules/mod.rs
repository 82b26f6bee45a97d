//! Built-in dispatching rules.
//!
//! - **FIFO**: arrival order
//! - **SJF**: burst time
//! - **PRIORITY**: file-extension rank
//!
//! # Score Convention
//! All rules return lower scores for items that should run first.

use super::{DispatchingRule, RuleScore, SchedulingContext};
use crate::models::Item;

/// First In First Out.
///
/// Every item scores 0, so the engine's input-order tie-break keeps the
/// listing order unchanged.
#[derive(Debug, Clone, Copy)]
pub struct Fifo;

impl DispatchingRule for Fifo {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn evaluate(&self, _item: &Item, _context: &SchedulingContext) -> RuleScore {
        0
    }

    fn description(&self) -> &'static str {
        "First In First Out"
    }
}

/// Shortest Job First.
///
/// Prioritizes items with smaller burst times. Equal bursts keep their
/// input order; there is no secondary key.
#[derive(Debug, Clone, Copy)]
pub struct Sjf;

impl DispatchingRule for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn evaluate(&self, item: &Item, _context: &SchedulingContext) -> RuleScore {
        RuleScore::from(item.burst_time)
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

/// File-type priority.
///
/// Scores an item by the rank its extension maps to in
/// `context.priorities` (lower rank = more urgent).
#[derive(Debug, Clone, Copy)]
pub struct Priority;

impl DispatchingRule for Priority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, item: &Item, context: &SchedulingContext) -> RuleScore {
        RuleScore::from(context.priorities.priority_of(&item.name))
    }

    fn description(&self) -> &'static str {
        "File-Type Priority"
    }
}
