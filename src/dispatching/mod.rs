//! Dispatching rules and rule engine for ordering items.
//!
//! Provides the FIFO, SJF and priority dispatching rules and a composable
//! rule engine that turns them into a deterministic execution order.
//!
//! # Usage
//!
//! ```
//! use file_sched::dispatching::{rules, RuleEngine, SchedulingContext, TieBreaker};
//! use file_sched::models::items;
//!
//! let engine = RuleEngine::new()
//!     .with_rule(rules::Priority)
//!     .with_final_tie_breaker(TieBreaker::ByName);
//!
//! let list = items([("report.pdf", 4), ("memo.pdf", 2)]);
//! let order = engine.sort_indices(&list, &SchedulingContext::new());
//! assert_eq!(order, vec![1, 0]);
//! ```

mod context;
mod engine;
pub mod rules;

pub use context::SchedulingContext;
pub use engine::{RuleEngine, TieBreaker};

use crate::models::Item;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = higher priority (scheduled first). Wide enough to hold
/// any `u64` burst time without wrapping.
pub type RuleScore = i128;

/// A dispatching rule that evaluates item priority.
///
/// # Score Convention
/// **Lower score = higher priority.** Rules should return smaller values
/// for items that should run first.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF").
    fn name(&self) -> &'static str;

    /// Evaluates the priority of an item given the current context.
    ///
    /// Returns a score where lower = higher priority.
    fn evaluate(&self, item: &Item, context: &SchedulingContext) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
