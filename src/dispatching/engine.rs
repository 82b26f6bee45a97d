//! Rule engine for multi-criteria dispatching.
//!
//! Composes dispatching rules in sequence (primary rule, then tie-breaker
//! rules) and finishes with a deterministic final tie-break, so every
//! produced order is total and reproducible.

use std::cmp::Ordering;
use std::sync::Arc;

use super::{rules, DispatchingRule, RuleScore, SchedulingContext};
use crate::models::{Discipline, Item};

/// How ties are broken after all rules are exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TieBreaker {
    /// Keep the relative input order (stable).
    #[default]
    InputOrder,
    /// Lexicographic by item name (byte order, case-sensitive), then input order.
    ByName,
}

/// A composable rule engine for item ordering.
///
/// Rules are applied in sequence; a later rule is consulted only when all
/// earlier rules tie. The input index is always the last key, so the
/// ordering is stable regardless of the sort primitive.
///
/// # Example
/// ```
/// use file_sched::dispatching::{rules, RuleEngine, SchedulingContext};
/// use file_sched::models::items;
///
/// let engine = RuleEngine::new().with_rule(rules::Sjf);
/// let list = items([("a", 5), ("b", 3), ("c", 5), ("d", 3)]);
/// assert_eq!(engine.sort_indices(&list, &SchedulingContext::new()), vec![1, 3, 0, 2]);
/// ```
#[derive(Clone)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
    tie_breaker: TieBreaker,
}

impl RuleEngine {
    /// Creates an empty rule engine (input order is kept).
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            tie_breaker: TieBreaker::InputOrder,
        }
    }

    /// Builds the engine for a discipline.
    ///
    /// - FIFO: no reordering beyond arrival position.
    /// - SJF: burst time, stable on ties.
    /// - PRIORITY: extension rank, then name.
    pub fn for_discipline(discipline: Discipline) -> Self {
        match discipline {
            Discipline::Fifo => Self::new().with_rule(rules::Fifo),
            Discipline::Sjf => Self::new().with_rule(rules::Sjf),
            Discipline::Priority => Self::new()
                .with_rule(rules::Priority)
                .with_final_tie_breaker(TieBreaker::ByName),
        }
    }

    /// Adds a primary rule.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Adds a tie-breaking rule, consulted when all previous rules tie.
    pub fn with_tie_breaker<R: DispatchingRule + 'static>(self, rule: R) -> Self {
        self.with_rule(rule)
    }

    /// Sets the final tie-breaking strategy.
    pub fn with_final_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// Sorts items by priority (highest priority first).
    ///
    /// Returns indices into the original item slice.
    pub fn sort_indices(&self, items: &[Item], context: &SchedulingContext) -> Vec<usize> {
        if items.is_empty() {
            return Vec::new();
        }

        // One evaluation per item, not per comparison.
        let scores: Vec<Vec<RuleScore>> =
            items.iter().map(|i| self.evaluate(i, context)).collect();

        let mut indices: Vec<usize> = (0..items.len()).collect();
        indices.sort_by(|&a, &b| {
            scores[a]
                .cmp(&scores[b])
                .then_with(|| self.final_tie_break(&items[a], &items[b]))
                .then_with(|| a.cmp(&b))
        });
        indices
    }

    /// Sorts items into a new vector in execution order.
    pub fn sort(&self, items: &[Item], context: &SchedulingContext) -> Vec<Item> {
        self.sort_indices(items, context)
            .into_iter()
            .map(|i| items[i].clone())
            .collect()
    }

    /// Returns the index of the highest-priority item.
    pub fn select_best(&self, items: &[Item], context: &SchedulingContext) -> Option<usize> {
        self.sort_indices(items, context).first().copied()
    }

    /// Evaluates a single item and returns scores from each rule.
    pub fn evaluate(&self, item: &Item, context: &SchedulingContext) -> Vec<RuleScore> {
        self.rules
            .iter()
            .map(|rule| rule.evaluate(item, context))
            .collect()
    }

    fn final_tie_break(&self, a: &Item, b: &Item) -> Ordering {
        match self.tie_breaker {
            TieBreaker::InputOrder => Ordering::Equal,
            TieBreaker::ByName => a.name.cmp(&b.name),
        }
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field(
                "rules",
                &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>(),
            )
            .field("tie_breaker", &self.tie_breaker)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::items;
    use crate::priority::PriorityTable;

    fn names(list: &[Item], indices: &[usize]) -> Vec<String> {
        indices.iter().map(|&i| list[i].name.clone()).collect()
    }

    #[test]
    fn test_empty_rules_keep_input_order() {
        let list = items([("c", 1), ("a", 2), ("b", 3)]);
        let engine = RuleEngine::new();
        let indices = engine.sort_indices(&list, &SchedulingContext::new());
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_fifo_keeps_listing_order() {
        let list = items([("z.zip", 1), ("a.pdf", 9), ("m.txt", 1)]);
        let engine = RuleEngine::for_discipline(Discipline::Fifo);
        let indices = engine.sort_indices(&list, &SchedulingContext::new());
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_fifo_ignores_custom_priorities() {
        let list = items([("a.png", 4), ("b.zip", 1), ("c.pdf", 2)]);
        let ctx = SchedulingContext::new()
            .with_priorities(PriorityTable::empty(20).with_priority("pdf", 1));
        let engine = RuleEngine::for_discipline(Discipline::Fifo);
        assert_eq!(
            names(&list, &engine.sort_indices(&list, &ctx)),
            vec!["a.png", "b.zip", "c.pdf"]
        );
    }

    #[test]
    fn test_sjf_is_stable() {
        let list = items([("a", 5), ("b", 3), ("c", 5), ("d", 3)]);
        let engine = RuleEngine::for_discipline(Discipline::Sjf);
        let indices = engine.sort_indices(&list, &SchedulingContext::new());
        assert_eq!(names(&list, &indices), vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_sjf_orders_bursts_above_i64_max() {
        let list = items([("big", u64::MAX / 2 + 10), ("small", 1), ("max", u64::MAX)]);
        let engine = RuleEngine::for_discipline(Discipline::Sjf);
        let indices = engine.sort_indices(&list, &SchedulingContext::new());
        assert_eq!(names(&list, &indices), vec!["small", "big", "max"]);
    }

    #[test]
    fn test_sjf_does_not_tie_break_by_name() {
        let list = items([("zeta", 2), ("alpha", 2)]);
        let engine = RuleEngine::for_discipline(Discipline::Sjf);
        let indices = engine.sort_indices(&list, &SchedulingContext::new());
        assert_eq!(names(&list, &indices), vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_priority_name_tie_break() {
        let list = items([("report.pdf", 4), ("memo.pdf", 2)]);
        let engine = RuleEngine::for_discipline(Discipline::Priority);
        let indices = engine.sort_indices(&list, &SchedulingContext::new());
        assert_eq!(names(&list, &indices), vec!["memo.pdf", "report.pdf"]);
    }

    #[test]
    fn test_priority_name_is_case_sensitive() {
        // Uppercase sorts before lowercase in byte order.
        let list = items([("b.txt", 1), ("B.txt", 1), ("a.txt", 1)]);
        let engine = RuleEngine::for_discipline(Discipline::Priority);
        let indices = engine.sort_indices(&list, &SchedulingContext::new());
        assert_eq!(names(&list, &indices), vec!["B.txt", "a.txt", "b.txt"]);
    }

    #[test]
    fn test_priority_ranks_then_unmapped() {
        let list = items([
            ("clip.mp4", 2),
            ("photo.png", 1),
            ("a.pdf", 3),
            ("b.txt", 1),
        ]);
        let engine = RuleEngine::for_discipline(Discipline::Priority);
        let indices = engine.sort_indices(&list, &SchedulingContext::new());
        assert_eq!(
            names(&list, &indices),
            vec!["a.pdf", "b.txt", "clip.mp4", "photo.png"]
        );
    }

    #[test]
    fn test_sequential_with_tie_breaker() {
        let list = items([("x.pdf", 5), ("y.pdf", 2), ("z.txt", 1)]);
        let engine = RuleEngine::new()
            .with_rule(rules::Priority)
            .with_tie_breaker(rules::Sjf);
        let indices = engine.sort_indices(&list, &SchedulingContext::new());
        // Both pdf rank 1 → SJF breaks it → y first.
        assert_eq!(names(&list, &indices), vec!["y.pdf", "x.pdf", "z.txt"]);
    }

    #[test]
    fn test_empty_items() {
        let ctx = SchedulingContext::new();
        let engine = RuleEngine::for_discipline(Discipline::Sjf);
        assert!(engine.sort_indices(&[], &ctx).is_empty());
        assert!(engine.select_best(&[], &ctx).is_none());
    }

    #[test]
    fn test_select_best() {
        let list = items([("long", 9), ("short", 1)]);
        let engine = RuleEngine::for_discipline(Discipline::Sjf);
        assert_eq!(engine.select_best(&list, &SchedulingContext::new()), Some(1));
    }

    #[test]
    fn test_evaluate_scores() {
        let item = Item::new("a.txt", 6);
        let engine = RuleEngine::new()
            .with_rule(rules::Priority)
            .with_rule(rules::Sjf);
        assert_eq!(engine.evaluate(&item, &SchedulingContext::new()), vec![4, 6]);
    }

    #[test]
    fn test_debug_lists_rules() {
        let engine = RuleEngine::for_discipline(Discipline::Priority);
        let repr = format!("{engine:?}");
        assert!(repr.contains("PRIORITY"));
        assert!(repr.contains("ByName"));
    }
}
