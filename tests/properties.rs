//! Property tests for the scheduling engine.

use std::collections::HashMap;

use file_sched::models::{Discipline, Item};
use file_sched::priority::priority_of;
use file_sched::scheduler::SchedulingEngine;
use file_sched::timeline;
use proptest::prelude::*;

const EXTENSIONS: &[&str] = &["pdf", "docx", "txt", "mp4", "zip", "png", ""];

/// Item lists with unique names and bursts in [1, 10].
fn item_list() -> impl Strategy<Value = Vec<Item>> {
    prop::collection::vec((0usize..EXTENSIONS.len(), 1u64..=10), 0..24).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (ext, burst))| {
                let name = if EXTENSIONS[ext].is_empty() {
                    format!("file{i}")
                } else {
                    format!("file{i}.{}", EXTENSIONS[ext])
                };
                Item::new(name, burst)
            })
            .collect()
    })
}

fn discipline() -> impl Strategy<Value = Discipline> {
    prop::sample::select(Discipline::ALL.to_vec())
}

proptest! {
    #[test]
    fn prop_order_is_permutation(items in item_list(), d in discipline()) {
        let schedule = SchedulingEngine::new().schedule(&items, d);
        let mut scheduled: Vec<_> = schedule.order().into_iter().map(String::from).collect();
        let mut input: Vec<_> = items.iter().map(|i| i.name.clone()).collect();
        scheduled.sort();
        input.sort();
        prop_assert_eq!(scheduled, input);
    }

    #[test]
    fn prop_finish_times_accumulate(items in item_list(), d in discipline()) {
        let schedule = SchedulingEngine::new().schedule(&items, d);
        let bursts: HashMap<_, _> = items.iter().map(|i| (i.name.as_str(), i.burst_time)).collect();
        let mut previous = 0;
        for entry in &schedule.entries {
            prop_assert!(entry.finish_time > previous);
            prop_assert_eq!(entry.finish_time - previous, bursts[entry.name.as_str()]);
            previous = entry.finish_time;
        }
        prop_assert_eq!(schedule.total_time(), items.iter().map(|i| i.burst_time).sum::<u64>());
    }

    #[test]
    fn prop_fifo_is_identity(items in item_list()) {
        let schedule = SchedulingEngine::new().schedule(&items, Discipline::Fifo);
        let input: Vec<_> = items.iter().map(|i| i.name.as_str()).collect();
        prop_assert_eq!(schedule.order(), input);
    }

    #[test]
    fn prop_sjf_sorted_and_stable(items in item_list()) {
        let schedule = SchedulingEngine::new().schedule(&items, Discipline::Sjf);
        let position: HashMap<_, _> = items.iter().enumerate().map(|(i, it)| (it.name.as_str(), i)).collect();
        let bursts = schedule.burst_times();
        let names = schedule.order();
        for w in 0..names.len().saturating_sub(1) {
            prop_assert!(bursts[w] <= bursts[w + 1]);
            if bursts[w] == bursts[w + 1] {
                prop_assert!(position[names[w]] < position[names[w + 1]]);
            }
        }
    }

    #[test]
    fn prop_priority_sorted_by_rank_then_name(items in item_list()) {
        let schedule = SchedulingEngine::new().schedule(&items, Discipline::Priority);
        let names = schedule.order();
        for w in names.windows(2) {
            let key_a = (priority_of(w[0]), w[0]);
            let key_b = (priority_of(w[1]), w[1]);
            prop_assert!(key_a < key_b);
        }
    }

    #[test]
    fn prop_timeline_bursts_match(items in item_list(), d in discipline()) {
        let schedule = SchedulingEngine::new().schedule(&items, d);
        let rows = timeline::format(&schedule).rows;
        let bursts: HashMap<_, _> = items.iter().map(|i| (i.name.as_str(), i.burst_time)).collect();
        for row in &rows {
            prop_assert_eq!(row.burst_time, bursts[row.name.as_str()]);
            prop_assert_eq!(row.finish_time, row.start_time + row.burst_time);
        }
    }
}
