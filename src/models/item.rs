//! Item (simulated process) model.
//!
//! An item is one file of the active directory viewed as a process:
//! a unique name and a synthetic burst time.

use serde::{Deserialize, Serialize};

/// A simulated process to be scheduled.
///
/// `name` is unique within a single scheduling run (a directory listing has
/// no duplicate file names). `burst_time` is at least 1 when produced by
/// [`BurstTimeAssigner`](crate::burst::BurstTimeAssigner).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    /// File name (unique per run).
    pub name: String,
    /// Synthetic processing cost in virtual time units.
    pub burst_time: u64,
}

impl Item {
    /// Creates a new item.
    pub fn new(name: impl Into<String>, burst_time: u64) -> Self {
        Self {
            name: name.into(),
            burst_time,
        }
    }
}

impl<S: Into<String>> From<(S, u64)> for Item {
    fn from((name, burst_time): (S, u64)) -> Self {
        Self::new(name, burst_time)
    }
}

/// Builds an item list from `(name, burst)` pairs.
pub fn items<S, I>(pairs: I) -> Vec<Item>
where
    S: Into<String>,
    I: IntoIterator<Item = (S, u64)>,
{
    pairs.into_iter().map(Item::from).collect()
}
