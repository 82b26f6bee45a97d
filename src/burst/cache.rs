//! Name-keyed burst cache.

use std::collections::HashMap;

/// Mapping from item name to assigned burst time.
///
/// Entries are added lazily and never removed individually; the whole
/// cache is cleared on directory change.
#[derive(Debug, Clone, Default)]
pub struct BurstCache {
    entries: HashMap<String, u64>,
}

impl BurstCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached burst for `name`.
    pub fn get(&self, name: &str) -> Option<u64> {
        self.entries.get(name).copied()
    }

    /// Whether `name` has an assignment.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub(crate) fn insert(&mut self, name: &str, burst: u64) {
        self.entries.insert(name.to_string(), burst);
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of cached names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
