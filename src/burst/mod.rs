//! Synthetic burst-time assignment with per-directory caching.
//!
//! Each item name receives a burst time drawn uniformly from an inclusive
//! range the first time it is seen. The value is cached so that every
//! discipline run against the same directory selection sees the same
//! assignment, which keeps FIFO, SJF and priority results comparable.
//!
//! The cache is owned by the caller (usually a
//! [`SchedulerSession`](crate::session::SchedulerSession)) and cleared only
//! through [`BurstTimeAssigner::reset`] when the active directory changes.
//! Mutation goes through `&mut self`, so concurrent assignment and reset
//! cannot interleave without an outer lock.
//!
//! # Usage
//!
//! ```
//! use file_sched::burst::BurstTimeAssigner;
//!
//! let mut assigner = BurstTimeAssigner::seeded(42);
//! let first = assigner.assign("report.pdf");
//! assert_eq!(assigner.assign("report.pdf"), first);
//! assert!((1..=10).contains(&first));
//! ```

mod cache;

pub use cache::BurstCache;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::models::Item;

/// Inclusive range of synthetic burst times.
///
/// Always satisfies `1 <= min <= max`, so drawing from it never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BurstRange {
    min: u64,
    max: u64,
}

impl BurstRange {
    /// Lower bound of the default range.
    pub const DEFAULT_MIN: u64 = 1;
    /// Upper bound of the default range.
    pub const DEFAULT_MAX: u64 = 10;

    /// Creates a range, returning `None` unless `1 <= min <= max`.
    pub fn new(min: u64, max: u64) -> Option<Self> {
        if min >= 1 && min <= max {
            Some(Self { min, max })
        } else {
            None
        }
    }

    /// Lower bound (inclusive).
    pub fn min(&self) -> u64 {
        self.min
    }

    /// Upper bound (inclusive).
    pub fn max(&self) -> u64 {
        self.max
    }

    /// Whether `value` lies in the range.
    pub fn contains(&self, value: u64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    fn sample<R: Rng>(&self, rng: &mut R) -> u64 {
        rng.random_range(self.min..=self.max)
    }
}

impl Default for BurstRange {
    fn default() -> Self {
        Self {
            min: Self::DEFAULT_MIN,
            max: Self::DEFAULT_MAX,
        }
    }
}

/// Assigns and caches synthetic burst times by item name.
///
/// The random source is a type parameter so tests can inject a seeded
/// generator; production code uses an OS-seeded [`StdRng`].
#[derive(Debug, Clone)]
pub struct BurstTimeAssigner<R: Rng = StdRng> {
    cache: BurstCache,
    range: BurstRange,
    rng: R,
}

impl BurstTimeAssigner<StdRng> {
    /// Creates an assigner seeded from the operating system.
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Creates an assigner with a deterministic seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> BurstTimeAssigner<R> {
    /// Creates an assigner with the default range `[1, 10]`.
    pub fn new(rng: R) -> Self {
        Self {
            cache: BurstCache::new(),
            range: BurstRange::default(),
            rng,
        }
    }

    /// Sets the burst range.
    pub fn with_range(mut self, range: BurstRange) -> Self {
        self.range = range;
        self
    }

    /// Returns the cached burst for `name`, drawing and caching a new one
    /// on first encounter.
    pub fn assign(&mut self, name: &str) -> u64 {
        if let Some(burst) = self.cache.get(name) {
            trace!(name, burst, "burst cache hit");
            return burst;
        }
        let burst = self.range.sample(&mut self.rng);
        self.cache.insert(name, burst);
        trace!(name, burst, "burst assigned");
        burst
    }

    /// Assigns bursts to a listing, preserving its order.
    pub fn assign_all<S: AsRef<str>>(&mut self, names: &[S]) -> Vec<Item> {
        names
            .iter()
            .map(|n| {
                let name = n.as_ref();
                Item::new(name, self.assign(name))
            })
            .collect()
    }

    /// Clears every cached assignment.
    ///
    /// Call exactly when the active directory changes.
    pub fn reset(&mut self) {
        debug!(cleared = self.cache.len(), "burst cache reset");
        self.cache.clear();
    }

    /// Read-only view of the cache.
    pub fn cache(&self) -> &BurstCache {
        &self.cache
    }

    /// Configured range.
    pub fn range(&self) -> BurstRange {
        self.range
    }
}
