//! Scheduler configuration.
//!
//! Loaded from JSON; every field is optional and falls back to the
//! defaults (`[1, 10]` burst range, default priority table, rank 10 for
//! unmapped extensions, OS-seeded randomness).
//!
//! ```json
//! {
//!   "burst_min": 1,
//!   "burst_max": 10,
//!   "default_rank": 10,
//!   "priorities": { "png": 3 },
//!   "seed": 42
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::burst::{BurstRange, BurstTimeAssigner};
use crate::error::ConfigError;
use crate::priority::{PriorityTable, Rank, DEFAULT_RANK};

/// Tunables for a scheduling session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Smallest synthetic burst (inclusive).
    pub burst_min: u64,
    /// Largest synthetic burst (inclusive).
    pub burst_max: u64,
    /// Rank for extensions not in the table.
    pub default_rank: Rank,
    /// Extension → rank overrides on top of the default table.
    pub priorities: BTreeMap<String, Rank>,
    /// Fixed RNG seed; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            burst_min: BurstRange::DEFAULT_MIN,
            burst_max: BurstRange::DEFAULT_MAX,
            default_rank: DEFAULT_RANK,
            priorities: BTreeMap::new(),
            seed: None,
        }
    }
}

impl SchedulerConfig {
    /// Parses and validates a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON config file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Sets the burst range.
    pub fn with_burst_range(mut self, min: u64, max: u64) -> Self {
        self.burst_min = min;
        self.burst_max = max;
        self
    }

    /// Sets a fixed seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Adds an extension → rank override.
    pub fn with_priority(mut self, extension: impl Into<String>, rank: Rank) -> Self {
        self.priorities.insert(extension.into(), rank);
        self
    }

    /// Sets the fallback rank.
    pub fn with_default_rank(mut self, rank: Rank) -> Self {
        self.default_rank = rank;
        self
    }

    /// Checks range and rank consistency.
    ///
    /// Ranks must be at least 1 and the default rank must be strictly less
    /// urgent than every mapped rank.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.burst_range()?;
        for (ext, &rank) in &self.priorities {
            if rank == 0 {
                return Err(ConfigError::InvalidRank {
                    extension: ext.clone(),
                    reason: "ranks start at 1".into(),
                });
            }
        }
        let table = self.priority_table();
        if let Some(max) = table.max_mapped_rank() {
            if self.default_rank <= max {
                return Err(ConfigError::InvalidRank {
                    extension: "<default>".into(),
                    reason: format!(
                        "default rank {} must exceed every mapped rank (max {max})",
                        self.default_rank
                    ),
                });
            }
        }
        Ok(())
    }

    /// Validated burst range.
    pub fn burst_range(&self) -> Result<BurstRange, ConfigError> {
        BurstRange::new(self.burst_min, self.burst_max).ok_or(ConfigError::InvalidBurstRange {
            min: self.burst_min,
            max: self.burst_max,
        })
    }

    /// Default table with overrides and fallback rank applied.
    pub fn priority_table(&self) -> PriorityTable {
        self.priorities
            .iter()
            .fold(PriorityTable::standard(), |table, (ext, &rank)| {
                table.with_priority(ext, rank)
            })
            .with_default_rank(self.default_rank)
    }

    /// Builds a burst assigner from this config.
    pub fn assigner(&self) -> Result<BurstTimeAssigner, ConfigError> {
        let range = self.burst_range()?;
        let assigner = match self.seed {
            Some(seed) => BurstTimeAssigner::seeded(seed),
            None => BurstTimeAssigner::from_os_rng(),
        };
        Ok(assigner.with_range(range))
    }
}
