//! Scheduling session: directory selection, burst cache and run pipeline.
//!
//! A session owns the active directory and the burst assigner. Selecting a
//! directory is the only operation that clears the burst cache, so every
//! discipline run within one selection is compared against the same burst
//! assignment.
//!
//! # Pipeline
//!
//! list files → assign bursts → order + accumulate → format timeline
//!
//! # Example
//!
//! ```
//! use file_sched::listing::StaticLister;
//! use file_sched::models::Discipline;
//! use file_sched::session::SchedulerSession;
//! use file_sched::burst::BurstTimeAssigner;
//!
//! let lister = StaticLister::new().with_dir("/docs", ["b.txt", "a.pdf"]);
//! let mut session = SchedulerSession::new(lister, BurstTimeAssigner::seeded(1));
//! session.select_directory("/docs");
//!
//! let run = session.run(Discipline::Priority).unwrap();
//! assert_eq!(run.timeline.rows[0].name, "a.pdf");
//! ```

use rand::rngs::StdRng;
use rand::Rng;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::burst::BurstTimeAssigner;
use crate::config::SchedulerConfig;
use crate::error::{ConfigError, RunWarning, SessionError};
use crate::listing::{DirectoryLister, FsLister};
use crate::models::{Discipline, Item};
use crate::scheduler::{ScheduleKpi, SchedulingEngine};
use crate::timeline::{self, Timeline};

/// Result of one discipline run.
#[derive(Debug, Clone, Serialize)]
pub struct Run {
    /// Discipline used.
    pub discipline: Discipline,
    /// Formatted schedule.
    pub timeline: Timeline,
    /// Performance indicators.
    pub kpi: ScheduleKpi,
    /// Non-fatal conditions (e.g. empty directory).
    pub warnings: Vec<RunWarning>,
}

impl Run {
    /// Whether the run produced no rows.
    pub fn is_empty(&self) -> bool {
        self.timeline.is_empty()
    }
}

/// Owns the active directory and the burst cache.
///
/// Not meant for concurrent use: runs and directory changes take
/// `&mut self`. Wrap the session in a mutex if several callers share it.
#[derive(Debug)]
pub struct SchedulerSession<L: DirectoryLister = FsLister, R: Rng = StdRng> {
    lister: L,
    assigner: BurstTimeAssigner<R>,
    engine: SchedulingEngine,
    current_dir: Option<PathBuf>,
}

impl SchedulerSession<FsLister, StdRng> {
    /// Builds a filesystem-backed session from a config.
    pub fn from_config(config: &SchedulerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let session = Self::new(FsLister::new(), config.assigner()?)
            .with_engine(SchedulingEngine::new().with_priorities(config.priority_table()));
        Ok(session)
    }
}

impl<L: DirectoryLister, R: Rng> SchedulerSession<L, R> {
    /// Creates a session with no directory selected.
    pub fn new(lister: L, assigner: BurstTimeAssigner<R>) -> Self {
        Self {
            lister,
            assigner,
            engine: SchedulingEngine::new(),
            current_dir: None,
        }
    }

    /// Sets the scheduling engine (e.g. with a custom priority table).
    pub fn with_engine(mut self, engine: SchedulingEngine) -> Self {
        self.engine = engine;
        self
    }

    /// Selects the active directory and clears the burst cache.
    ///
    /// Re-selecting the current directory also clears the cache.
    pub fn select_directory(&mut self, dir: impl Into<PathBuf>) {
        let dir = dir.into();
        info!(dir = %dir.display(), "directory selected");
        self.assigner.reset();
        self.current_dir = Some(dir);
    }

    /// The active directory, if any.
    pub fn current_dir(&self) -> Option<&Path> {
        self.current_dir.as_deref()
    }

    /// The burst assigner (read-only).
    pub fn assigner(&self) -> &BurstTimeAssigner<R> {
        &self.assigner
    }

    /// Lists the active directory alphabetically, for browsing views.
    pub fn browse(&self) -> Result<Vec<String>, SessionError> {
        let dir = self.require_dir()?;
        Ok(self.lister.list_sorted_by_name(dir)?)
    }

    /// Lists the active directory in arrival order and attaches bursts.
    pub fn processes(&mut self) -> Result<Vec<Item>, SessionError> {
        let names = self.lister.list_files(self.require_dir()?)?;
        let items = self.assigner.assign_all(names.as_slice());
        debug!(items = items.len(), cached = self.assigner.cache().len(), "processes built");
        Ok(items)
    }

    /// Runs one discipline over the active directory.
    pub fn run(&mut self, discipline: Discipline) -> Result<Run, SessionError> {
        let items = self.processes()?;
        Ok(self.run_items(&items, discipline))
    }

    /// Runs every discipline against one shared burst assignment.
    pub fn run_all(&mut self) -> Result<Vec<Run>, SessionError> {
        let items = self.processes()?;
        Ok(Discipline::ALL
            .iter()
            .map(|&d| self.run_items(&items, d))
            .collect())
    }

    fn run_items(&self, items: &[Item], discipline: Discipline) -> Run {
        let schedule = self.engine.schedule(items, discipline);
        let mut warnings = Vec::new();
        if schedule.is_empty() {
            warn!(%discipline, "no items to schedule");
            warnings.push(RunWarning::EmptyInput);
        }
        Run {
            discipline,
            kpi: ScheduleKpi::calculate(&schedule),
            timeline: timeline::format(&schedule),
            warnings,
        }
    }

    fn require_dir(&self) -> Result<&Path, SessionError> {
        self.current_dir
            .as_deref()
            .ok_or(SessionError::NoDirectorySelected)
    }
}
