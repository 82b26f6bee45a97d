//! CPU-scheduling simulation over the files of a directory.
//!
//! Each file is treated as a process with a synthetic burst time and a
//! priority derived from its extension, and is scheduled under FIFO,
//! Shortest-Job-First or priority dispatching on a single, non-preemptive
//! virtual processor.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Item`, `Discipline`, `Schedule`, `ScheduleEntry`
//! - **`burst`**: Burst-time assignment with a per-directory cache
//! - **`priority`**: Extension → priority rank resolution
//! - **`dispatching`**: Dispatching rules and the ordering rule engine
//! - **`scheduler`**: Scheduling engine (order + finish times) and KPIs
//! - **`timeline`**: Structured and text timelines for presentation
//! - **`validation`**: Input integrity checks (duplicate names, zero bursts)
//! - **`listing`**: Directory listing collaborators
//! - **`session`**: Directory selection, cache lifecycle and run pipeline
//! - **`config`**: JSON configuration
//!
//! # Example
//!
//! ```
//! use file_sched::models::{items, Discipline};
//! use file_sched::scheduler::SchedulingEngine;
//! use file_sched::timeline;
//!
//! let list = items([("a.pdf", 3), ("b.txt", 1), ("c.mp4", 2)]);
//! let schedule = SchedulingEngine::new().schedule(&list, Discipline::Fifo);
//! assert_eq!(schedule.pairs(), vec![("a.pdf", 3), ("b.txt", 4), ("c.mp4", 6)]);
//!
//! let rows = timeline::format(&schedule).rows;
//! assert_eq!(rows[1].burst_time, 1);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

pub mod burst;
pub mod config;
pub mod dispatching;
pub mod error;
pub mod listing;
pub mod models;
pub mod priority;
pub mod scheduler;
pub mod session;
pub mod telemetry;
pub mod timeline;
pub mod validation;

pub use burst::BurstTimeAssigner;
pub use config::SchedulerConfig;
pub use error::{ConfigError, DirectoryError, RunWarning, SessionError};
pub use models::{Discipline, Item, Schedule, ScheduleEntry};
pub use priority::PriorityTable;
pub use scheduler::SchedulingEngine;
pub use session::{Run, SchedulerSession};
pub use timeline::Timeline;
