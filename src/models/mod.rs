//! Scheduling domain models.
//!
//! Provides the core data types for the file-scheduling simulation:
//! the items being scheduled, the discipline selector, and the resulting
//! schedule.
//!
//! # Domain Mappings
//!
//! | file-sched | CPU scheduling | Directory |
//! |------------|----------------|-----------|
//! | Item | Process | File |
//! | Burst time | CPU burst | Synthetic cost |
//! | Schedule | Completion order | Timeline |

mod discipline;
mod item;
mod schedule;

pub use discipline::{Discipline, ParseDisciplineError};
pub use item::{items, Item};
pub use schedule::{Schedule, ScheduleEntry};
