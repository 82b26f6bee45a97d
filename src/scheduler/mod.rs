//! Scheduling engine and KPI evaluation.
//!
//! # Algorithm
//!
//! `SchedulingEngine` orders items with the selected discipline's rule
//! engine and accumulates burst times into finish times in a single pass.
//! Execution is non-preemptive on one virtual processor.
//!
//! # KPI
//!
//! `ScheduleKpi` computes makespan, average turnaround, average and maximum
//! waiting time, and throughput, for comparing disciplines on the same
//! burst assignment.

mod kpi;
mod simple;

pub use kpi::ScheduleKpi;
pub use simple::{accumulate, fifo, priority_schedule, sjf, SchedulingEngine};
