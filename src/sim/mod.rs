//! Simulation of cache policies under synthetic workloads.
//!
//! The runner composes generator + policy + collector across every
//! (policy, pattern) combination and aggregates the results into a
//! comparative report. It holds no eviction logic of its own; policy
//! correctness stays independently testable.
//!
//! # Components
//! - [`SimulationRunner`] - Drives the full comparison grid
//! - [`RunStatistics`] - Mutable per-run collector
//! - [`RunReport`] / [`ComparisonReport`] - Finalized, read-only results

mod report;
mod runner;

pub use report::{AccessRecord, ComparisonReport, RunReport, RunStatistics};
pub use runner::SimulationRunner;
