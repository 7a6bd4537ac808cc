//! The simulation runner.
//!
//! Drives N simulated clients, each issuing M requests, against each
//! workload pattern, for each cache policy. A fresh cache is built per
//! (policy, pattern) combination; all combinations share one backing store
//! and one capacity so the comparison is apples to apples.

use std::sync::Arc;
use std::time::Instant;

use crate::cache::{build_policy, PolicyKind};
use crate::common::{Error, Result, SimulationConfig};
use crate::sim::{AccessRecord, ComparisonReport, RunStatistics};
use crate::storage::{self, MemoryStore, SharedStore};
use crate::workload::{AccessPattern, WorkloadGenerator};

/// Runs the full (policy × pattern) comparison grid.
///
/// # Example
/// ```
/// use textcache::common::SimulationConfig;
/// use textcache::sim::SimulationRunner;
/// use std::time::Duration;
///
/// let config = SimulationConfig {
///     seed: Some(7),
///     disk_delay: Duration::ZERO,
///     ..Default::default()
/// };
///
/// let report = SimulationRunner::new(config).unwrap().run().unwrap();
/// assert_eq!(report.reports.len(), 9); // 3 policies x 3 patterns
/// ```
pub struct SimulationRunner {
    config: SimulationConfig,
}

impl SimulationRunner {
    /// Validate the configuration and build a runner.
    ///
    /// # Errors
    /// Returns `Error::Config` before any run starts if a knob is unusable.
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The three patterns exercised by the comparison, built from config.
    fn patterns(&self) -> [AccessPattern; 3] {
        [
            AccessPattern::Uniform,
            AccessPattern::Poisson {
                lambda: self.config.poisson_lambda,
            },
            AccessPattern::Hotspot(self.config.hotspot),
        ]
    }

    /// Run every combination and aggregate the comparison report.
    ///
    /// The generator is reseeded to the same seed for every combination, so
    /// each policy sees an identical request stream per pattern. Clients run
    /// sequentially against the shared cache of their combination; requests
    /// are processed one at a time, end to end.
    pub fn run(&self) -> Result<ComparisonReport> {
        // Draw a fresh seed when none is configured, and report it so the
        // run can be replayed.
        let seed = self.config.seed.unwrap_or_else(rand::random);

        let universe = self.config.cache.universe;
        let store: SharedStore =
            storage::shared(MemoryStore::seeded(universe, self.config.disk_delay));

        let patterns = self.patterns();
        let mut generator = WorkloadGenerator::new(universe, seed);
        let mut reports = Vec::with_capacity(PolicyKind::ALL.len() * patterns.len());

        for kind in PolicyKind::ALL {
            for pattern in &patterns {
                generator.reseed(seed);

                let mut cache = build_policy(kind, self.config.cache, Arc::clone(&store))?;
                let mut stats = RunStatistics::new();

                for _client in 0..self.config.clients {
                    for _ in 0..self.config.requests_per_client {
                        let id = generator.draw(pattern);

                        // The generator owns this contract; breaking it is a
                        // bug, not user input.
                        if !id.in_universe(universe) {
                            return Err(Error::PolicyInvariant(format!(
                                "workload generator produced {} outside 1..={}",
                                id, universe
                            )));
                        }

                        let start = Instant::now();
                        let (_content, outcome) = cache.request(id)?;
                        let latency = start.elapsed();

                        stats.record(&AccessRecord {
                            id,
                            outcome,
                            latency,
                        });
                    }
                }

                reports.push(stats.finalize(kind, pattern.label()));
            }
        }

        Ok(ComparisonReport {
            seed,
            capacity: self.config.cache.capacity,
            reports,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn fast_config(seed: u64) -> SimulationConfig {
        SimulationConfig {
            seed: Some(seed),
            disk_delay: Duration::ZERO,
            ..Default::default()
        }
    }

    #[test]
    fn test_runner_rejects_bad_config() {
        let config = SimulationConfig {
            clients: 0,
            ..fast_config(1)
        };
        assert!(SimulationRunner::new(config).is_err());
    }

    #[test]
    fn test_run_covers_full_grid() {
        let report = SimulationRunner::new(fast_config(11)).unwrap().run().unwrap();

        assert_eq!(report.reports.len(), 9);
        for kind in PolicyKind::ALL {
            assert_eq!(report.for_policy(kind).len(), 3);
        }
    }

    #[test]
    fn test_every_run_conserves_requests() {
        let config = fast_config(11);
        let expected = (config.clients * config.requests_per_client) as u64;

        let report = SimulationRunner::new(config).unwrap().run().unwrap();
        for run in &report.reports {
            assert_eq!(
                run.total_requests(),
                expected,
                "{} / {} lost requests",
                run.policy,
                run.pattern
            );
        }
    }

    #[test]
    fn test_same_seed_reproduces_results() {
        let first = SimulationRunner::new(fast_config(42)).unwrap().run().unwrap();
        let second = SimulationRunner::new(fast_config(42)).unwrap().run().unwrap();

        assert_eq!(first.seed, second.seed);
        for (a, b) in first.reports.iter().zip(second.reports.iter()) {
            assert_eq!(a.hits, b.hits, "{} / {}", a.policy, a.pattern);
            assert_eq!(a.misses, b.misses);
            assert_eq!(a.top_misses, b.top_misses);
        }
    }

    #[test]
    fn test_unseeded_run_records_its_seed() {
        let config = SimulationConfig {
            seed: None,
            clients: 1,
            requests_per_client: 10,
            disk_delay: Duration::ZERO,
            ..Default::default()
        };

        let report = SimulationRunner::new(config.clone()).unwrap().run().unwrap();

        // Replaying with the recorded seed must reproduce the run
        let replay_config = SimulationConfig {
            seed: Some(report.seed),
            ..config
        };
        let replay = SimulationRunner::new(replay_config).unwrap().run().unwrap();

        for (a, b) in report.reports.iter().zip(replay.reports.iter()) {
            assert_eq!(a.hits, b.hits);
            assert_eq!(a.misses, b.misses);
        }
    }
}
