//! Run statistics and comparative reports.

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use crate::cache::{Outcome, PolicyKind};
use crate::common::TextId;

/// One simulated request: the id asked for, how it resolved, and how long
/// the call took. Produced per request and consumed immediately by
/// [`RunStatistics::record`]; not retained individually.
#[derive(Debug, Clone, Copy)]
pub struct AccessRecord {
    pub id: TextId,
    pub outcome: Outcome,
    pub latency: Duration,
}

/// Mutable per-run aggregate, created at the start of a (policy, pattern)
/// combination and finalized into a [`RunReport`] once the run completes.
#[derive(Debug, Default)]
pub struct RunStatistics {
    hits: u64,
    misses: u64,
    disk_time: Duration,
    per_item_accesses: HashMap<TextId, u64>,
    per_item_misses: HashMap<TextId, u64>,
    per_item_disk_time: HashMap<TextId, Duration>,
}

impl RunStatistics {
    /// Start an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one request into the aggregates.
    pub fn record(&mut self, record: &AccessRecord) {
        *self.per_item_accesses.entry(record.id).or_insert(0) += 1;

        match record.outcome {
            Outcome::Hit => self.hits += 1,
            Outcome::Miss => {
                self.misses += 1;
                self.disk_time += record.latency;
                *self.per_item_misses.entry(record.id).or_insert(0) += 1;
                *self
                    .per_item_disk_time
                    .entry(record.id)
                    .or_insert(Duration::ZERO) += record.latency;
            }
        }
    }

    /// Requests recorded so far.
    pub fn total_requests(&self) -> u64 {
        self.hits + self.misses
    }

    /// Access count for one id.
    pub fn accesses(&self, id: TextId) -> u64 {
        self.per_item_accesses.get(&id).copied().unwrap_or(0)
    }

    /// Cumulative disk time spent fetching one id.
    pub fn disk_time_for(&self, id: TextId) -> Duration {
        self.per_item_disk_time
            .get(&id)
            .copied()
            .unwrap_or(Duration::ZERO)
    }

    /// Seal the collector into a read-only report.
    pub fn finalize(self, policy: PolicyKind, pattern: String) -> RunReport {
        // Most-missed items, count descending, id ascending on ties
        let mut top_misses: Vec<(TextId, u64)> = self.per_item_misses.into_iter().collect();
        top_misses.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        top_misses.truncate(5);

        RunReport {
            policy,
            pattern,
            hits: self.hits,
            misses: self.misses,
            disk_time: self.disk_time,
            top_misses,
        }
    }
}

/// Finalized result of one (policy, pattern) combination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub policy: PolicyKind,
    pub pattern: String,
    pub hits: u64,
    pub misses: u64,
    pub disk_time: Duration,

    /// The five most-missed ids with their miss counts.
    pub top_misses: Vec<(TextId, u64)>,
}

impl RunReport {
    /// Total requests issued in this run.
    pub fn total_requests(&self) -> u64 {
        self.hits + self.misses
    }

    /// Hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        let total = self.total_requests();
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<4} | {:<24} | {:>5} hits | {:>5} misses | {:>6.2}% | disk {:.4}s",
            self.policy,
            self.pattern,
            self.hits,
            self.misses,
            self.hit_rate() * 100.0,
            self.disk_time.as_secs_f64()
        )
    }
}

/// The full comparison grid, one [`RunReport`] per (policy, pattern).
///
/// Carries the seed that produced it so any run can be replayed.
#[derive(Debug, Clone)]
pub struct ComparisonReport {
    pub seed: u64,
    pub capacity: usize,
    pub reports: Vec<RunReport>,
}

impl ComparisonReport {
    /// Reports for one policy, in pattern order.
    pub fn for_policy(&self, policy: PolicyKind) -> Vec<&RunReport> {
        self.reports.iter().filter(|r| r.policy == policy).collect()
    }

    /// The report with the best hit rate for a given pattern, if any.
    pub fn best_for_pattern(&self, pattern: &str) -> Option<&RunReport> {
        self.reports
            .iter()
            .filter(|r| r.pattern == pattern)
            .max_by(|a, b| {
                a.hit_rate()
                    .partial_cmp(&b.hit_rate())
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
    }
}

impl fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Cache policy comparison (capacity: {}, seed: {})",
            self.capacity, self.seed
        )?;

        for report in &self.reports {
            writeln!(f, "  {}", report)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u32, outcome: Outcome, ms: u64) -> AccessRecord {
        AccessRecord {
            id: TextId::new(id),
            outcome,
            latency: Duration::from_millis(ms),
        }
    }

    #[test]
    fn test_record_accumulates_hits_and_misses() {
        let mut stats = RunStatistics::new();

        stats.record(&record(1, Outcome::Miss, 10));
        stats.record(&record(1, Outcome::Hit, 0));
        stats.record(&record(2, Outcome::Miss, 10));

        assert_eq!(stats.total_requests(), 3);
        assert_eq!(stats.accesses(TextId::new(1)), 2);
        assert_eq!(stats.accesses(TextId::new(2)), 1);
    }

    #[test]
    fn test_disk_time_only_counts_misses() {
        let mut stats = RunStatistics::new();

        stats.record(&record(1, Outcome::Miss, 10));
        stats.record(&record(1, Outcome::Hit, 999)); // hit latency ignored
        stats.record(&record(2, Outcome::Miss, 5));

        assert_eq!(stats.disk_time_for(TextId::new(1)), Duration::from_millis(10));
        assert_eq!(stats.disk_time_for(TextId::new(2)), Duration::from_millis(5));
        assert_eq!(stats.disk_time_for(TextId::new(3)), Duration::ZERO);

        let report = stats.finalize(PolicyKind::Fifo, "uniform".into());
        assert_eq!(report.disk_time, Duration::from_millis(15));
    }

    #[test]
    fn test_top_misses_ordering() {
        let mut stats = RunStatistics::new();

        for _ in 0..3 {
            stats.record(&record(7, Outcome::Miss, 1));
        }
        for _ in 0..5 {
            stats.record(&record(2, Outcome::Miss, 1));
        }
        // Ids 3 and 4 tie at one miss each; the lower id wins the tie
        stats.record(&record(4, Outcome::Miss, 1));
        stats.record(&record(3, Outcome::Miss, 1));

        let report = stats.finalize(PolicyKind::Lfu, "uniform".into());
        let ids: Vec<u32> = report.top_misses.iter().map(|(id, _)| id.0).collect();
        assert_eq!(ids, vec![2, 7, 3, 4]);
        assert_eq!(report.top_misses[0].1, 5);
    }

    #[test]
    fn test_top_misses_truncates_to_five() {
        let mut stats = RunStatistics::new();
        for i in 1..=10 {
            stats.record(&record(i, Outcome::Miss, 1));
        }

        let report = stats.finalize(PolicyKind::Mru, "uniform".into());
        assert_eq!(report.top_misses.len(), 5);
    }

    #[test]
    fn test_report_hit_rate() {
        let mut stats = RunStatistics::new();
        for _ in 0..7 {
            stats.record(&record(1, Outcome::Hit, 0));
        }
        for _ in 0..3 {
            stats.record(&record(2, Outcome::Miss, 1));
        }

        let report = stats.finalize(PolicyKind::Fifo, "uniform".into());
        assert_eq!(report.hit_rate(), 0.7);
        assert_eq!(report.total_requests(), 10);
    }

    #[test]
    fn test_comparison_report_queries() {
        let mk = |policy, pattern: &str, hits| RunReport {
            policy,
            pattern: pattern.into(),
            hits,
            misses: 100 - hits,
            disk_time: Duration::ZERO,
            top_misses: vec![],
        };

        let comparison = ComparisonReport {
            seed: 1,
            capacity: 10,
            reports: vec![
                mk(PolicyKind::Fifo, "uniform", 10),
                mk(PolicyKind::Lfu, "uniform", 30),
                mk(PolicyKind::Mru, "uniform", 20),
                mk(PolicyKind::Fifo, "hotspot", 40),
            ],
        };

        assert_eq!(comparison.for_policy(PolicyKind::Fifo).len(), 2);
        let best = comparison.best_for_pattern("uniform").unwrap();
        assert_eq!(best.policy, PolicyKind::Lfu);
    }
}
