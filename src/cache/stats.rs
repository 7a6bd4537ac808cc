//! Per-cache statistics tracking.
//!
//! Counters are plain integers: each cache is exclusively owned and mutated
//! by one simulation loop at a time, so no atomics are needed.

use std::fmt;
use std::time::Duration;

/// Statistics tracked by one cache instance.
#[derive(Debug, Default)]
pub struct CacheStats {
    /// Number of requests satisfied from the cache.
    pub hits: u64,

    /// Number of requests that went to the backing store.
    pub misses: u64,

    /// Cumulative latency of all miss fetches.
    pub total_miss_time: Duration,
}

impl CacheStats {
    /// Create a stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculate cache hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Get a copy of the current counters for display/reporting.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            hits: self.hits,
            misses: self.misses,
            total_miss_time: self.total_miss_time,
        }
    }

    /// Reset all counters to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// A point-in-time copy of cache statistics.
///
/// Safe to print, compare, and hold after the run moves on.
///
/// # Example
/// ```
/// use textcache::cache::CacheStats;
///
/// let mut stats = CacheStats::new();
/// stats.hits = 7;
/// stats.misses = 3;
///
/// let snapshot = stats.snapshot();
/// assert_eq!(snapshot.hit_rate(), 0.7);
/// println!("{}", snapshot);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub hits: u64,
    pub misses: u64,
    pub total_miss_time: Duration,
}

impl StatsSnapshot {
    /// Total requests observed.
    pub fn total_requests(&self) -> u64 {
        self.hits + self.misses
    }

    /// Calculate cache hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        let total = self.total_requests();
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

impl fmt::Display for StatsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ hits: {}, misses: {}, hit_rate: {:.2}%, disk time: {:.4}s }}",
            self.hits,
            self.misses,
            self.hit_rate() * 100.0,
            self.total_miss_time.as_secs_f64()
        )
    }
}
