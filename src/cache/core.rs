//! Shared plumbing for every policy.
//!
//! Each policy owns a [`CacheCore`] that handles what the policies have in
//! common: id validation, the timed fetch through the shared store, hit/miss
//! accounting, the logical clock, and the post-insert invariant check. The
//! policies themselves only decide ordering and eviction.

use std::time::{Duration, Instant};

use crate::cache::{CacheStats, StatsSnapshot};
use crate::common::{CacheConfig, Error, Result, TextId};
use crate::storage::SharedStore;

pub(crate) struct CacheCore {
    /// Maximum resident entries. Immutable after construction.
    pub capacity: usize,

    /// Valid ids are `1..=universe`.
    pub universe: u32,

    /// The slow collaborator consulted on every miss.
    store: SharedStore,

    /// Hit/miss counters and cumulative miss latency.
    stats: CacheStats,

    /// Logical clock, incremented once per request (hit or miss).
    clock: u64,
}

impl CacheCore {
    /// Validate the configuration and wire up the store.
    pub fn new(config: CacheConfig, store: SharedStore) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            capacity: config.capacity,
            universe: config.universe,
            store,
            stats: CacheStats::new(),
            clock: 0,
        })
    }

    /// Advance the logical clock. Called once at the top of every request.
    pub fn tick(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }

    /// Reject ids outside the universe before any cache mutation.
    pub fn check_id(&self, id: TextId) -> Result<()> {
        if id.in_universe(self.universe) {
            Ok(())
        } else {
            Err(Error::InvalidTextId {
                id,
                universe: self.universe,
            })
        }
    }

    /// Record a hit.
    pub fn record_hit(&mut self) {
        self.stats.hits += 1;
    }

    /// Count a miss, then fetch from the store, timing the call.
    ///
    /// The miss is counted before the fetch so hits + misses always equals
    /// requests issued, even when the fetch fails. A failed fetch adds no
    /// latency and must not lead to an eviction or insertion.
    pub fn fetch_on_miss(&mut self, id: TextId) -> Result<(String, Duration)> {
        self.stats.misses += 1;

        let start = Instant::now();
        let content = self.store.lock().fetch(id)?;
        let elapsed = start.elapsed();

        self.stats.total_miss_time += elapsed;
        Ok((content, elapsed))
    }

    /// Verify eviction bookkeeping after an insertion.
    ///
    /// Fails loudly rather than silently correcting: a violation here means
    /// the policy's eviction logic is buggy.
    pub fn check_bounds(&self, name: &str, residents: usize, order_len: usize) -> Result<()> {
        if residents > self.capacity {
            return Err(Error::PolicyInvariant(format!(
                "{}: {} resident entries exceed capacity {}",
                name, residents, self.capacity
            )));
        }
        if residents != order_len {
            return Err(Error::PolicyInvariant(format!(
                "{}: entry map holds {} entries but ordering metadata tracks {}",
                name, residents, order_len
            )));
        }
        Ok(())
    }

    /// Current counters.
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    /// Zero the counters and the clock.
    pub fn reset(&mut self) {
        self.stats.reset();
        self.clock = 0;
    }
}
