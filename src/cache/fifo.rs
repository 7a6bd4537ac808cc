//! FIFO (First-In-First-Out) cache policy.
//!
//! Evicts the entry inserted earliest, regardless of subsequent hits.
//! Hits never alter the queue; that is FIFO's defining property versus
//! recency-based policies.

use std::collections::{HashMap, VecDeque};

use crate::cache::{CacheCore, CacheEntry, CachePolicy, Outcome, StatsSnapshot};
use crate::common::{CacheConfig, Result, TextId};
use crate::storage::SharedStore;

/// A bounded cache that evicts in insertion order.
pub struct FifoCache {
    core: CacheCore,

    /// Resident entries, keyed by id.
    entries: HashMap<TextId, CacheEntry>,

    /// Ids in insertion order (front = oldest = next victim).
    queue: VecDeque<TextId>,
}

impl FifoCache {
    /// Create a FIFO cache over the given store.
    ///
    /// # Errors
    /// Returns `Error::Config` if the configuration is invalid.
    pub fn new(config: CacheConfig, store: SharedStore) -> Result<Self> {
        Ok(Self {
            core: CacheCore::new(config, store)?,
            entries: HashMap::new(),
            queue: VecDeque::new(),
        })
    }
}

impl CachePolicy for FifoCache {
    fn request(&mut self, id: TextId) -> Result<(String, Outcome)> {
        self.core.check_id(id)?;
        let tick = self.core.tick();

        if let Some(entry) = self.entries.get_mut(&id) {
            self.core.record_hit();
            // Hits bump the entry's counters but never reorder the queue.
            entry.touch(tick);
            return Ok((entry.content.clone(), Outcome::Hit));
        }

        let (content, _elapsed) = self.core.fetch_on_miss(id)?;

        if self.entries.len() >= self.core.capacity {
            if let Some(oldest) = self.queue.pop_front() {
                self.entries.remove(&oldest);
            }
        }

        self.queue.push_back(id);
        self.entries
            .insert(id, CacheEntry::new(id, content.clone(), tick));

        self.core
            .check_bounds(self.name(), self.entries.len(), self.queue.len())?;

        Ok((content, Outcome::Miss))
    }

    /// Resident ids from oldest (next victim) to newest.
    fn snapshot(&self) -> Vec<TextId> {
        self.queue.iter().copied().collect()
    }

    fn stats(&self) -> StatsSnapshot {
        self.core.stats()
    }

    fn reset(&mut self) {
        self.entries.clear();
        self.queue.clear();
        self.core.reset();
    }

    fn name(&self) -> &'static str {
        "FIFO"
    }
}
