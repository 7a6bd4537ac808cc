//! LFU (Least-Frequently-Used) cache policy.
//!
//! Evicts the entry with the minimum access frequency. Among entries sharing
//! the minimum, the least recently accessed goes first; a logical clock
//! stamped on every access makes the tie-break deterministic and
//! reproducible for identical input sequences.

use std::collections::HashMap;

use crate::cache::{CacheCore, CacheEntry, CachePolicy, Outcome, StatsSnapshot};
use crate::common::{CacheConfig, Result, TextId};
use crate::storage::SharedStore;

/// A bounded cache that evicts the least-frequently-used entry.
pub struct LfuCache {
    core: CacheCore,

    /// Resident entries; frequency and last-access markers live on the entry.
    entries: HashMap<TextId, CacheEntry>,
}

impl LfuCache {
    /// Create an LFU cache over the given store.
    ///
    /// # Errors
    /// Returns `Error::Config` if the configuration is invalid.
    pub fn new(config: CacheConfig, store: SharedStore) -> Result<Self> {
        Ok(Self {
            core: CacheCore::new(config, store)?,
            entries: HashMap::new(),
        })
    }

    /// The id that would be evicted next: minimum frequency, then minimum
    /// last-access tick. Ids are distinct so the ordering is total.
    fn victim(&self) -> Option<TextId> {
        self.entries
            .values()
            .min_by_key(|e| (e.freq, e.last_access))
            .map(|e| e.id)
    }
}

impl CachePolicy for LfuCache {
    fn request(&mut self, id: TextId) -> Result<(String, Outcome)> {
        self.core.check_id(id)?;
        let tick = self.core.tick();

        if let Some(entry) = self.entries.get_mut(&id) {
            self.core.record_hit();
            entry.touch(tick);
            return Ok((entry.content.clone(), Outcome::Hit));
        }

        let (content, _elapsed) = self.core.fetch_on_miss(id)?;

        if self.entries.len() >= self.core.capacity {
            if let Some(victim) = self.victim() {
                self.entries.remove(&victim);
            }
        }

        self.entries
            .insert(id, CacheEntry::new(id, content.clone(), tick));

        self.core
            .check_bounds(self.name(), self.entries.len(), self.entries.len())?;

        Ok((content, Outcome::Miss))
    }

    /// Resident ids in eviction order: next victim first.
    fn snapshot(&self) -> Vec<TextId> {
        let mut order: Vec<&CacheEntry> = self.entries.values().collect();
        order.sort_by_key(|e| (e.freq, e.last_access));
        order.into_iter().map(|e| e.id).collect()
    }

    fn stats(&self) -> StatsSnapshot {
        self.core.stats()
    }

    fn reset(&mut self) {
        self.entries.clear();
        self.core.reset();
    }

    fn name(&self) -> &'static str {
        "LFU"
    }
}
