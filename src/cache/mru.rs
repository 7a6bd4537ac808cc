//! MRU (Most-Recently-Used) cache policy.
//!
//! Unlike a conventional LRU cache, eviction removes the entry currently on
//! top of the recency stack - the one used most recently. The intended
//! workload is one where a just-read text is unlikely to be read again soon.
//!
//! The eviction decision uses the recency state as it stands before the
//! incoming item is inserted, so an incoming item never evicts itself.

use std::collections::HashMap;

use crate::cache::{CacheCore, CacheEntry, CachePolicy, Outcome, StatsSnapshot};
use crate::common::{CacheConfig, Result, TextId};
use crate::storage::SharedStore;

/// A bounded cache that evicts the most-recently-used entry.
pub struct MruCache {
    core: CacheCore,

    /// Resident entries, keyed by id.
    entries: HashMap<TextId, CacheEntry>,

    /// Recency stack (back = most recent = next victim).
    stack: Vec<TextId>,
}

impl MruCache {
    /// Create an MRU cache over the given store.
    ///
    /// # Errors
    /// Returns `Error::Config` if the configuration is invalid.
    pub fn new(config: CacheConfig, store: SharedStore) -> Result<Self> {
        Ok(Self {
            core: CacheCore::new(config, store)?,
            entries: HashMap::new(),
            stack: Vec::new(),
        })
    }

    /// Move an already-resident id to the top of the stack.
    fn promote(&mut self, id: TextId) {
        if let Some(pos) = self.stack.iter().position(|&t| t == id) {
            self.stack.remove(pos);
        }
        self.stack.push(id);
    }
}

impl CachePolicy for MruCache {
    fn request(&mut self, id: TextId) -> Result<(String, Outcome)> {
        self.core.check_id(id)?;
        let tick = self.core.tick();

        if let Some(entry) = self.entries.get_mut(&id) {
            self.core.record_hit();
            entry.touch(tick);
            let content = entry.content.clone();

            self.promote(id);
            return Ok((content, Outcome::Hit));
        }

        let (content, _elapsed) = self.core.fetch_on_miss(id)?;

        // Evict the current stack top before the incoming item is pushed.
        if self.entries.len() >= self.core.capacity {
            if let Some(most_recent) = self.stack.pop() {
                self.entries.remove(&most_recent);
            }
        }

        self.stack.push(id);
        self.entries
            .insert(id, CacheEntry::new(id, content.clone(), tick));

        self.core
            .check_bounds(self.name(), self.entries.len(), self.stack.len())?;

        Ok((content, Outcome::Miss))
    }

    /// Resident ids from stack bottom to top (top = next victim).
    fn snapshot(&self) -> Vec<TextId> {
        self.stack.clone()
    }

    fn stats(&self) -> StatsSnapshot {
        self.core.stats()
    }

    fn reset(&mut self) {
        self.entries.clear();
        self.stack.clear();
        self.core.reset();
    }

    fn name(&self) -> &'static str {
        "MRU"
    }
}
