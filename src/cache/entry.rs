//! A resident cache entry.

use crate::common::TextId;

/// One resident text plus the bookkeeping the policies order by.
///
/// Owned exclusively by the cache that holds it: created on a miss-driven
/// insertion, destroyed on eviction or reset.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The cache key.
    pub id: TextId,

    /// Retrieved content, returned on every hit.
    pub content: String,

    /// Access count: 1 at insertion, +1 per hit. LFU's eviction key.
    pub freq: u64,

    /// Logical clock value of the last access (insertion counts).
    /// LFU's tie-break marker.
    pub last_access: u64,
}

impl CacheEntry {
    /// Create an entry for a freshly fetched text.
    pub fn new(id: TextId, content: String, tick: u64) -> Self {
        Self {
            id,
            content,
            freq: 1,
            last_access: tick,
        }
    }

    /// Record a hit at the given logical time.
    pub fn touch(&mut self, tick: u64) {
        self.freq += 1;
        self.last_access = tick;
    }
}
