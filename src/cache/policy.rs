//! The policy contract and policy selection.

use std::fmt;
use std::str::FromStr;

use crate::cache::{FifoCache, LfuCache, MruCache, StatsSnapshot};
use crate::common::{CacheConfig, Error, Result, TextId};
use crate::storage::SharedStore;

/// Whether a request was satisfied from the cache or from storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The text was resident; no storage fetch happened.
    Hit,
    /// The text had to be fetched from the backing store.
    Miss,
}

impl Outcome {
    /// True for [`Outcome::Hit`].
    #[inline]
    pub fn is_hit(&self) -> bool {
        matches!(self, Outcome::Hit)
    }

    /// True for [`Outcome::Miss`].
    #[inline]
    pub fn is_miss(&self) -> bool {
        matches!(self, Outcome::Miss)
    }
}

/// The contract every eviction policy implements.
///
/// Every call to [`request`](CachePolicy::request) mutates the policy's
/// ordering state; skipping calls corrupts eviction order guarantees, so the
/// simulation loop routes each generated id straight through here.
pub trait CachePolicy {
    /// Look up a text, fetching and inserting on a miss.
    ///
    /// On a hit, returns the resident content and updates the policy's
    /// recency/frequency metadata. On a miss, fetches from the backing
    /// store, evicts first if at capacity, inserts, and returns the content.
    ///
    /// # Errors
    /// - `Error::InvalidTextId` if `id` falls outside the universe (no
    ///   cache mutation happens)
    /// - `Error::TextNotFound` if the store has no content for `id` (the
    ///   miss is counted, but nothing is evicted or inserted)
    /// - `Error::PolicyInvariant` if eviction bookkeeping broke an invariant
    fn request(&mut self, id: TextId) -> Result<(String, Outcome)>;

    /// Resident ids in eviction-relevant order, for diagnostic display.
    ///
    /// Each policy documents its own ordering: FIFO front-of-queue first,
    /// MRU bottom-of-stack first, LFU next-victim first.
    fn snapshot(&self) -> Vec<TextId>;

    /// Hit count, miss count, and cumulative miss latency.
    fn stats(&self) -> StatsSnapshot;

    /// Clear resident entries, ordering metadata, and statistics so the
    /// cache starts cold for the next workload pattern.
    fn reset(&mut self);

    /// Policy name for reports.
    fn name(&self) -> &'static str;
}

/// Selects one of the interchangeable policies at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyKind {
    Fifo,
    Lfu,
    Mru,
}

impl PolicyKind {
    /// Every policy, in report order.
    pub const ALL: [PolicyKind; 3] = [PolicyKind::Fifo, PolicyKind::Lfu, PolicyKind::Mru];

    /// Short name used in reports and selection.
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyKind::Fifo => "FIFO",
            PolicyKind::Lfu => "LFU",
            PolicyKind::Mru => "MRU",
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "fifo" => Ok(PolicyKind::Fifo),
            "lfu" => Ok(PolicyKind::Lfu),
            "mru" => Ok(PolicyKind::Mru),
            other => Err(Error::Config(format!("unknown cache policy '{}'", other))),
        }
    }
}

/// Construct a boxed policy of the selected kind.
///
/// # Errors
/// Returns `Error::Config` if the cache configuration is invalid.
pub fn build_policy(
    kind: PolicyKind,
    config: CacheConfig,
    store: SharedStore,
) -> Result<Box<dyn CachePolicy>> {
    Ok(match kind {
        PolicyKind::Fifo => Box::new(FifoCache::new(config, store)?),
        PolicyKind::Lfu => Box::new(LfuCache::new(config, store)?),
        PolicyKind::Mru => Box::new(MruCache::new(config, store)?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{self, MemoryStore};
    use std::time::Duration;

    #[test]
    fn test_policy_kind_from_str() {
        assert_eq!("fifo".parse::<PolicyKind>().unwrap(), PolicyKind::Fifo);
        assert_eq!("LFU".parse::<PolicyKind>().unwrap(), PolicyKind::Lfu);
        assert_eq!("Mru".parse::<PolicyKind>().unwrap(), PolicyKind::Mru);
        assert!("lru".parse::<PolicyKind>().is_err());
    }

    #[test]
    fn test_policy_kind_display() {
        assert_eq!(PolicyKind::Fifo.to_string(), "FIFO");
        assert_eq!(PolicyKind::Lfu.to_string(), "LFU");
        assert_eq!(PolicyKind::Mru.to_string(), "MRU");
    }

    #[test]
    fn test_build_policy_names_match_kind() {
        let config = CacheConfig::default();

        for kind in PolicyKind::ALL {
            let store = storage::shared(MemoryStore::seeded(100, Duration::ZERO));
            let cache = build_policy(kind, config, store).unwrap();
            assert_eq!(cache.name(), kind.as_str());
        }
    }

    #[test]
    fn test_build_policy_rejects_bad_config() {
        let store = storage::shared(MemoryStore::seeded(100, Duration::ZERO));
        let config = CacheConfig {
            capacity: 0,
            universe: 100,
        };
        assert!(build_policy(PolicyKind::Fifo, config, store).is_err());
    }

    #[test]
    fn test_outcome_predicates() {
        assert!(Outcome::Hit.is_hit());
        assert!(!Outcome::Hit.is_miss());
        assert!(Outcome::Miss.is_miss());
    }
}
