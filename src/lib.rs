//! textcache - A text-retrieval cache with interchangeable eviction policies.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      SimulationRunner (sim/)                │
//! │   WorkloadGenerator ──▶ CachePolicy ──▶ RunStatistics       │
//! │   (uniform/poisson/       (request)       (hits, misses,    │
//! │    hotspot streams)                        disk time)       │
//! ├─────────────────────────────────────────────────────────────┤
//! │              Cache Policies (cache/)  [Swappable]           │
//! │   ┌─────────────────────────────────────────────────────┐   │
//! │   │       Eviction Policies: FIFO | LFU | MRU           │   │
//! │   └─────────────────────────────────────────────────────┘   │
//! │              CachePolicy trait + CacheStats                 │
//! ├─────────────────────────────────────────────────────────────┤
//! │                  Storage Layer (storage/)                   │
//! │        TextStore trait: MemoryStore | DirStore              │
//! │            (simulated slow disk, NotFound)                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (TextId, Error, configuration)
//! - [`storage`] - The backing text store consulted on every cache miss
//! - [`cache`] - The policy contract and the FIFO / LFU / MRU caches
//! - [`workload`] - Seedable request-stream generation
//! - [`sim`] - The simulation runner and comparative reports
//!
//! # Quick Start
//! ```
//! use textcache::cache::{CachePolicy, FifoCache};
//! use textcache::common::{CacheConfig, TextId};
//! use textcache::storage::{self, MemoryStore};
//! use std::time::Duration;
//!
//! let store = storage::shared(MemoryStore::seeded(100, Duration::ZERO));
//! let mut cache = FifoCache::new(CacheConfig::default(), store).unwrap();
//!
//! let (content, outcome) = cache.request(TextId::new(42)).unwrap();
//! assert!(outcome.is_miss());
//! assert!(!content.is_empty());
//! ```

pub mod cache;
pub mod common;
pub mod sim;
pub mod storage;
pub mod workload;

// Re-export commonly used items at crate root for convenience
pub use cache::{CachePolicy, Outcome, PolicyKind, StatsSnapshot};
pub use common::{CacheConfig, Error, Result, SimulationConfig, TextId};
pub use sim::{ComparisonReport, RunReport, SimulationRunner};
pub use storage::{MemoryStore, SharedStore, TextStore};
pub use workload::{AccessPattern, WorkloadGenerator};
