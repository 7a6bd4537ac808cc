//! Cache policies.
//!
//! The cache is a bounded map from [`TextId`](crate::common::TextId) to
//! resident content, plus per-policy ordering metadata that decides which
//! entry goes when the cache is full.
//!
//! # Components
//! - [`CachePolicy`] - The contract every policy implements
//! - [`FifoCache`] - Evicts the earliest-inserted entry, insensitive to hits
//! - [`LfuCache`] - Evicts the least-frequently-used entry, ties broken by recency
//! - [`MruCache`] - Evicts the most-recently-used entry (inverted recency)
//! - [`CacheStats`] / [`StatsSnapshot`] - Hit/miss/latency counters

mod core;
mod entry;
mod fifo;
mod lfu;
mod mru;
mod policy;
mod stats;

pub use entry::CacheEntry;
pub use fifo::FifoCache;
pub use lfu::LfuCache;
pub use mru::MruCache;
pub use policy::{build_policy, CachePolicy, Outcome, PolicyKind};
pub use stats::{CacheStats, StatsSnapshot};

pub(crate) use self::core::CacheCore;
