//! Backing text storage.
//!
//! Storage is the slow collaborator behind the cache: every miss pays one
//! `fetch()` here, and that latency is what the policies compete to avoid.
//!
//! # Components
//! - [`TextStore`] - The fetch contract
//! - [`MemoryStore`] - Deterministic in-memory texts with a simulated delay
//! - [`DirStore`] - One `text_<id>.txt` file per text in a directory

mod dir_store;
mod store;

pub use dir_store::DirStore;
pub use store::{shared, MemoryStore, SharedStore, TextStore};
