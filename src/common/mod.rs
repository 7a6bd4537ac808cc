//! Common types and utilities shared across textcache.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration values and their validation
//! - Error types
//! - The text identifier (TextId)

pub mod config;
pub mod error;
mod text_id;

pub use config::{CacheConfig, HotspotConfig, SimulationConfig};
pub use error::{Error, Result};
pub use text_id::TextId;
