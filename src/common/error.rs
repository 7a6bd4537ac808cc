//! Error types for textcache.

use thiserror::Error;

use crate::common::TextId;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
/// This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in textcache.
///
/// By having a single error type, error handling stays consistent across
/// the storage, cache, and simulation layers.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error from the file-backed text store.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Requested text has no backing content in storage.
    ///
    /// Surfaced to the caller of `request()`; the cache never retries and
    /// never evicts anything on behalf of a text it could not fetch.
    #[error("{0} has no backing content in storage")]
    TextNotFound(TextId),

    /// The requested id falls outside the configured universe.
    ///
    /// Rejected before any cache mutation.
    #[error("{id} is outside the universe 1..={universe}")]
    InvalidTextId { id: TextId, universe: u32 },

    /// A configuration value is unusable (non-positive capacity, empty
    /// hotspot range, and so on). Fatal to the run being configured.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Internal eviction bookkeeping broke an invariant.
    ///
    /// This indicates a bug - resident count exceeded capacity or the
    /// ordering metadata disagreed with the entry map. Never expected in
    /// correct operation.
    #[error("cache invariant violated: {0}")]
    PolicyInvariant(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::TextNotFound(TextId::new(42));
        assert_eq!(
            format!("{}", err),
            "Text(42) has no backing content in storage"
        );

        let err = Error::InvalidTextId {
            id: TextId::new(0),
            universe: 100,
        };
        assert_eq!(format!("{}", err), "Text(0) is outside the universe 1..=100");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();

        match err {
            Error::Io(_) => {}
            _ => panic!("Expected Io error"),
        }
    }

    #[test]
    fn test_result_type_alias() {
        fn might_fail() -> Result<u32> {
            Ok(42)
        }

        assert_eq!(might_fail().unwrap(), 42);
    }
}
