//! The storage contract and the in-memory store.

use std::collections::HashMap;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use parking_lot::Mutex;

use crate::common::{Error, Result, TextId};

/// Source of text content consulted on every cache miss.
///
/// Implementations are single-threaded; the caller serializes access
/// (see [`SharedStore`]).
pub trait TextStore {
    /// Fetch the content for a text.
    ///
    /// # Errors
    /// Returns `Error::TextNotFound` if no backing content exists for `id`.
    fn fetch(&mut self, id: TextId) -> Result<String>;
}

/// A store handle that several caches can share within one comparison run.
///
/// The mutex serializes fetches the same way a single slow disk would.
pub type SharedStore = Arc<Mutex<dyn TextStore + Send>>;

/// Wrap a store for shared use.
pub fn shared<S: TextStore + Send + 'static>(store: S) -> SharedStore {
    Arc::new(Mutex::new(store))
}

/// In-memory text store with a configurable per-fetch delay.
///
/// The delay models the slow disk the cache is shielding; tests pass
/// `Duration::ZERO` to keep runs fast.
pub struct MemoryStore {
    texts: HashMap<TextId, String>,
    delay: Duration,
}

impl MemoryStore {
    /// Create an empty store. Every fetch fails until texts are inserted.
    pub fn new(delay: Duration) -> Self {
        Self {
            texts: HashMap::new(),
            delay,
        }
    }

    /// Create a store holding deterministic content for ids `1..=universe`.
    pub fn seeded(universe: u32, delay: Duration) -> Self {
        let texts = (1..=universe)
            .map(|i| {
                let id = TextId::new(i);
                (id, format!("Contents of text {} from the archive.", i))
            })
            .collect();

        Self { texts, delay }
    }

    /// Insert or replace the content for one text.
    pub fn insert(&mut self, id: TextId, content: impl Into<String>) {
        self.texts.insert(id, content.into());
    }

    /// Number of texts with backing content.
    pub fn len(&self) -> usize {
        self.texts.len()
    }

    /// Whether the store holds no texts at all.
    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }
}

impl TextStore for MemoryStore {
    fn fetch(&mut self, id: TextId) -> Result<String> {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }

        self.texts
            .get(&id)
            .cloned()
            .ok_or(Error::TextNotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_store_covers_universe() {
        let mut store = MemoryStore::seeded(5, Duration::ZERO);
        assert_eq!(store.len(), 5);

        for i in 1..=5 {
            let content = store.fetch(TextId::new(i)).unwrap();
            assert!(content.contains(&i.to_string()));
        }
    }

    #[test]
    fn test_missing_text_is_not_found() {
        let mut store = MemoryStore::seeded(5, Duration::ZERO);

        match store.fetch(TextId::new(6)) {
            Err(Error::TextNotFound(id)) => assert_eq!(id, TextId::new(6)),
            other => panic!("expected TextNotFound, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_empty_store() {
        let mut store = MemoryStore::new(Duration::ZERO);
        assert!(store.is_empty());
        assert!(store.fetch(TextId::new(1)).is_err());

        store.insert(TextId::new(1), "hello");
        assert_eq!(store.fetch(TextId::new(1)).unwrap(), "hello");
    }

    #[test]
    fn test_shared_store_serializes_access() {
        let store = shared(MemoryStore::seeded(3, Duration::ZERO));

        let first = store.lock().fetch(TextId::new(1)).unwrap();
        let second = store.lock().fetch(TextId::new(1)).unwrap();
        assert_eq!(first, second);
    }
}
