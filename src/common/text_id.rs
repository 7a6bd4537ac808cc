//! Text identifier type.
//!
//! Texts live in a fixed universe `1..=N` (N = 100 in the reference
//! deployment). The identifier is the cache key and the storage key.

use std::fmt;

/// Identifies a text in the backing store.
///
/// # Example
/// ```
/// use textcache::TextId;
///
/// let id = TextId::new(42);
/// assert!(id.in_universe(100));
/// assert!(!id.in_universe(40));
/// assert_eq!(id.0, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextId(pub u32);

impl TextId {
    /// Create a new TextId.
    #[inline]
    pub fn new(id: u32) -> Self {
        TextId(id)
    }

    /// Check whether this id falls inside the universe `1..=universe`.
    ///
    /// Zero is never a valid id; the universe starts at 1.
    #[inline]
    pub fn in_universe(&self, universe: u32) -> bool {
        self.0 >= 1 && self.0 <= universe
    }
}

impl fmt::Display for TextId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Text({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_id_new() {
        let id = TextId::new(42);
        assert_eq!(id.0, 42);
    }

    #[test]
    fn test_text_id_universe_bounds() {
        assert!(TextId::new(1).in_universe(100));
        assert!(TextId::new(100).in_universe(100));
        assert!(!TextId::new(0).in_universe(100));
        assert!(!TextId::new(101).in_universe(100));
    }

    #[test]
    fn test_text_id_ordering() {
        assert!(TextId::new(1) < TextId::new(2));
        assert!(TextId::new(5) > TextId::new(3));
    }

    #[test]
    fn test_text_id_display() {
        assert_eq!(format!("{}", TextId::new(42)), "Text(42)");
    }
}
