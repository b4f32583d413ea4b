//! LRU Ordering Module
//!
//! Keyed storage whose iteration order is the recency order used for eviction.

use indexmap::IndexMap;

// == Recency Map ==
/// Ordered map where position encodes recency.
///
/// - Front (index 0) = least recently used
/// - Back (index len - 1) = most recently used
#[derive(Debug)]
pub struct RecencyMap<V> {
    entries: IndexMap<String, V>,
}

impl<V> Default for RecencyMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> RecencyMap<V> {
    // == Constructor ==
    /// Creates a new empty map.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    // == Insert ==
    /// Inserts or replaces a value and places it at the most recently used position.
    ///
    /// Returns the replaced value, if any.
    pub fn insert(&mut self, key: String, value: V) -> Option<V> {
        let (index, previous) = self.entries.insert_full(key, value);
        let last = self.entries.len() - 1;
        self.entries.move_index(index, last);
        previous
    }

    // == Get ==
    /// Returns a reference to the value without changing recency.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(key)
    }

    // == Touch ==
    /// Moves a key to the most recently used position.
    ///
    /// Returns false if the key is not present.
    pub fn touch(&mut self, key: &str) -> bool {
        match self.entries.get_index_of(key) {
            Some(index) => {
                let last = self.entries.len() - 1;
                self.entries.move_index(index, last);
                true
            }
            None => false,
        }
    }

    // == Remove ==
    /// Removes a key, preserving the relative order of the others.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        self.entries.shift_remove(key)
    }

    // == Pop Oldest ==
    /// Removes and returns the least recently used entry.
    pub fn pop_oldest(&mut self) -> Option<(String, V)> {
        self.entries.shift_remove_index(0)
    }

    /// Keeps only entries for which `keep` returns true; order is preserved.
    pub fn retain(&mut self, mut keep: impl FnMut(&str, &V) -> bool) {
        self.entries.retain(|key, value| keep(key.as_str(), &*value));
    }

    /// Iterates keys from least to most recently used.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn map_of(keys: &[&str]) -> RecencyMap<u32> {
        let mut map = RecencyMap::new();
        for (i, key) in keys.iter().enumerate() {
            map.insert(key.to_string(), i as u32);
        }
        map
    }

    #[test]
    fn test_new_map_is_empty() {
        let map: RecencyMap<u32> = RecencyMap::new();
        assert!(map.is_empty());
        assert_eq!(map.keys().next(), None);
    }

    #[test]
    fn test_insert_order_is_recency_order() {
        let map = map_of(&["key1", "key2", "key3"]);

        assert_eq!(map.len(), 3);
        assert_eq!(map.keys().next(), Some("key1"));
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["key1", "key2", "key3"]);
    }

    #[test]
    fn test_reinsert_moves_to_back() {
        let mut map = map_of(&["key1", "key2", "key3"]);

        let previous = map.insert("key1".to_string(), 99);

        assert_eq!(previous, Some(0));
        assert_eq!(map.len(), 3);
        assert_eq!(map.keys().next(), Some("key2"));
        assert_eq!(map.get("key1"), Some(&99));
    }

    #[test]
    fn test_touch_moves_to_back() {
        let mut map = map_of(&["a", "b", "c"]);

        assert!(map.touch("a"));

        assert_eq!(map.pop_oldest(), Some(("b".to_string(), 1)));
        assert_eq!(map.pop_oldest(), Some(("c".to_string(), 2)));
        assert_eq!(map.pop_oldest(), Some(("a".to_string(), 0)));
        assert_eq!(map.pop_oldest(), None);
    }

    #[test]
    fn test_touch_missing_key() {
        let mut map = map_of(&["a"]);
        assert!(!map.touch("missing"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut map = map_of(&["a", "b", "c", "d"]);

        assert_eq!(map.remove("b"), Some(1));
        assert_eq!(map.remove("nonexistent"), None);

        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["a", "c", "d"]);
    }

    #[test]
    fn test_retain_preserves_order() {
        let mut map = map_of(&["a", "b", "c", "d"]);

        map.retain(|_, value| value % 2 == 1);

        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["b", "d"]);
    }

    #[test]
    fn test_order_after_multiple_touches() {
        let mut map = map_of(&["a", "b", "c"]);

        map.touch("a");
        map.touch("c");
        map.touch("b");

        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["a", "c", "b"]);
    }
}
