//! Insertion-ordered label mapping
//!
//! Iteration order is insertion order and re-inserting a key replaces its
//! value without moving it. Equality compares entries in order.

use indexmap::IndexMap;

/// Attribute key to display label, in insertion order
#[derive(Debug, Clone, Default)]
pub struct LabelMap {
    entries: IndexMap<String, String>,
}

impl LabelMap {
    /// Create an empty label map
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a label, returning the previous label for the key
    ///
    /// Existing keys keep their position.
    pub fn insert(&mut self, key: impl Into<String>, label: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), label.into())
    }

    /// Chaining variant of [`insert`](Self::insert)
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, label: impl Into<String>) -> Self {
        self.insert(key, label);
        self
    }

    /// Get the label for a key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Check whether a key is present
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Remove a key, returning its label
    ///
    /// The remaining keys keep their relative order.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.shift_remove(key)
    }

    /// Number of labels
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map holds no labels
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Labels in insertion order
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.entries.values().map(String::as_str)
    }

    /// `(key, label)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl PartialEq for LabelMap {
    fn eq(&self, other: &Self) -> bool {
        self.entries.iter().eq(other.entries.iter())
    }
}

impl Eq for LabelMap {}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for LabelMap {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, label) in iter {
            self.insert(key, label);
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LabelMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for LabelMap {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl IntoIterator for LabelMap {
    type Item = (String, String);
    type IntoIter = indexmap::map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_position() {
        let mut map = LabelMap::from([("id", "Id"), ("fn", "First Name")]);
        assert_eq!(map.insert("id", "Identifier"), Some("Id".to_string()));
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["id", "fn"]);
        assert_eq!(map.get("id"), Some("Identifier"));
    }

    #[test]
    fn test_remove() {
        let mut map = LabelMap::new().with("a", "A").with("b", "B");
        assert_eq!(map.remove("a"), Some("A".to_string()));
        assert_eq!(map.remove("a"), None);
        assert_eq!(map.len(), 1);
        assert!(!map.contains_key("a"));
    }

    #[test]
    fn test_remove_keeps_remaining_order() {
        let mut map = LabelMap::from([("a", "A"), ("b", "B"), ("c", "C")]);
        map.remove("a");
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["b", "c"]);
    }

    #[test]
    fn test_equality_is_order_sensitive() {
        let ab = LabelMap::from([("a", "A"), ("b", "B")]);
        let ba = LabelMap::from([("b", "B"), ("a", "A")]);
        assert_ne!(ab, ba);
        assert_eq!(ab, LabelMap::new().with("a", "A").with("b", "B"));
    }
}
