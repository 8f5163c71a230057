//! Shared label layers
//!
//! A [`Layer`] is one level of label overrides. Cloning a layer hands out
//! another reference to the same labels; a write through any reference is
//! seen by every [`LabelStore`](super::LabelStore) holding it.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use super::map::LabelMap;

/// One shared mapping of key to label within a layer chain
///
/// Identity is the shared allocation, not the contents: two empty layers
/// are distinct layers.
#[derive(Clone, Default)]
pub struct Layer {
    labels: Arc<RwLock<LabelMap>>,
}

impl Layer {
    /// Create an empty layer
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a layer holding `labels`
    #[must_use]
    pub fn from_labels(labels: impl Into<LabelMap>) -> Self {
        Self {
            labels: Arc::new(RwLock::new(labels.into())),
        }
    }

    /// Label for a key in this layer only
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.labels.read().get(key).map(str::to_owned)
    }

    /// Write a label into this layer, returning the previous one
    pub fn insert(&self, key: impl Into<String>, label: impl Into<String>) -> Option<String> {
        self.labels.write().insert(key, label)
    }

    /// Write several labels into this layer
    pub fn extend<K, V, I>(&self, labels: I)
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        self.labels.write().extend(labels);
    }

    /// Whether this layer defines a key
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.labels.read().contains_key(key)
    }

    /// Number of labels defined in this layer
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.read().len()
    }

    /// Whether this layer defines no labels
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.read().is_empty()
    }

    /// Copy of the labels currently in this layer
    #[must_use]
    pub fn snapshot(&self) -> LabelMap {
        self.labels.read().clone()
    }

    /// Whether both handles refer to the same layer
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.labels, &other.labels)
    }

    pub(crate) fn merge_into(&self, target: &mut LabelMap) {
        let labels = self.labels.read();
        for (key, label) in labels.iter() {
            target.insert(key, label);
        }
    }
}

impl From<LabelMap> for Layer {
    fn from(labels: LabelMap) -> Self {
        Self::from_labels(labels)
    }
}

impl fmt::Debug for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.labels.read().iter()).finish()
    }
}
