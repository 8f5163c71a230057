//! Layered label store
//!
//! A [`LabelStore`] is an ordered chain of [`Layer`]s, most derived first.
//! Reading a key walks the chain from the front and returns the first hit.
//! [`LabelStore::derive`] puts a fresh layer in front of the same shared
//! layers, so a derived store can override labels without touching the
//! store it came from, while writes made on a shared layer stay visible to
//! every store holding it.
//!
//! # Examples
//!
//! ```rust
//! use acton_model_view::labels::{LabelMap, LabelStore, Layer};
//!
//! let base = Layer::from_labels(LabelMap::from([("id", "Id")]));
//! let store = LabelStore::from_layers(vec![base.clone()]);
//!
//! let mut derived = store.derive();
//! derived.write_front("id", "New Id");
//! assert_eq!(store.lookup("id").unwrap(), "Id");
//! assert_eq!(derived.lookup("id").unwrap(), "New Id");
//!
//! base.insert("email", "Email");
//! assert_eq!(derived.lookup("email").unwrap(), "Email");
//! ```

use super::layer::Layer;
use super::map::LabelMap;
use crate::error::{ModelViewError, Result};

/// Chain of shared label layers
///
/// Cloning a store shares both its layers and its front layer: writes with
/// [`write_front`](Self::write_front) on a clone are visible through the
/// original. Use [`derive`](Self::derive) for an isolated override context.
#[derive(Debug, Clone, Default)]
pub struct LabelStore {
    layers: Vec<Layer>,
}

impl LabelStore {
    /// Create a store with no layers
    #[must_use]
    pub const fn new() -> Self {
        Self { layers: Vec::new() }
    }

    /// Create a store from layers ordered front (most derived) to back
    #[must_use]
    pub const fn from_layers(layers: Vec<Layer>) -> Self {
        Self { layers }
    }

    /// Label for `key` from the first layer that defines it
    ///
    /// # Errors
    ///
    /// Returns [`ModelViewError::KeyNotFound`] when no layer defines `key`.
    pub fn lookup(&self, key: &str) -> Result<String> {
        self.get(key)
            .ok_or_else(|| ModelViewError::KeyNotFound(key.to_string()))
    }

    /// Label for `key`, or `None` when no layer defines it
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.layers.iter().find_map(|layer| layer.get(key))
    }

    /// Whether any layer defines `key`
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.layers.iter().any(|layer| layer.contains_key(key))
    }

    /// New store with an empty layer in front of this store's layers
    ///
    /// The existing layers are shared, not copied.
    #[must_use]
    pub fn derive(&self) -> Self {
        let mut layers = Vec::with_capacity(self.layers.len() + 1);
        layers.push(Layer::new());
        layers.extend(self.layers.iter().cloned());
        tracing::trace!(depth = layers.len(), "derived label store");
        Self { layers }
    }

    /// Write a label into this store's front layer
    ///
    /// A store without layers gets a fresh front layer first. Layers behind
    /// the front are never written.
    pub fn write_front(&mut self, key: impl Into<String>, label: impl Into<String>) -> &mut Self {
        if self.layers.is_empty() {
            self.layers.push(Layer::new());
        }
        self.layers[0].insert(key, label);
        self
    }

    /// Write a label into a specific, possibly shared, layer
    ///
    /// The write is visible through every store holding `layer`, whether or
    /// not this store holds it.
    pub fn write_layer(&self, layer: &Layer, key: impl Into<String>, label: impl Into<String>) {
        if !self.holds(layer) {
            tracing::debug!("writing to a layer outside this label store");
        }
        layer.insert(key, label);
    }

    /// Flatten the chain into one mapping, front layers winning
    ///
    /// Keys are ordered by first appearance from the back of the chain, so
    /// base labels lead and derived additions follow.
    #[must_use]
    pub fn materialize(&self) -> LabelMap {
        let mut flat = LabelMap::new();
        for layer in self.layers.iter().rev() {
            layer.merge_into(&mut flat);
        }
        flat
    }

    /// Effective keys, in [`materialize`](Self::materialize) order
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.materialize().into_iter().map(|(key, _)| key).collect()
    }

    /// Front (most derived) layer
    #[must_use]
    pub fn front(&self) -> Option<&Layer> {
        self.layers.first()
    }

    /// All layers, front to back
    #[must_use]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Number of layers in the chain
    #[must_use]
    pub fn depth(&self) -> usize {
        self.layers.len()
    }

    /// Whether this chain holds `layer`
    #[must_use]
    pub fn holds(&self, layer: &Layer) -> bool {
        self.layers.iter().any(|held| held.ptr_eq(layer))
    }
}

impl From<LabelMap> for LabelStore {
    fn from(labels: LabelMap) -> Self {
        Self::from_layers(vec![Layer::from_labels(labels)])
    }
}
