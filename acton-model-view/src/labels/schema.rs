//! Label declarations for model types
//!
//! [`LabelSchema`] builds the label chain of a model from the labels it
//! declares itself and the label stores of the models it extends. A model
//! that declares nothing and inherits nothing is rejected when it is built,
//! before any view can use it.
//!
//! # Examples
//!
//! ```rust
//! use acton_model_view::labels::{LabelMap, LabelSchema};
//!
//! # fn main() -> Result<(), acton_model_view::error::ModelViewError> {
//! let base = LabelSchema::new("Record")
//!     .labels(LabelMap::from([("id", "Id")]))
//!     .build()?;
//!
//! let mut person = LabelSchema::new("Person").base(&base).build()?;
//! assert_eq!(person.lookup("id")?, "Id");
//!
//! person.write_front("id", "New Id");
//! assert_eq!(base.lookup("id")?, "Id");
//! # Ok(())
//! # }
//! ```

use super::layer::Layer;
use super::map::LabelMap;
use super::store::LabelStore;
use crate::error::{ModelViewError, Result};

/// Labels a model declares for itself
#[derive(Debug, Clone)]
pub enum LabelSource {
    /// Plain key to label entries, promoted into the model's front layer
    Flat(LabelMap),
    /// An existing layer, shared with whoever else holds it
    Layer(Layer),
    /// An existing chain whose layers are shared
    Store(LabelStore),
}

impl From<LabelMap> for LabelSource {
    fn from(labels: LabelMap) -> Self {
        Self::Flat(labels)
    }
}

impl From<Layer> for LabelSource {
    fn from(layer: Layer) -> Self {
        Self::Layer(layer)
    }
}

impl From<LabelStore> for LabelSource {
    fn from(store: LabelStore) -> Self {
        Self::Store(store)
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for LabelSource {
    fn from(entries: [(K, V); N]) -> Self {
        Self::Flat(LabelMap::from(entries))
    }
}

/// Declaration of a model's labels
///
/// The resulting chain is, front to back:
///
/// 1. the model's own front layer (holding [`LabelSource::Flat`] entries, or
///    empty otherwise),
/// 2. the layers of a [`LabelSource::Layer`] or [`LabelSource::Store`],
/// 3. the layers of every base in declaration order.
///
/// A layer already in the chain is not added twice.
#[derive(Debug, Clone)]
pub struct LabelSchema {
    model: String,
    own: Option<LabelSource>,
    bases: Vec<LabelStore>,
}

impl LabelSchema {
    /// Start declaring labels for `model`
    #[must_use]
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            own: None,
            bases: Vec::new(),
        }
    }

    /// Declare the model's own labels
    #[must_use]
    pub fn labels(mut self, source: impl Into<LabelSource>) -> Self {
        self.own = Some(source.into());
        self
    }

    /// Inherit the labels of a base model
    #[must_use]
    pub fn base(mut self, store: &LabelStore) -> Self {
        self.bases.push(store.clone());
        self
    }

    /// Build the model's label chain
    ///
    /// # Errors
    ///
    /// Returns [`ModelViewError::MissingLabels`] when the model declares no
    /// labels and none of its bases contribute a layer.
    pub fn build(self) -> Result<LabelStore> {
        let mut inherited: Vec<Layer> = Vec::new();
        for layer in self.bases.iter().flat_map(LabelStore::layers) {
            push_unique(&mut inherited, layer);
        }

        let mut layers = match self.own {
            None if inherited.is_empty() => {
                tracing::error!(model = %self.model, "model declares no labels");
                return Err(ModelViewError::MissingLabels { model: self.model });
            }
            None => vec![Layer::new()],
            Some(LabelSource::Flat(labels)) => vec![Layer::from_labels(labels)],
            Some(LabelSource::Layer(layer)) => vec![Layer::new(), layer],
            Some(LabelSource::Store(store)) => {
                let mut layers = vec![Layer::new()];
                for layer in store.layers() {
                    push_unique(&mut layers, layer);
                }
                layers
            }
        };
        for layer in &inherited {
            push_unique(&mut layers, layer);
        }

        tracing::debug!(
            model = %self.model,
            bases = self.bases.len(),
            depth = layers.len(),
            "declared model labels"
        );
        Ok(LabelStore::from_layers(layers))
    }
}

fn push_unique(layers: &mut Vec<Layer>, layer: &Layer) {
    if !layers.iter().any(|held| held.ptr_eq(layer)) {
        layers.push(layer.clone());
    }
}

/// A model type with declared display labels
///
/// Implementors keep the store built by [`LabelSchema`] in a static so every
/// view of the model derives from the same layers. Build and check the
/// schema eagerly, at startup, and store the result. Unwrapping
/// [`LabelSchema::build`] inside a lazy initializer turns a
/// [`MissingLabels`](ModelViewError::MissingLabels) error into a panic on
/// first access.
///
/// # Examples
///
/// ```rust
/// use acton_model_view::error::ModelViewError;
/// use acton_model_view::labels::{LabelSchema, LabelStore, Labeled};
/// use once_cell::sync::OnceCell;
///
/// static PERSON_LABELS: OnceCell<LabelStore> = OnceCell::new();
///
/// struct Person;
///
/// impl Person {
///     fn declare() -> Result<(), ModelViewError> {
///         PERSON_LABELS.get_or_try_init(|| {
///             LabelSchema::new("Person").labels([("id", "Id")]).build()
///         })?;
///         Ok(())
///     }
/// }
///
/// impl Labeled for Person {
///     fn labels() -> &'static LabelStore {
///         static UNDECLARED: LabelStore = LabelStore::new();
///         PERSON_LABELS.get().unwrap_or(&UNDECLARED)
///     }
/// }
///
/// # fn main() -> Result<(), ModelViewError> {
/// Person::declare()?;
/// assert_eq!(Person::labels().lookup("id")?, "Id");
/// # Ok(())
/// # }
/// ```
pub trait Labeled {
    /// The model's declared label store
    fn labels() -> &'static LabelStore;
}
