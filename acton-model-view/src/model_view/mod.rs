//! Model views
//!
//! A [`ModelView`] pairs a labeled model type with named view contexts. The
//! view derives its own label store from the model's declared labels, so
//! overrides made on the view never leak back to the model, and every
//! registered context derives once more from the view.
//!
//! # Examples
//!
//! ```rust
//! use acton_model_view::prelude::*;
//!
//! struct Person {
//!     id: u32,
//!     name: String,
//! }
//!
//! impl ModelFields for Person {
//!     fn field(&self, key: &str) -> Option<String> {
//!         match key {
//!             "id" => Some(self.id.to_string()),
//!             "name" => Some(self.name.clone()),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! # fn main() -> Result<(), ModelViewError> {
//! let labels = LabelSchema::new("Person")
//!     .labels([("id", "Id"), ("name", "Name")])
//!     .build()?;
//!
//! let mut view = ModelView::<Person>::with_labels(&labels);
//! view.register_table("table", RankHints::from([("id", -1)]))?;
//!
//! let person = Person { id: 7, name: "Ada".to_string() };
//! let rendered = view.render("table", &[person], &RenderOptions::new())?;
//! let table = rendered.as_table().unwrap();
//! assert_eq!(table.header, Some(vec!["Name".to_string(), "Id".to_string()]));
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::config::{MissingLabelPolicy, ModelViewConfig, TableSettings};
use crate::context::{
    ContextKey, ContextRegistry, FormViewContext, ModelFields, RenderOptions, Renderable,
    TableViewContext, View,
};
use crate::error::{ModelViewError, Result};
use crate::labels::{LabelStore, Labeled, RankHints};

/// Named view contexts over one labeled model type
pub struct ModelView<M> {
    labels: LabelStore,
    contexts: ContextRegistry<M>,
    tables: TableSettings,
    missing_label: MissingLabelPolicy,
    model: PhantomData<fn(&M)>,
}

impl<M: Labeled + ModelFields> ModelView<M> {
    /// Create a view over the declared labels of `M`
    #[must_use]
    pub fn new() -> Self {
        Self::with_labels(M::labels())
    }
}

impl<M: Labeled + ModelFields> Default for ModelView<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: ModelFields> ModelView<M> {
    /// Create a view over an explicit label store
    ///
    /// The view writes to a layer derived from `labels`, never to `labels`
    /// itself.
    #[must_use]
    pub fn with_labels(labels: &LabelStore) -> Self {
        Self {
            labels: labels.derive(),
            contexts: ContextRegistry::new(),
            tables: TableSettings::default(),
            missing_label: MissingLabelPolicy::default(),
            model: PhantomData,
        }
    }

    /// Apply table defaults and the missing-label policy from configuration
    ///
    /// Only contexts registered afterwards pick up the table defaults.
    #[must_use]
    pub fn with_config(mut self, config: &ModelViewConfig) -> Self {
        self.configure(config);
        self
    }

    /// In-place form of [`with_config`](Self::with_config)
    pub fn configure(&mut self, config: &ModelViewConfig) -> &mut Self {
        self.tables = config.tables.clone();
        self.missing_label = config.labels.missing_label;
        self
    }

    /// Load configuration for `service_name` and apply it
    ///
    /// # Errors
    ///
    /// Returns [`ModelViewError::Config`] if the configuration cannot be
    /// loaded.
    pub fn configure_for_service(&mut self, service_name: &str) -> Result<&mut Self> {
        let config = ModelViewConfig::load_for_service(service_name)
            .map_err(|err| ModelViewError::Config(err.to_string()))?;
        Ok(self.configure(&config))
    }

    /// Labels of this view
    #[must_use]
    pub const fn labels(&self) -> &LabelStore {
        &self.labels
    }

    /// Mutable labels, for view-wide overrides
    ///
    /// Overrides written here reach contexts registered before and after,
    /// unless a context overrides the same key itself.
    pub fn labels_mut(&mut self) -> &mut LabelStore {
        &mut self.labels
    }

    /// Label for `key`, following the configured missing-label policy
    ///
    /// # Errors
    ///
    /// Returns [`ModelViewError::KeyNotFound`] for an unlabeled key when the
    /// policy is [`MissingLabelPolicy::Error`].
    pub fn label_for(&self, key: &str) -> Result<String> {
        match (self.labels.get(key), self.missing_label) {
            (Some(label), _) => Ok(label),
            (None, MissingLabelPolicy::RawKey) => Ok(key.to_string()),
            (None, MissingLabelPolicy::Error) => {
                Err(ModelViewError::KeyNotFound(key.to_string()))
            }
        }
    }

    /// Register a context built from a label store derived from this view
    ///
    /// Registering an existing key replaces its context.
    ///
    /// # Errors
    ///
    /// Returns [`ModelViewError::InvalidArgument`] if `key` is not a valid
    /// context key.
    pub fn register_context<C, F>(&mut self, key: &str, build: F) -> Result<&mut Self>
    where
        C: Renderable<M> + 'static,
        F: FnOnce(LabelStore) -> C,
    {
        let key: ContextKey = key.parse()?;
        let context = build(self.labels.derive());
        tracing::debug!(context = %key, "registering view context");
        self.contexts.insert(key, Box::new(context));
        Ok(self)
    }

    /// Register a table context using the configured table defaults
    ///
    /// # Errors
    ///
    /// Returns [`ModelViewError::InvalidArgument`] if `key` is not a valid
    /// context key.
    pub fn register_table(&mut self, key: &str, hints: RankHints) -> Result<&mut Self> {
        let settings = self.tables.clone();
        self.register_context(key, move |labels| {
            TableViewContext::from_settings(labels, &settings).label_order(hints)
        })
    }

    /// Register a form context
    ///
    /// # Errors
    ///
    /// Returns [`ModelViewError::InvalidArgument`] if `key` is not a valid
    /// context key.
    pub fn register_form(&mut self, key: &str, hints: RankHints) -> Result<&mut Self> {
        self.register_context(key, move |labels| {
            FormViewContext::new(labels).label_order(hints)
        })
    }

    /// Remove the context registered under `key`
    ///
    /// # Errors
    ///
    /// Returns [`ModelViewError::InvalidArgument`] for a malformed key and
    /// [`ModelViewError::ContextNotFound`] when nothing is registered.
    pub fn unregister(&mut self, key: &str) -> Result<()> {
        let key: ContextKey = key.parse()?;
        self.contexts
            .remove(&key)
            .map(|_| ())
            .ok_or_else(|| ModelViewError::ContextNotFound(key.to_string()))
    }

    /// Render `instances` with the context registered under `key`
    ///
    /// # Errors
    ///
    /// Returns [`ModelViewError::InvalidArgument`] for a malformed key,
    /// [`ModelViewError::ContextNotFound`] when nothing is registered under
    /// it, and any error of the context itself.
    pub fn render(&self, key: &str, instances: &[M], options: &RenderOptions) -> Result<View> {
        self.render_key(&key.parse()?, instances, options)
    }

    /// Render with an already parsed context key
    ///
    /// # Errors
    ///
    /// Returns [`ModelViewError::ContextNotFound`] when nothing is registered
    /// under `key`, and any error of the context itself.
    pub fn render_key(
        &self,
        key: &ContextKey,
        instances: &[M],
        options: &RenderOptions,
    ) -> Result<View> {
        let context = self.contexts.require(key)?;
        tracing::trace!(context = %key, instances = instances.len(), "rendering view");
        context.render(instances, options)
    }

    /// Render with a one-off context that is not registered
    ///
    /// # Errors
    ///
    /// Returns any error of the context.
    pub fn render_with<C: Renderable<M>>(
        &self,
        context: &C,
        instances: &[M],
        options: &RenderOptions,
    ) -> Result<View> {
        context.render(instances, options)
    }

    /// Whether a context is registered under `key`
    #[must_use]
    pub fn has_context(&self, key: &str) -> bool {
        key.parse::<ContextKey>()
            .is_ok_and(|key| self.contexts.contains(&key))
    }

    /// Registered context keys in registration order
    pub fn context_keys(&self) -> impl Iterator<Item = &ContextKey> {
        self.contexts.keys()
    }

    /// Registered contexts
    #[must_use]
    pub const fn contexts(&self) -> &ContextRegistry<M> {
        &self.contexts
    }
}

impl<M> fmt::Debug for ModelView<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelView")
            .field("labels", &self.labels)
            .field("contexts", &self.contexts)
            .field("missing_label", &self.missing_label)
            .finish_non_exhaustive()
    }
}
