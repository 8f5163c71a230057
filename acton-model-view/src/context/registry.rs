//! Context registry
//!
//! Keeps the renderable contexts of a model view under their keys, in
//! registration order.

use std::fmt;

use indexmap::IndexMap;

use super::{ContextKey, Renderable};
use crate::error::{ModelViewError, Result};

type BoxedContext<M> = Box<dyn Renderable<M>>;

/// Registry of named contexts for one model type
///
/// Registering a key that already exists replaces the old context and moves
/// the key to the end.
pub struct ContextRegistry<M> {
    contexts: IndexMap<ContextKey, BoxedContext<M>>,
}

impl<M> Default for ContextRegistry<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> ContextRegistry<M> {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self {
            contexts: IndexMap::new(),
        }
    }

    /// Register a context, returning the one it replaced
    pub fn insert(&mut self, key: ContextKey, context: BoxedContext<M>) -> Option<BoxedContext<M>> {
        let replaced = self.contexts.shift_remove(&key);
        if replaced.is_some() {
            tracing::debug!(context = %key, "replacing registered context");
        }
        self.contexts.insert(key, context);
        replaced
    }

    /// Context registered under `key`
    #[must_use]
    pub fn get(&self, key: &ContextKey) -> Option<&dyn Renderable<M>> {
        self.contexts.get(key).map(|context| &**context)
    }

    /// Context registered under `key`, or an error
    ///
    /// # Errors
    ///
    /// Returns [`ModelViewError::ContextNotFound`] if nothing is registered
    /// under `key`.
    pub fn require(&self, key: &ContextKey) -> Result<&dyn Renderable<M>> {
        self.get(key)
            .ok_or_else(|| ModelViewError::ContextNotFound(key.to_string()))
    }

    /// Remove and return the context under `key`
    pub fn remove(&mut self, key: &ContextKey) -> Option<BoxedContext<M>> {
        self.contexts.shift_remove(key)
    }

    /// Whether a context is registered under `key`
    #[must_use]
    pub fn contains(&self, key: &ContextKey) -> bool {
        self.contexts.contains_key(key)
    }

    /// Registered keys in registration order
    pub fn keys(&self) -> impl Iterator<Item = &ContextKey> {
        self.contexts.keys()
    }

    /// Contexts whose key belongs to `group`
    pub fn group<'a>(
        &'a self,
        group: &'a str,
    ) -> impl Iterator<Item = (&'a ContextKey, &'a dyn Renderable<M>)> + 'a {
        self.contexts
            .iter()
            .filter(move |(key, _)| key.group() == group)
            .map(|(key, context)| (key, &**context))
    }

    /// Number of registered contexts
    #[must_use]
    pub fn len(&self) -> usize {
        self.contexts.len()
    }

    /// Whether no contexts are registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contexts.is_empty()
    }
}

impl<M> fmt::Debug for ContextRegistry<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.contexts.keys().map(ToString::to_string))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{RenderOptions, View};
    use crate::testing::Person;

    fn text(content: &'static str) -> BoxedContext<Person> {
        Box::new(move |_: &[Person], _: &RenderOptions| -> Result<View> {
            Ok(View::Text {
                content: content.to_string(),
            })
        })
    }

    fn key(raw: &str) -> ContextKey {
        raw.parse().unwrap()
    }

    #[test]
    fn test_registry_creation() {
        let registry = ContextRegistry::<Person>::new();
        assert!(registry.is_empty());
        assert!(registry.get(&key("default")).is_none());
    }

    #[test]
    fn test_keys_in_registration_order() {
        let mut registry = ContextRegistry::new();
        registry.insert(key("default"), text("default"));
        registry.insert(key("a"), text("a"));
        registry.insert(key("b"), text("b"));
        assert_eq!(
            registry.keys().map(ToString::to_string).collect::<Vec<_>>(),
            vec!["default", "a", "b"]
        );
    }

    #[test]
    fn test_insert_replaces_existing_key() {
        let mut registry = ContextRegistry::new();
        registry.insert(key("default"), text("first"));
        registry.insert(key("other"), text("other"));
        let replaced = registry.insert(key("default"), text("second"));

        assert!(replaced.is_some());
        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.keys().map(ToString::to_string).collect::<Vec<_>>(),
            vec!["other", "default"]
        );
        let view = registry
            .require(&key("default"))
            .unwrap()
            .render(&[], &RenderOptions::new())
            .unwrap();
        assert_eq!(view.as_text(), Some("second"));
    }

    #[test]
    fn test_require_missing() {
        let registry = ContextRegistry::<Person>::new();
        let err = registry.require(&key("table.wide")).err().unwrap();
        assert_eq!(err, ModelViewError::ContextNotFound("table.wide".to_string()));
    }

    #[test]
    fn test_group_lookup() {
        let mut registry = ContextRegistry::new();
        registry.insert(key("table"), text("table"));
        registry.insert(key("table.striped"), text("striped"));
        registry.insert(key("form"), text("form"));

        let grouped: Vec<String> = registry.group("table").map(|(k, _)| k.to_string()).collect();
        assert_eq!(grouped, vec!["table", "table.striped"]);
    }

    #[test]
    fn test_remove() {
        let mut registry = ContextRegistry::new();
        registry.insert(key("form"), text("form"));
        assert!(registry.remove(&key("form")).is_some());
        assert!(!registry.contains(&key("form")));
        assert!(registry.remove(&key("form")).is_none());
    }
}
