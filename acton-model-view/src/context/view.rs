//! Shared state of every view context

use indexmap::IndexMap;

use super::ModelFields;
use crate::error::{ModelViewError, Result};
use crate::labels::{LabelOrder, LabelStore, RankHints};

/// Labels and label order a context renders with
///
/// The context keeps its own derived [`LabelStore`], so label overrides made
/// for one context stay out of the model view and the model. Ordering is
/// computed on every render, so later writes to shared layers show up.
///
/// Field aliases map a label key to a differently named model field, for
/// models whose attribute names differ from the keys they are labeled by.
#[derive(Debug, Clone, Default)]
pub struct ViewContext {
    labels: LabelStore,
    label_order: RankHints,
    aliases: IndexMap<String, String>,
}

impl ViewContext {
    /// Create a context over `labels` with no rank hints
    #[must_use]
    pub fn new(labels: LabelStore) -> Self {
        Self {
            labels,
            label_order: RankHints::new(),
            aliases: IndexMap::new(),
        }
    }

    /// Set the rank hints used to order labels
    #[must_use]
    pub fn label_order(mut self, hints: RankHints) -> Self {
        self.label_order = hints;
        self
    }

    /// Read the value for label `key` from model field `field`
    #[must_use]
    pub fn alias(mut self, key: impl Into<String>, field: impl Into<String>) -> Self {
        self.set_alias(key, field);
        self
    }

    /// In-place form of [`alias`](Self::alias), returning the replaced field
    pub fn set_alias(&mut self, key: impl Into<String>, field: impl Into<String>) -> Option<String> {
        self.aliases.insert(key.into(), field.into())
    }

    /// Model field read for label `key`
    #[must_use]
    pub fn field_for<'a>(&'a self, key: &'a str) -> &'a str {
        self.aliases.get(key).map_or(key, String::as_str)
    }

    /// Labels this context renders with
    #[must_use]
    pub const fn labels(&self) -> &LabelStore {
        &self.labels
    }

    /// Mutable access for context-local label overrides
    pub fn labels_mut(&mut self) -> &mut LabelStore {
        &mut self.labels
    }

    /// Rank hints of this context
    #[must_use]
    pub const fn hints(&self) -> &RankHints {
        &self.label_order
    }

    /// Effective labels in display order
    #[must_use]
    pub fn ordered_labels(&self) -> LabelOrder {
        LabelOrder::new(&self.labels.materialize(), &self.label_order)
    }

    /// Field values of `instance` in the order of `ordered`
    ///
    /// # Errors
    ///
    /// Returns [`ModelViewError::MissingField`] naming the model field of
    /// the first labeled key the instance does not expose.
    pub fn values<M: ModelFields>(&self, ordered: &LabelOrder, instance: &M) -> Result<Vec<String>> {
        ordered
            .keys()
            .map(|key| {
                let field = self.field_for(key);
                instance.field(field).ok_or_else(|| ModelViewError::MissingField {
                    key: field.to_string(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::LabelMap;
    use crate::testing::{assert_order, Person};

    #[test]
    fn test_ordering_follows_later_writes() {
        let mut labels = LabelStore::from(LabelMap::from([("id", "Id"), ("name", "Name")])).derive();
        let context = ViewContext::new(labels.clone()).label_order(RankHints::from([("id", -1)]));

        labels.write_front("email", "Email");
        assert_order(&context.ordered_labels(), &["name", "email", "id"]);
    }

    #[test]
    fn test_values_in_label_order() {
        let context = ViewContext::new(LabelStore::from(LabelMap::from([
            ("email", "Email"),
            ("name", "Name"),
        ])));
        let ordered = context.ordered_labels();
        let values = context.values(&ordered, &Person::michael()).unwrap();
        assert_eq!(values, vec!["test@test.com", "Michael"]);
    }

    #[test]
    fn test_values_missing_field() {
        let context = ViewContext::new(LabelStore::from(LabelMap::from([("age", "Age")])));
        let ordered = context.ordered_labels();
        let err = context.values(&ordered, &Person::michael()).unwrap_err();
        assert_eq!(
            err,
            ModelViewError::MissingField {
                key: "age".to_string()
            }
        );
    }

    #[test]
    fn test_alias_reads_renamed_field() {
        let context = ViewContext::new(LabelStore::from(LabelMap::from([
            ("fn", "First Name"),
            ("email", "Email"),
        ])))
        .alias("fn", "name");

        assert_eq!(context.field_for("fn"), "name");
        assert_eq!(context.field_for("email"), "email");
        let values = context
            .values(&context.ordered_labels(), &Person::michael())
            .unwrap();
        assert_eq!(values, vec!["Michael", "test@test.com"]);
    }

    #[test]
    fn test_alias_to_missing_field_names_the_field() {
        let mut context = ViewContext::new(LabelStore::from(LabelMap::from([("fn", "First Name")])));
        assert!(context.set_alias("fn", "firstname").is_none());
        let err = context
            .values(&context.ordered_labels(), &Person::michael())
            .unwrap_err();
        assert_eq!(
            err,
            ModelViewError::MissingField {
                key: "firstname".to_string()
            }
        );
    }
}
