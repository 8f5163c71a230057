//! Form context
//!
//! Produces one labeled field per model attribute, prefilled from a single
//! instance when one is given.

use serde::Serialize;

use super::view::ViewContext;
use super::{ModelFields, RenderOptions, Renderable, View};
use crate::error::{ModelViewError, Result};
use crate::labels::{LabelStore, RankHints};

/// One labeled form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldView {
    /// Attribute key, used as the input name
    pub name: String,
    /// Display label
    pub label: String,
    /// Current value, if an instance was rendered
    pub value: Option<String>,
}

/// Form data ready for a template
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormView {
    /// Extra attributes for the form element
    pub attrs: Vec<(String, String)>,
    /// Fields in display order
    pub fields: Vec<FieldView>,
}

impl FormView {
    /// Field by attribute key
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldView> {
        self.fields.iter().find(|field| field.name == name)
    }
}

/// Renders one model instance (or none, for a blank form) as form fields
#[derive(Debug, Clone)]
pub struct FormViewContext {
    base: ViewContext,
}

impl FormViewContext {
    /// Create a form context over `labels`
    #[must_use]
    pub fn new(labels: LabelStore) -> Self {
        Self {
            base: ViewContext::new(labels),
        }
    }

    /// Set the rank hints used to order fields
    #[must_use]
    pub fn label_order(mut self, hints: RankHints) -> Self {
        self.base = self.base.label_order(hints);
        self
    }

    /// Read the value for label `key` from model field `field`
    #[must_use]
    pub fn alias(mut self, key: impl Into<String>, field: impl Into<String>) -> Self {
        self.base = self.base.alias(key, field);
        self
    }

    /// Shared context state
    #[must_use]
    pub const fn context(&self) -> &ViewContext {
        &self.base
    }

    /// Mutable shared context state
    pub fn context_mut(&mut self) -> &mut ViewContext {
        &mut self.base
    }
}

impl<M: ModelFields> Renderable<M> for FormViewContext {
    fn render(&self, instances: &[M], options: &RenderOptions) -> Result<View> {
        let instance = match instances {
            [] => None,
            [instance] => Some(instance),
            _ => {
                return Err(ModelViewError::InvalidArgument(format!(
                    "a form renders at most one instance, got {}",
                    instances.len()
                )))
            }
        };

        let ordered = self.base.ordered_labels();
        let values: Vec<Option<String>> = match instance {
            Some(instance) => self.base.values(&ordered, instance)?.into_iter().map(Some).collect(),
            None => vec![None; ordered.len()],
        };

        let fields = ordered
            .iter()
            .zip(values)
            .map(|((name, label), value)| FieldView {
                name: name.to_string(),
                label: label.to_string(),
                value,
            })
            .collect();

        Ok(View::Form(FormView {
            attrs: options.attrs.clone(),
            fields,
        }))
    }
}
