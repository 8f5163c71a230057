//! View contexts for labeled models
//!
//! A context turns model instances into render-ready view data using the
//! model's labels in display order. Contexts never produce markup; the
//! [`View`] they return is serializable and meant for a template.
//!
//! Contexts are registered on a [`ModelView`](crate::model_view::ModelView)
//! under a [`ContextKey`] such as `table` or `table.compact`.

mod form;
mod registry;
mod table;
mod view;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{ModelViewError, Result};

pub use form::{FieldView, FormView, FormViewContext};
pub use registry::ContextRegistry;
pub use table::{TableView, TableViewContext};
pub use view::ViewContext;

/// Attribute access on a model instance
pub trait ModelFields {
    /// Display value of the attribute named `key`, or `None` if the model
    /// has no such attribute
    fn field(&self, key: &str) -> Option<String>;
}

/// Capability to render model instances into a [`View`]
///
/// Closures with the matching signature implement this trait, which is
/// handy for one-off contexts.
pub trait Renderable<M> {
    /// Render `instances` with the given options
    ///
    /// # Errors
    ///
    /// Returns an error when an instance lacks a labeled field or the
    /// context cannot render the given number of instances.
    fn render(&self, instances: &[M], options: &RenderOptions) -> Result<View>;
}

impl<M, F> Renderable<M> for F
where
    F: Fn(&[M], &RenderOptions) -> Result<View>,
{
    fn render(&self, instances: &[M], options: &RenderOptions) -> Result<View> {
        self(instances, options)
    }
}

/// Two-part context key: a group and an optional sub-key
///
/// The text form is `group` or `group.sub`. Parts are non-empty and contain
/// no dots.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContextKey {
    group: String,
    sub: Option<String>,
}

impl ContextKey {
    /// Key with a group only
    ///
    /// # Errors
    ///
    /// Returns [`ModelViewError::InvalidArgument`] if `group` is empty or
    /// contains a dot.
    pub fn new(group: impl Into<String>) -> Result<Self> {
        Ok(Self {
            group: validate_part(group.into())?,
            sub: None,
        })
    }

    /// Key with a group and a sub-key
    ///
    /// # Errors
    ///
    /// Returns [`ModelViewError::InvalidArgument`] if either part is empty
    /// or contains a dot.
    pub fn nested(group: impl Into<String>, sub: impl Into<String>) -> Result<Self> {
        Ok(Self {
            group: validate_part(group.into())?,
            sub: Some(validate_part(sub.into())?),
        })
    }

    /// Group part
    #[must_use]
    pub fn group(&self) -> &str {
        &self.group
    }

    /// Sub-key part
    #[must_use]
    pub fn sub(&self) -> Option<&str> {
        self.sub.as_deref()
    }
}

fn validate_part(part: String) -> Result<String> {
    if part.is_empty() {
        return Err(ModelViewError::InvalidArgument(
            "context key parts must not be empty".to_string(),
        ));
    }
    if part.contains('.') {
        return Err(ModelViewError::InvalidArgument(format!(
            "context key part '{part}' must not contain '.'"
        )));
    }
    Ok(part)
}

impl FromStr for ContextKey {
    type Err = ModelViewError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.split_once('.') {
            None => Self::new(s),
            Some((group, sub)) => Self::nested(group, sub),
        }
    }
}

impl fmt::Display for ContextKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.sub {
            Some(sub) => write!(f, "{}.{sub}", self.group),
            None => f.write_str(&self.group),
        }
    }
}

/// Per-call rendering options
///
/// `bordered` and `striped` override the context's defaults when set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Whether to include a header row
    pub header: bool,
    /// Bordered table override
    pub bordered: Option<bool>,
    /// Striped table override
    pub striped: Option<bool>,
    /// Extra attributes for the outer element
    pub attrs: Vec<(String, String)>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            header: true,
            bordered: None,
            striped: None,
            attrs: Vec::new(),
        }
    }
}

impl RenderOptions {
    /// Default options (header on, context defaults for styling)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Omit the header row
    #[must_use]
    pub const fn without_header(mut self) -> Self {
        self.header = false;
        self
    }

    /// Override the bordered flag
    #[must_use]
    pub const fn bordered(mut self, bordered: bool) -> Self {
        self.bordered = Some(bordered);
        self
    }

    /// Override the striped flag
    #[must_use]
    pub const fn striped(mut self, striped: bool) -> Self {
        self.striped = Some(striped);
        self
    }

    /// Add an attribute to the outer element
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }
}

/// Render-ready view data
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum View {
    /// Tabular view
    Table(TableView),
    /// Form fields
    Form(FormView),
    /// Free text from a custom context
    Text {
        /// Rendered text
        content: String,
    },
}

impl View {
    /// Table data, if this is a table view
    #[must_use]
    pub const fn as_table(&self) -> Option<&TableView> {
        match self {
            Self::Table(table) => Some(table),
            _ => None,
        }
    }

    /// Form data, if this is a form view
    #[must_use]
    pub const fn as_form(&self) -> Option<&FormView> {
        match self {
            Self::Form(form) => Some(form),
            _ => None,
        }
    }

    /// Text, if this is a text view
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text { content } => Some(content),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_group_key() {
        let key: ContextKey = "table".parse().unwrap();
        assert_eq!(key.group(), "table");
        assert_eq!(key.sub(), None);
        assert_eq!(key.to_string(), "table");
    }

    #[test]
    fn test_parse_nested_key() {
        let key: ContextKey = "table.striped".parse().unwrap();
        assert_eq!(key.group(), "table");
        assert_eq!(key.sub(), Some("striped"));
        assert_eq!(key, ContextKey::nested("table", "striped").unwrap());
        assert_eq!(key.to_string(), "table.striped");
    }

    #[test]
    fn test_parse_rejects_ambiguous_keys() {
        for raw in ["", "a.b.c", "a.", ".b", "."] {
            assert!(
                matches!(raw.parse::<ContextKey>(), Err(ModelViewError::InvalidArgument(_))),
                "expected '{raw}' to be rejected"
            );
        }
    }

    #[test]
    fn test_constructors_reject_dots() {
        assert!(ContextKey::new("a.b").is_err());
        assert!(ContextKey::nested("a", "b.c").is_err());
    }

    #[test]
    fn test_render_options_builder() {
        let options = RenderOptions::new()
            .without_header()
            .bordered(false)
            .attr("style", "width: 100%");
        assert!(!options.header);
        assert_eq!(options.bordered, Some(false));
        assert_eq!(options.striped, None);
        assert_eq!(options.attrs, vec![("style".to_string(), "width: 100%".to_string())]);
    }

    #[test]
    fn test_text_view_serializes_with_kind() {
        let view = View::Text {
            content: "It works".to_string(),
        };
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "text", "content": "It works"}));
        assert_eq!(view.as_text(), Some("It works"));
        assert!(view.as_table().is_none());
    }
}
