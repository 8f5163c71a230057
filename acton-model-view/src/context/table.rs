//! Table context
//!
//! Produces one header cell per label and one row per model instance, with
//! values pulled in the same key order as the header.

use serde::Serialize;

use super::view::ViewContext;
use super::{ModelFields, RenderOptions, Renderable, View};
use crate::config::TableSettings;
use crate::error::Result;
use crate::labels::{LabelOrder, LabelStore, RankHints};

/// Table data ready for a template
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TableView {
    /// Wrap the table in a responsive container
    pub responsive: bool,
    /// Draw cell borders
    pub bordered: bool,
    /// Stripe alternating rows
    pub striped: bool,
    /// Extra attributes for the table element
    pub attrs: Vec<(String, String)>,
    /// Header cells, when a header was requested
    pub header: Option<Vec<String>>,
    /// Row cells
    pub rows: Vec<Vec<String>>,
}

impl TableView {
    /// CSS classes for the table element
    ///
    /// # Examples
    ///
    /// ```rust
    /// use acton_model_view::context::TableView;
    ///
    /// let table = TableView { bordered: true, striped: true, ..TableView::default() };
    /// assert_eq!(table.classes(), "table table-bordered table-striped");
    /// ```
    #[must_use]
    pub fn classes(&self) -> String {
        let mut classes = String::from("table");
        if self.bordered {
            classes.push_str(" table-bordered");
        }
        if self.striped {
            classes.push_str(" table-striped");
        }
        classes
    }
}

/// Renders model instances as a table
///
/// Styling defaults set here can be overridden per call with
/// [`RenderOptions`].
#[derive(Debug, Clone)]
pub struct TableViewContext {
    base: ViewContext,
    responsive: bool,
    bordered: bool,
    striped: bool,
}

impl TableViewContext {
    /// Create a responsive, unstyled table over `labels`
    #[must_use]
    pub fn new(labels: LabelStore) -> Self {
        Self::from_settings(labels, &TableSettings::default())
    }

    /// Create a table with styling defaults from configuration
    #[must_use]
    pub fn from_settings(labels: LabelStore, settings: &TableSettings) -> Self {
        Self {
            base: ViewContext::new(labels),
            responsive: settings.responsive,
            bordered: settings.bordered,
            striped: settings.striped,
        }
    }

    /// Set the rank hints used to order columns
    #[must_use]
    pub fn label_order(mut self, hints: RankHints) -> Self {
        self.base = self.base.label_order(hints);
        self
    }

    /// Set whether the table is wrapped in a responsive container
    #[must_use]
    pub const fn responsive(mut self, responsive: bool) -> Self {
        self.responsive = responsive;
        self
    }

    /// Set the default bordered flag
    #[must_use]
    pub const fn bordered(mut self, bordered: bool) -> Self {
        self.bordered = bordered;
        self
    }

    /// Set the default striped flag
    #[must_use]
    pub const fn striped(mut self, striped: bool) -> Self {
        self.striped = striped;
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

    /// Header cells in column order
    #[must_use]
    pub fn header(&self) -> Vec<String> {
        self.base
            .ordered_labels()
            .labels()
            .map(str::to_owned)
            .collect()
    }

    /// Row cells for one instance in the column order of `ordered`
    ///
    /// Compute `ordered` once with [`ViewContext::ordered_labels`] and reuse
    /// it across rows.
    ///
    /// # Errors
    ///
    /// Returns [`MissingField`](crate::error::ModelViewError::MissingField)
    /// when the instance lacks a labeled attribute.
    pub fn row<M: ModelFields>(&self, ordered: &LabelOrder, instance: &M) -> Result<Vec<String>> {
        self.base.values(ordered, instance)
    }
}

impl<M: ModelFields> Renderable<M> for TableViewContext {
    fn render(&self, instances: &[M], options: &RenderOptions) -> Result<View> {
        let ordered = self.base.ordered_labels();
        let header = options
            .header
            .then(|| ordered.labels().map(str::to_owned).collect());
        let rows = instances
            .iter()
            .map(|instance| self.base.values(&ordered, instance))
            .collect::<Result<Vec<_>>>()?;

        tracing::trace!(rows = rows.len(), columns = ordered.len(), "rendered table");
        Ok(View::Table(TableView {
            responsive: self.responsive,
            bordered: options.bordered.unwrap_or(self.bordered),
            striped: options.striped.unwrap_or(self.striped),
            attrs: options.attrs.clone(),
            header,
            rows,
        }))
    }
}
