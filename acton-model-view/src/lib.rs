//! acton-model-view: Labeled model views for template rendering
//!
//! Models declare human-readable labels for their attributes. Labels are kept
//! in layered stores: every model view and every context on it derives its
//! own front layer, so overrides stay local while labels written on a shared
//! layer are seen by everyone holding it.
//!
//! # Design Principles
//!
//! 1. **Layered Labels**: Derived stores override without copying
//! 2. **Stable Ordering**: Rank hints reorder labels, ties keep declaration order
//! 3. **Data, Not Markup**: Contexts produce serializable views for templates
//!
//! # Quick Start
//!
//! ```rust
//! use acton_model_view::prelude::*;
//!
//! struct Person {
//!     id: u32,
//!     email: String,
//! }
//!
//! impl ModelFields for Person {
//!     fn field(&self, key: &str) -> Option<String> {
//!         match key {
//!             "id" => Some(self.id.to_string()),
//!             "email" => Some(self.email.clone()),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! # fn main() -> Result<(), ModelViewError> {
//! let labels = LabelSchema::new("Person")
//!     .labels([("id", "Id"), ("email", "Email")])
//!     .build()?;
//!
//! let mut view = ModelView::<Person>::with_labels(&labels);
//! view.register_form("form", RankHints::new())?;
//!
//! let rendered = view.render("form", &[], &RenderOptions::new())?;
//! assert_eq!(rendered.as_form().map(|form| form.fields.len()), Some(2));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod context;
pub mod error;
pub mod labels;
pub mod model_view;
pub mod observability;

#[cfg(test)]
pub(crate) mod testing;

pub mod prelude {
    //! Convenience re-exports for common types and traits
    //!
    //! # Examples
    //!
    //! ```rust
    //! use acton_model_view::prelude::*;
    //! ```

    // Labels
    pub use crate::labels::{
        order, LabelMap, LabelOrder, LabelSchema, LabelSource, LabelStore, Labeled, Layer,
        RankHints,
    };

    // Contexts
    pub use crate::context::{
        ContextKey, FormView, FormViewContext, ModelFields, RenderOptions, Renderable,
        TableView, TableViewContext, View, ViewContext,
    };

    // Model views
    pub use crate::model_view::ModelView;

    // Configuration
    pub use crate::config::{MissingLabelPolicy, ModelViewConfig};

    // Error types
    pub use crate::error::ModelViewError;
}
