//! Display labels for model attributes
//!
//! Labels live in shared [`Layer`]s chained into a [`LabelStore`]. Each model
//! gets its own front layer on top of the layers it inherits, and every view
//! or context derives a further front layer of its own. Writes go to the
//! front, lookups fall through to the first layer that holds the key.
//!
//! [`LabelOrder`] turns a materialized label map plus [`RankHints`] into the
//! display order used for table columns and form fields.

mod layer;
mod map;
mod order;
mod schema;
mod store;

pub use layer::Layer;
pub use map::LabelMap;
pub use order::{order, LabelOrder, RankHints};
pub use schema::{LabelSchema, LabelSource, Labeled};
pub use store::LabelStore;
