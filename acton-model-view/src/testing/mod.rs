//! Test fixtures for unit tests
//!
//! - [`Person`] - a labeled model with `id`, `name` and `email`
//! - assertion helpers for ordered labels and rendered views

mod assertions;

use once_cell::sync::Lazy;

use crate::context::ModelFields;
use crate::labels::{LabelSchema, LabelStore, Labeled};

pub use assertions::*;

static PERSON_LABELS: Lazy<LabelStore> = Lazy::new(|| {
    LabelSchema::new("Person")
        .labels([("id", "Id"), ("name", "Name"), ("email", "Email")])
        .build()
        .expect("Person declares labels")
});

/// Labeled model used throughout the unit tests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub id: u32,
    pub name: String,
    pub email: String,
}

impl Person {
    pub fn michael() -> Self {
        Self {
            id: 12345,
            name: "Michael".to_string(),
            email: "test@test.com".to_string(),
        }
    }
}

impl ModelFields for Person {
    fn field(&self, key: &str) -> Option<String> {
        match key {
            "id" => Some(self.id.to_string()),
            "name" => Some(self.name.clone()),
            "email" => Some(self.email.clone()),
            _ => None,
        }
    }
}

impl Labeled for Person {
    fn labels() -> &'static LabelStore {
        &PERSON_LABELS
    }
}
