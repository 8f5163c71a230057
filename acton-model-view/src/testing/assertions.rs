//! Assertion helpers for label and view tests

use crate::context::View;
use crate::labels::{LabelOrder, LabelStore};

/// Assert the keys of an ordered label map
///
/// # Panics
///
/// Panics if the keys differ from `expected`
pub fn assert_order(order: &LabelOrder, expected: &[&str]) {
    let actual: Vec<&str> = order.keys().collect();
    assert_eq!(actual, expected, "Expected label order {expected:?}, got {actual:?}");
}

/// Assert that `store` resolves `key` to `expected`
///
/// # Panics
///
/// Panics if the key is missing or resolves to a different label
pub fn assert_label(store: &LabelStore, key: &str, expected: &str) {
    let actual = store
        .get(key)
        .unwrap_or_else(|| panic!("Label for '{key}' not found"));
    assert_eq!(
        actual, expected,
        "Expected label '{expected}' for '{key}', got '{actual}'"
    );
}

/// Assert the header cells of a rendered table
///
/// # Panics
///
/// Panics if the view is not a table or has a different header
pub fn assert_table_header(view: &View, expected: &[&str]) {
    let table = view
        .as_table()
        .unwrap_or_else(|| panic!("Expected a table view, got {view:?}"));
    let header = table.header.as_ref().expect("Table has no header row");
    assert_eq!(header, expected, "Unexpected table header");
}
