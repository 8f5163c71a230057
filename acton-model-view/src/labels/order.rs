//! Label ordering from rank hints
//!
//! A rank hint places a key at a slot counted from the front (`0` is first)
//! or from the end (`-1` is last). Keys without a hint keep their label-map
//! order and land between the highest front slot and the end-pinned keys.
//!
//! # Examples
//!
//! ```rust
//! use acton_model_view::labels::{order, LabelMap, RankHints};
//!
//! let labels = LabelMap::from([
//!     ("fn", "First Name"),
//!     ("id", "Id"),
//!     ("email", "Email"),
//!     ("ln", "Last Name"),
//! ]);
//! let hints: RankHints = "fn:0, ln:1, id:-1, email:-2".parse().unwrap();
//!
//! let ordered = order(&labels, &hints);
//! assert_eq!(ordered.keys().collect::<Vec<_>>(), ["fn", "ln", "email", "id"]);
//! ```

use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::map::LabelMap;
use crate::error::ModelViewError;

/// Key to signed display-slot hint, in insertion order
///
/// Serializes as a map; deserializing keeps document order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RankHints {
    hints: IndexMap<String, i64>,
}

impl RankHints {
    /// Create an empty hint set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the rank for a key, returning the previous rank
    pub fn insert(&mut self, key: impl Into<String>, rank: i64) -> Option<i64> {
        self.hints.insert(key.into(), rank)
    }

    /// Chaining variant of [`insert`](Self::insert)
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, rank: i64) -> Self {
        self.insert(key, rank);
        self
    }

    /// Rank hinted for a key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<i64> {
        self.hints.get(key).copied()
    }

    /// Whether a key carries a hint
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.hints.contains_key(key)
    }

    /// Number of hints
    #[must_use]
    pub fn len(&self) -> usize {
        self.hints.len()
    }

    /// Whether no hints are set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hints.is_empty()
    }

    /// `(key, rank)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.hints.iter().map(|(k, rank)| (k.as_str(), *rank))
    }
}

impl PartialEq for RankHints {
    fn eq(&self, other: &Self) -> bool {
        self.hints.iter().eq(other.hints.iter())
    }
}

impl Eq for RankHints {}

impl<K: Into<String>> FromIterator<(K, i64)> for RankHints {
    fn from_iter<I: IntoIterator<Item = (K, i64)>>(iter: I) -> Self {
        let mut hints = Self::new();
        for (key, rank) in iter {
            hints.insert(key, rank);
        }
        hints
    }
}

impl<K: Into<String>, const N: usize> From<[(K, i64); N]> for RankHints {
    fn from(entries: [(K, i64); N]) -> Self {
        entries.into_iter().collect()
    }
}

/// Parses `"key:rank"` entries separated by commas, e.g. `"name:0, id:-1"`
impl FromStr for RankHints {
    type Err = ModelViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut hints = Self::new();
        for entry in s.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (key, rank) = entry.split_once(':').ok_or_else(|| {
                ModelViewError::InvalidArgument(format!("rank hint '{entry}' is not 'key:rank'"))
            })?;
            let key = key.trim();
            if key.is_empty() {
                return Err(ModelViewError::InvalidArgument(format!(
                    "rank hint '{entry}' has an empty key"
                )));
            }
            let rank = rank.trim().parse::<i64>().map_err(|_| {
                ModelViewError::InvalidArgument(format!(
                    "rank for '{key}' is not an integer: '{}'",
                    rank.trim()
                ))
            })?;
            hints.insert(key, rank);
        }
        Ok(hints)
    }
}

/// Labels arranged for display
///
/// Holds `(key, label)` pairs in final display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelOrder {
    entries: LabelMap,
}

impl LabelOrder {
    /// Order `labels` according to `hints`
    ///
    /// Non-negative hints come first, ascending. Unhinted keys follow in
    /// `labels` order, each taking the next synthetic rank after the last
    /// front slot. Negative hints close the sequence, most negative first.
    /// Equal ranks keep the order the hints were given in, and hints for
    /// keys missing from `labels` are skipped.
    #[must_use]
    pub fn new(labels: &LabelMap, hints: &RankHints) -> Self {
        if hints.is_empty() {
            return Self {
                entries: labels.clone(),
            };
        }

        let (mut negatives, mut positives): (Vec<(&str, i64)>, Vec<(&str, i64)>) =
            hints.iter().partition(|&(_, rank)| rank < 0);
        // stable sorts: ties stay in hint order
        negatives.sort_by_key(|&(_, rank)| rank);
        positives.sort_by_key(|&(_, rank)| rank);

        for key in labels.keys() {
            if !hints.contains_key(key) {
                let rank = positives
                    .last()
                    .map_or(0, |&(_, last)| last.saturating_add(1));
                positives.push((key, rank));
            }
        }

        let entries = positives
            .into_iter()
            .chain(negatives)
            .filter_map(|(key, _)| labels.get(key).map(|label| (key, label)))
            .collect();

        Self { entries }
    }

    /// Keys in display order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys()
    }

    /// Display labels in display order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.values()
    }

    /// `(key, label)` pairs in display order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter()
    }

    /// Label for a key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key)
    }

    /// Replace or append a label, returning `self` for chaining
    ///
    /// Existing keys keep their slot; new keys go last.
    pub fn insert(&mut self, key: impl Into<String>, label: impl Into<String>) -> &mut Self {
        self.entries.insert(key, label);
        self
    }

    /// Number of ordered labels
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no labels
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume into the ordered map
    #[must_use]
    pub fn into_map(self) -> LabelMap {
        self.entries
    }
}

/// Order `labels` by `hints`; see [`LabelOrder::new`]
#[must_use]
pub fn order(labels: &LabelMap, hints: &RankHints) -> LabelOrder {
    LabelOrder::new(labels, hints)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(ordered: &LabelOrder) -> Vec<&str> {
        ordered.keys().collect()
    }

    #[test]
    fn test_mixed_front_and_end_hints() {
        let labels = LabelMap::from([
            ("fn", "First Name"),
            ("id", "Id"),
            ("email", "Email"),
            ("ln", "Last Name"),
        ]);
        let hints = RankHints::from([("fn", 0), ("ln", 1), ("id", -1), ("email", -2)]);

        let ordered = order(&labels, &hints);
        assert_eq!(keys(&ordered), vec!["fn", "ln", "email", "id"]);
        assert_eq!(
            ordered.labels().collect::<Vec<_>>(),
            vec!["First Name", "Last Name", "Email", "Id"]
        );
    }

    #[test]
    fn test_no_hints_keeps_label_order() {
        let labels = LabelMap::from([("a", "A"), ("b", "B"), ("c", "C")]);
        let ordered = order(&labels, &RankHints::new());
        assert_eq!(keys(&ordered), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_unranked_after_highest_front_slot() {
        let labels = LabelMap::from([("a", "A"), ("b", "B")]);
        let ordered = order(&labels, &RankHints::from([("a", 5)]));
        assert_eq!(keys(&ordered), vec!["a", "b"]);
    }

    #[test]
    fn test_unranked_with_only_end_hints() {
        let labels = LabelMap::from([("id", "Id"), ("name", "Name"), ("email", "Email")]);
        let ordered = order(&labels, &RankHints::from([("id", -1)]));
        assert_eq!(keys(&ordered), vec!["name", "email", "id"]);
    }

    #[test]
    fn test_non_contiguous_ranks_append_unranked_after_max() {
        let labels = LabelMap::from([("x", "X"), ("a", "A"), ("y", "Y"), ("b", "B")]);
        let ordered = order(&labels, &RankHints::from([("b", 5), ("a", 0)]));
        assert_eq!(keys(&ordered), vec!["a", "b", "x", "y"]);
    }

    #[test]
    fn test_duplicate_ranks_are_stable() {
        let labels = LabelMap::from([("a", "A"), ("b", "B"), ("c", "C")]);
        let ordered = order(&labels, &RankHints::from([("c", 0), ("a", 0), ("b", -1)]));
        assert_eq!(keys(&ordered), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_unknown_hint_keys_are_ignored() {
        let labels = LabelMap::from([("a", "A"), ("b", "B")]);
        let ordered = order(&labels, &RankHints::from([("ghost", 0), ("b", 1), ("phantom", -1)]));
        assert_eq!(keys(&ordered), vec!["b", "a"]);
        assert_eq!(ordered.len(), 2);
    }

    #[test]
    fn test_insert_chains() {
        let labels = LabelMap::from([("fn", "First Name"), ("ln", "Last Name")]);
        let mut ordered = order(&labels, &RankHints::from([("ln", 0)]));
        ordered.insert("fn", "Given Name").insert("id", "Id");
        assert_eq!(keys(&ordered), vec!["ln", "fn", "id"]);
        assert_eq!(ordered.get("fn"), Some("Given Name"));
    }

    #[test]
    fn test_parse_hints() {
        let hints: RankHints = "name:0, id:-1,email : 2".parse().unwrap();
        assert_eq!(hints.get("name"), Some(0));
        assert_eq!(hints.get("id"), Some(-1));
        assert_eq!(hints.get("email"), Some(2));
        assert_eq!(hints.len(), 3);
    }

    #[test]
    fn test_parse_empty_hints() {
        let hints: RankHints = "".parse().unwrap();
        assert!(hints.is_empty());
    }

    #[test]
    fn test_parse_rejects_non_integer_rank() {
        let err = "name:first".parse::<RankHints>().unwrap_err();
        assert!(matches!(err, ModelViewError::InvalidArgument(_)));
    }

    #[test]
    fn test_parse_rejects_missing_separator() {
        assert!(matches!(
            "name".parse::<RankHints>(),
            Err(ModelViewError::InvalidArgument(_))
        ));
        assert!(matches!(
            ":1".parse::<RankHints>(),
            Err(ModelViewError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_hints_deserialize_in_document_order() {
        let hints: RankHints = serde_json::from_str(r#"{"name": 0, "id": -1, "email": 0}"#).unwrap();
        assert_eq!(
            hints.iter().collect::<Vec<_>>(),
            vec![("name", 0), ("id", -1), ("email", 0)]
        );
    }

    #[test]
    fn test_hints_round_trip_through_toml() {
        #[derive(Serialize, Deserialize)]
        struct Table {
            label_order: RankHints,
        }

        let table: Table = toml::from_str("[label_order]\nfn = 0\nln = 1\nid = -1").unwrap();
        assert_eq!(
            table.label_order.iter().collect::<Vec<_>>(),
            vec![("fn", 0), ("ln", 1), ("id", -1)]
        );
        let written = toml::to_string(&table).unwrap();
        let reread: Table = toml::from_str(&written).unwrap();
        assert_eq!(reread.label_order, table.label_order);
    }

    #[test]
    fn test_hint_equality_is_order_sensitive() {
        assert_ne!(
            RankHints::from([("a", 0), ("b", 1)]),
            RankHints::from([("b", 1), ("a", 0)])
        );
    }

    #[test]
    fn test_hints_reject_non_integer_values() {
        let result: Result<RankHints, _> = serde_json::from_str(r#"{"name": "first"}"#);
        assert!(result.is_err());
    }
}
