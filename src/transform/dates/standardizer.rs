use crate::transform::dates::normalizer::normalize;
use crate::transform::dates::pattern_extractor::extract;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, BTreeSet};

/// Normalizes every date-like value found in a metadata record.
///
/// For each string-valued field: extract candidates, normalize each, drop
/// the failures, deduplicate, and sort ascending (lexicographic order is
/// chronological for the canonical shape). Non-string values are skipped
/// silently, and fields with no usable date never appear in the result.
pub fn standardize(metadata: &Map<String, Value>) -> BTreeMap<String, Vec<String>> {
    let mut result = BTreeMap::new();
    for (field, value) in metadata {
        let Some(text) = value.as_str() else {
            continue;
        };
        let normalized: BTreeSet<String> = extract(text)
            .iter()
            .filter_map(|candidate| normalize(candidate))
            .collect();
        if !normalized.is_empty() {
            result.insert(field.clone(), normalized.into_iter().collect());
        }
    }
    result
}

/// Accepts any JSON value; anything but an object yields an empty map.
pub fn standardize_value(metadata: &Value) -> BTreeMap<String, Vec<String>> {
    match metadata.as_object() {
        Some(fields) => standardize(fields),
        None => BTreeMap::new(),
    }
}
