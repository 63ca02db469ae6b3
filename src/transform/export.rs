use polars::prelude::DataFrame;
use std::collections::BTreeMap;

/// Everything one harvest run produces for the loader.
#[derive(Debug, Clone, PartialEq)]
pub struct HarvestExport {
    pub tags: DataFrame,
    pub element_texts: DataFrame,
    /// item id → field name → sorted unique canonical timestamps.
    pub dates: BTreeMap<i64, BTreeMap<String, Vec<String>>>,
    /// field name → category, when a category map was configured.
    pub field_categories: Option<BTreeMap<String, String>>,
}
