//! Foreign id → label maps for lookup columns

use std::collections::BTreeMap;

use super::metadata::LookupSpec;
use super::record::{scalar_to_string, EntityRecord};

/// Labels for foreign ids, built once per screen mount
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupMap(BTreeMap<String, String>);

impl LookupMap {
    /// Build from the rows of the referenced collection.
    ///
    /// Rows without a key are skipped; a row without a label maps to an
    /// empty string, which is still a hit.
    pub fn from_records(records: &[EntityRecord], spec: &LookupSpec) -> Self {
        let map = records
            .iter()
            .filter_map(|record| {
                let key = record.get(spec.key_field).and_then(scalar_to_string)?;
                let label = record.text_value(spec.label_field);
                Some((key, label))
            })
            .collect();
        Self(map)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.0.get(id).map(String::as_str)
    }

    /// Label for an id, or the raw id when unknown
    pub fn label_for(&self, id: &str) -> String {
        self.get(id).unwrap_or(id).to_string()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Warning raised when a lookup source has no rows
pub fn missing_reference_message(spec: &LookupSpec) -> String {
    format!(
        "No data for {label}. Please Add {label} First.",
        label = spec.source_label
    )
}
