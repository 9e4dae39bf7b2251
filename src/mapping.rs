//! External-to-internal column name mapping.
//!
//! Built once at startup from the two positionally aligned header constants
//! in [`crate::schema`]. The map is pipeline configuration: consumers use it
//! to resolve an export column name to its internal equivalent. Row parsing
//! itself stays positional and never consults the map.

use std::collections::BTreeMap;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("column mapping mismatch: {external} external name(s) vs {internal} internal name(s)")]
    LengthMismatch { external: usize, internal: usize },
}

/// Immutable lookup from export column name to internal column name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    entries: BTreeMap<String, String>,
}

impl ColumnMap {
    pub fn internal_name(&self, external: &str) -> Option<&str> {
        self.entries.get(external).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builds the 1:1 positional mapping between the two name sequences.
///
/// A length mismatch is a configuration defect (a column added to one
/// sequence but not the other) and must stop the pipeline before any data is
/// read. Uniqueness of external names is not enforced: duplicates would
/// silently collapse to a single entry.
pub fn build_mapping(external: &[&str], internal: &[&str]) -> Result<ColumnMap, ConfigError> {
    if external.len() != internal.len() {
        return Err(ConfigError::LengthMismatch {
            external: external.len(),
            internal: internal.len(),
        });
    }
    let entries = external
        .iter()
        .zip(internal.iter())
        .map(|(ext, int)| ((*ext).to_string(), (*int).to_string()))
        .collect();
    Ok(ColumnMap { entries })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{INTERNAL_HEADERS, WALLET_HEADERS};

    #[test]
    fn build_mapping_covers_every_column() {
        let map = build_mapping(&WALLET_HEADERS, &INTERNAL_HEADERS).expect("aligned constants");
        assert_eq!(map.len(), WALLET_HEADERS.len());
        assert_eq!(map.internal_name("type"), Some("direction"));
        assert_eq!(map.internal_name("payee"), Some("entity"));
        assert_eq!(map.internal_name("labels"), Some("tags"));
        assert_eq!(map.internal_name("unknown"), None);
    }

    #[test]
    fn build_mapping_rejects_unequal_lengths() {
        let result = build_mapping(&["a", "b"], &["x"]);
        assert_eq!(
            result,
            Err(ConfigError::LengthMismatch {
                external: 2,
                internal: 1
            })
        );
    }

    #[test]
    fn build_mapping_accepts_empty_sequences() {
        let map = build_mapping(&[], &[]).expect("empty is aligned");
        assert!(map.is_empty());
    }

    #[test]
    fn duplicate_external_names_collapse_to_one_entry() {
        let map = build_mapping(&["a", "a"], &["x", "y"]).expect("equal lengths");
        assert_eq!(map.len(), 1);
        assert_eq!(map.internal_name("a"), Some("y"));
    }
}
