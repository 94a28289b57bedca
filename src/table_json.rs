//! Loading curated sparse tables from JSON documents of the shape
//! `{ "<compound name>": value, ... }`.

use crate::catalog::CatalogError;
use crate::compound_id::CompoundId;
use crate::table::SparseTable;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

impl<T: Clone + DeserializeOwned> SparseTable<T> {
    /// Parses a sparse table from a JSON string.
    pub fn from_json_str(name: &'static str, json: &str) -> Result<Self, CatalogError> {
        let document: Map<String, Value> =
            serde_json::from_str(json).map_err(|e| CatalogError::Json(format!("{}: {}", name, e)))?;

        let mut table = SparseTable::new(name);
        for (key, value) in document {
            let compound: CompoundId = key.parse()?;
            let value: T = serde_json::from_value(value)
                .map_err(|e| CatalogError::Json(format!("{}.{}: {}", name, key, e)))?;
            table = table.with(compound, value);
        }
        Ok(table)
    }

    /// Reads and parses a sparse table from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(name: &'static str, path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .map_err(|e| CatalogError::Json(format!("failed to read {}: {}", path.display(), e)))?;
        Self::from_json_str(name, &json)
    }
}
