//! Literature tables keyed by compound.
//!
//! A dense table has an entry for every compound and is rejected at
//! construction otherwise. A sparse table only lists the compounds a source
//! reports, and reads back as an `OptionalField` so absent entries flow into
//! inference as unknowns.

use crate::catalog::CatalogError;
use crate::compound_id::CompoundId;
use crate::optional_field::OptionalField;
use std::collections::BTreeMap;

#[derive(Clone, Debug, PartialEq)]
pub struct DenseTable<T> {
    name: &'static str,
    values: Vec<T>,
}

impl<T> DenseTable<T> {
    /// Builds a table from `(compound, value)` pairs; later duplicates win.
    pub fn from_entries(
        name: &'static str,
        entries: impl IntoIterator<Item = (CompoundId, T)>,
    ) -> Result<Self, CatalogError> {
        let mut slots: Vec<Option<T>> = std::iter::repeat_with(|| None).take(CompoundId::COUNT).collect();
        for (compound, value) in entries {
            slots[compound.as_index()] = Some(value);
        }

        let mut values = Vec::with_capacity(CompoundId::COUNT);
        for (compound, slot) in CompoundId::ALL.iter().zip(slots) {
            match slot {
                Some(value) => values.push(value),
                None => {
                    return Err(CatalogError::MissingEntry { table: name, compound: *compound });
                }
            }
        }
        Ok(DenseTable { name, values })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn get(&self, compound: CompoundId) -> &T {
        &self.values[compound.as_index()]
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SparseTable<T> {
    name: &'static str,
    values: BTreeMap<CompoundId, T>,
}

impl<T: Clone> SparseTable<T> {
    pub fn new(name: &'static str) -> Self {
        SparseTable { name, values: BTreeMap::new() }
    }

    pub fn from_entries(name: &'static str, entries: impl IntoIterator<Item = (CompoundId, T)>) -> Self {
        SparseTable { name, values: entries.into_iter().collect() }
    }

    pub fn with(mut self, compound: CompoundId, value: T) -> Self {
        self.values.insert(compound, value);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn get(&self, compound: CompoundId) -> OptionalField<T> {
        self.values.get(&compound).cloned().into()
    }

    pub fn contains(&self, compound: CompoundId) -> bool {
        self.values.contains_key(&compound)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CompoundId, &T)> {
        self.values.iter()
    }
}

impl<T: Clone + Default> SparseTable<T> {
    /// The entry for `compound`, or an all-unknown record when absent.
    pub fn get_or_default(&self, compound: CompoundId) -> T {
        self.values.get(&compound).cloned().unwrap_or_default()
    }
}
