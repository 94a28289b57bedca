use crate::catalog::CatalogError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Every compound known to the catalog. Indexes every table.
#[derive(Hash, Eq, PartialEq, Ord, PartialOrd, Debug, Clone, Copy, Serialize, Deserialize)]
#[repr(u8)]
pub enum CompoundId {
    Water = 0,
    CarbonDioxide = 1,
    Methane = 2,
    Nitrogen = 3,
    Oxygen = 4,
    Argon = 5,
}

impl CompoundId {
    pub const COUNT: usize = 6;

    pub const ALL: [CompoundId; CompoundId::COUNT] = [
        CompoundId::Water,
        CompoundId::CarbonDioxide,
        CompoundId::Methane,
        CompoundId::Nitrogen,
        CompoundId::Oxygen,
        CompoundId::Argon,
    ];

    /// position in dense tables
    pub fn as_index(self) -> usize {
        self as usize
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CompoundId::Water => "water",
            CompoundId::CarbonDioxide => "carbon_dioxide",
            CompoundId::Methane => "methane",
            CompoundId::Nitrogen => "nitrogen",
            CompoundId::Oxygen => "oxygen",
            CompoundId::Argon => "argon",
        }
    }
}

impl FromStr for CompoundId {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CompoundId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| CatalogError::UnknownCompound(s.to_string()))
    }
}

impl std::fmt::Display for CompoundId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
