//! The catalog: curated source tables in, one completed record per compound out.
//!
//! Compounds are completed in topological order of the "borrows from" graph so
//! that every fallback is already complete when a compound borrows from it.
//! Configuration errors (a dense table missing a compound, a cyclic fallback
//! graph, a root compound that cannot be completed) fail the whole build.

use crate::complete::{complete, has_solid_fallback, try_complete};
use crate::completed_compound::CompletedCompound;
use crate::compound_id::CompoundId;
use crate::infer::infer;
use crate::optional_field::OptionalField;
use crate::partly_known_compound::PartlyKnownCompound;
use crate::phase::{PartlyKnownGas, PartlyKnownLiquid, PartlyKnownSolid};
use crate::relation::Property;
use crate::speculate::speculate;
use crate::table::{DenseTable, SparseTable};
use log::{debug, info};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum CatalogError {
    #[error("table `{table}` has no entry for {compound}")]
    MissingEntry { table: &'static str, compound: CompoundId },
    #[error("fallback chain starting at {compound} borrows from itself")]
    FallbackCycle { compound: CompoundId },
    #[error("{compound} lists solid forms but its fallback {fallback} has none to lend")]
    MissingSolidFallback { compound: CompoundId, fallback: CompoundId },
    #[error("{compound} borrows from nothing but is missing {}", .missing.join(", "))]
    Incomplete { compound: CompoundId, missing: Vec<String> },
    #[error("malformed table: {0}")]
    Json(String),
    #[error("unknown compound `{0}`")]
    UnknownCompound(String),
}

/// Every literature table the catalog draws from.
///
/// Molar mass, atom count and fallback are required for every compound; all
/// other tables are sparse.
#[derive(Clone, Debug)]
pub struct CatalogSources {
    pub molar_mass: DenseTable<f64>,
    pub atoms_per_molecule: DenseTable<u32>,
    pub borrows_from: DenseTable<Option<CompoundId>>,

    pub molecular_diameter: SparseTable<f64>,
    pub molecular_degrees_of_freedom: SparseTable<f64>,
    pub acentric_factor: SparseTable<f64>,
    pub critical_point_pressure: SparseTable<f64>,
    pub critical_point_volume: SparseTable<f64>,
    pub critical_point_temperature: SparseTable<f64>,
    pub critical_point_compressibility: SparseTable<f64>,
    pub latent_heat_of_vaporization: SparseTable<f64>,
    pub latent_heat_of_fusion: SparseTable<f64>,
    pub triple_point_pressure: SparseTable<f64>,
    pub triple_point_temperature: SparseTable<f64>,
    pub freezing_point_sample_pressure: SparseTable<f64>,
    pub freezing_point_sample_temperature: SparseTable<f64>,
    pub boiling_point_sample_pressure: SparseTable<f64>,
    pub boiling_point_sample_temperature: SparseTable<f64>,
    pub simon_glatzel_slope: SparseTable<f64>,
    pub simon_glatzel_exponent: SparseTable<f64>,
    pub molecular_absorption_cross_section: SparseTable<Property>,

    pub gas: SparseTable<PartlyKnownGas>,
    pub liquid: SparseTable<PartlyKnownLiquid>,
    pub solids: SparseTable<Vec<PartlyKnownSolid>>,
}

impl CatalogSources {
    /// Sources with the required dense tables and every sparse table empty.
    pub fn new(
        molar_mass: DenseTable<f64>,
        atoms_per_molecule: DenseTable<u32>,
        borrows_from: DenseTable<Option<CompoundId>>,
    ) -> Self {
        CatalogSources {
            molar_mass,
            atoms_per_molecule,
            borrows_from,
            molecular_diameter: SparseTable::new("molecular_diameter"),
            molecular_degrees_of_freedom: SparseTable::new("molecular_degrees_of_freedom"),
            acentric_factor: SparseTable::new("acentric_factor"),
            critical_point_pressure: SparseTable::new("critical_point_pressure"),
            critical_point_volume: SparseTable::new("critical_point_volume"),
            critical_point_temperature: SparseTable::new("critical_point_temperature"),
            critical_point_compressibility: SparseTable::new("critical_point_compressibility"),
            latent_heat_of_vaporization: SparseTable::new("latent_heat_of_vaporization"),
            latent_heat_of_fusion: SparseTable::new("latent_heat_of_fusion"),
            triple_point_pressure: SparseTable::new("triple_point_pressure"),
            triple_point_temperature: SparseTable::new("triple_point_temperature"),
            freezing_point_sample_pressure: SparseTable::new("freezing_point_sample_pressure"),
            freezing_point_sample_temperature: SparseTable::new("freezing_point_sample_temperature"),
            boiling_point_sample_pressure: SparseTable::new("boiling_point_sample_pressure"),
            boiling_point_sample_temperature: SparseTable::new("boiling_point_sample_temperature"),
            simon_glatzel_slope: SparseTable::new("simon_glatzel_slope"),
            simon_glatzel_exponent: SparseTable::new("simon_glatzel_exponent"),
            molecular_absorption_cross_section: SparseTable::new("molecular_absorption_cross_section"),
            gas: SparseTable::new("gas"),
            liquid: SparseTable::new("liquid"),
            solids: SparseTable::new("solids"),
        }
    }

    /// The partly known record for `id`, exactly as the tables report it.
    pub fn compound(&self, id: CompoundId) -> PartlyKnownCompound {
        PartlyKnownCompound {
            molar_mass: OptionalField::known(*self.molar_mass.get(id)),
            atoms_per_molecule: OptionalField::known(*self.atoms_per_molecule.get(id)),
            molecular_diameter: self.molecular_diameter.get(id),
            molecular_degrees_of_freedom: self.molecular_degrees_of_freedom.get(id),
            acentric_factor: self.acentric_factor.get(id),
            critical_point_pressure: self.critical_point_pressure.get(id),
            critical_point_volume: self.critical_point_volume.get(id),
            critical_point_temperature: self.critical_point_temperature.get(id),
            critical_point_compressibility: self.critical_point_compressibility.get(id),
            latent_heat_of_vaporization: self.latent_heat_of_vaporization.get(id),
            latent_heat_of_fusion: self.latent_heat_of_fusion.get(id),
            triple_point_pressure: self.triple_point_pressure.get(id),
            triple_point_temperature: self.triple_point_temperature.get(id),
            freezing_point_sample_pressure: self.freezing_point_sample_pressure.get(id),
            freezing_point_sample_temperature: self.freezing_point_sample_temperature.get(id),
            boiling_point_sample_pressure: self.boiling_point_sample_pressure.get(id),
            boiling_point_sample_temperature: self.boiling_point_sample_temperature.get(id),
            simon_glatzel_slope: self.simon_glatzel_slope.get(id),
            simon_glatzel_exponent: self.simon_glatzel_exponent.get(id),
            molecular_absorption_cross_section: self.molecular_absorption_cross_section.get(id),
            gas: self.gas.get_or_default(id),
            liquid: self.liquid.get_or_default(id),
            solids: self.solids.get_or_default(id),
        }
    }

    /// Every compound, ordered so that each appears after the compound it borrows from.
    ///
    /// Ties keep identifier order, so the result is deterministic.
    pub fn completion_order(&self) -> Result<Vec<CompoundId>, CatalogError> {
        let mut placed = [false; CompoundId::COUNT];
        let mut order = Vec::with_capacity(CompoundId::COUNT);

        for start in CompoundId::ALL {
            // walk up the fallback chain until a placed compound or a root
            let mut chain = Vec::new();
            let mut current = Some(start);
            while let Some(id) = current {
                if placed[id.as_index()] {
                    break;
                }
                if chain.contains(&id) {
                    return Err(CatalogError::FallbackCycle { compound: id });
                }
                chain.push(id);
                current = *self.borrows_from.get(id);
            }
            for id in chain.into_iter().rev() {
                placed[id.as_index()] = true;
                order.push(id);
            }
        }
        Ok(order)
    }
}

/// One completed record per compound.
#[derive(Clone, Debug, PartialEq)]
pub struct Catalog {
    records: Vec<CompletedCompound>,
}

impl Catalog {
    pub fn build(sources: &CatalogSources) -> Result<Catalog, CatalogError> {
        let order = sources.completion_order()?;
        debug!(
            "completion order: {}",
            order.iter().map(CompoundId::as_str).collect::<Vec<_>>().join(" -> ")
        );

        let mut completed: Vec<Option<CompletedCompound>> = vec![None; CompoundId::COUNT];
        for id in order {
            let record = speculate(&infer(&sources.compound(id)));
            let result = match *sources.borrows_from.get(id) {
                Some(parent) => {
                    let fallback = completed[parent.as_index()]
                        .as_ref()
                        .ok_or(CatalogError::FallbackCycle { compound: id })?;
                    if !has_solid_fallback(&record, fallback) {
                        return Err(CatalogError::MissingSolidFallback { compound: id, fallback: parent });
                    }
                    debug!("{}: borrowing {} fields from {}", id, record.missing_fields().len(), parent);
                    complete(&record, fallback)
                }
                None => try_complete(&record)
                    .ok_or_else(|| CatalogError::Incomplete { compound: id, missing: record.missing_fields() })?,
            };
            completed[id.as_index()] = Some(result);
        }

        let records = CompoundId::ALL
            .iter()
            .zip(completed)
            .map(|(id, record)| {
                record.ok_or(CatalogError::Incomplete { compound: *id, missing: Vec::new() })
            })
            .collect::<Result<Vec<_>, _>>()?;
        info!("catalog built with {} compounds", records.len());
        Ok(Catalog { records })
    }

    pub fn get(&self, id: CompoundId) -> &CompletedCompound {
        &self.records[id.as_index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (CompoundId, &CompletedCompound)> {
        CompoundId::ALL.into_iter().zip(self.records.iter())
    }
}
