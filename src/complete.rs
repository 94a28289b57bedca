//! Completion: adopt a fully known fallback's value wherever a field is still unknown.

use crate::completed_compound::CompletedCompound;
use crate::optional_field::OptionalField;
use crate::partly_known_compound::PartlyKnownCompound;
use crate::phase::{CompletedSolid, PartlyKnownSolid};
use crate::polymorph::cross_pollinate;

/// Completes `x` against `fallback`.
///
/// A record with no polymorphs of its own takes the fallback's list verbatim.
/// Otherwise polymorph `i` completes against the fallback's polymorph `i`, or
/// against the fallback's representative when the fallback lists fewer forms.
///
/// A fallback without polymorphs has nothing to lend a solid form, so the
/// record's own polymorphs are first cross-filled through the representative
/// and only those that end up fully known are kept. `Catalog::build` refuses
/// that pairing up front; see `has_solid_fallback`.
pub fn complete(x: &PartlyKnownCompound, fallback: &CompletedCompound) -> CompletedCompound {
    let solids = if x.solids.is_empty() {
        fallback.solids.clone()
    } else if let Some(representative) = fallback.representative_solid() {
        x.solids
            .iter()
            .enumerate()
            .map(|(index, solid)| solid.complete(fallback.solids.get(index).unwrap_or(representative)))
            .collect()
    } else {
        cross_pollinate(&x.solids)
            .iter()
            .filter_map(PartlyKnownSolid::try_complete)
            .collect()
    };

    CompletedCompound {
        molar_mass: x.molar_mass.complete(&fallback.molar_mass),
        atoms_per_molecule: x.atoms_per_molecule.complete(&fallback.atoms_per_molecule),
        molecular_diameter: x.molecular_diameter.complete(&fallback.molecular_diameter),
        molecular_degrees_of_freedom: x.molecular_degrees_of_freedom.complete(&fallback.molecular_degrees_of_freedom),
        acentric_factor: x.acentric_factor.complete(&fallback.acentric_factor),
        critical_point_pressure: x.critical_point_pressure.complete(&fallback.critical_point_pressure),
        critical_point_volume: x.critical_point_volume.complete(&fallback.critical_point_volume),
        critical_point_temperature: x.critical_point_temperature.complete(&fallback.critical_point_temperature),
        critical_point_compressibility: x
            .critical_point_compressibility
            .complete(&fallback.critical_point_compressibility),
        latent_heat_of_vaporization: x.latent_heat_of_vaporization.complete(&fallback.latent_heat_of_vaporization),
        latent_heat_of_fusion: x.latent_heat_of_fusion.complete(&fallback.latent_heat_of_fusion),
        triple_point_pressure: x.triple_point_pressure.complete(&fallback.triple_point_pressure),
        triple_point_temperature: x.triple_point_temperature.complete(&fallback.triple_point_temperature),
        freezing_point_sample_pressure: x
            .freezing_point_sample_pressure
            .complete(&fallback.freezing_point_sample_pressure),
        freezing_point_sample_temperature: x
            .freezing_point_sample_temperature
            .complete(&fallback.freezing_point_sample_temperature),
        boiling_point_sample_pressure: x
            .boiling_point_sample_pressure
            .complete(&fallback.boiling_point_sample_pressure),
        boiling_point_sample_temperature: x
            .boiling_point_sample_temperature
            .complete(&fallback.boiling_point_sample_temperature),
        simon_glatzel_slope: x.simon_glatzel_slope.complete(&fallback.simon_glatzel_slope),
        simon_glatzel_exponent: x.simon_glatzel_exponent.complete(&fallback.simon_glatzel_exponent),
        molecular_absorption_cross_section: x
            .molecular_absorption_cross_section
            .complete(&fallback.molecular_absorption_cross_section),
        gas: x.gas.complete(&fallback.gas),
        liquid: x.liquid.complete(&fallback.liquid),
        solids,
    }
}

/// Whether every polymorph `x` lists has a fallback polymorph to borrow from.
pub fn has_solid_fallback(x: &PartlyKnownCompound, fallback: &CompletedCompound) -> bool {
    x.solids.is_empty() || !fallback.solids.is_empty()
}

fn known<T: Clone>(field: &OptionalField<T>) -> Option<T> {
    field.value().cloned()
}

/// Completes a record that borrows from nothing; `None` if any field is still unknown.
pub fn try_complete(x: &PartlyKnownCompound) -> Option<CompletedCompound> {
    Some(CompletedCompound {
        molar_mass: known(&x.molar_mass)?,
        atoms_per_molecule: known(&x.atoms_per_molecule)?,
        molecular_diameter: known(&x.molecular_diameter)?,
        molecular_degrees_of_freedom: known(&x.molecular_degrees_of_freedom)?,
        acentric_factor: known(&x.acentric_factor)?,
        critical_point_pressure: known(&x.critical_point_pressure)?,
        critical_point_volume: known(&x.critical_point_volume)?,
        critical_point_temperature: known(&x.critical_point_temperature)?,
        critical_point_compressibility: known(&x.critical_point_compressibility)?,
        latent_heat_of_vaporization: known(&x.latent_heat_of_vaporization)?,
        latent_heat_of_fusion: known(&x.latent_heat_of_fusion)?,
        triple_point_pressure: known(&x.triple_point_pressure)?,
        triple_point_temperature: known(&x.triple_point_temperature)?,
        freezing_point_sample_pressure: known(&x.freezing_point_sample_pressure)?,
        freezing_point_sample_temperature: known(&x.freezing_point_sample_temperature)?,
        boiling_point_sample_pressure: known(&x.boiling_point_sample_pressure)?,
        boiling_point_sample_temperature: known(&x.boiling_point_sample_temperature)?,
        simon_glatzel_slope: known(&x.simon_glatzel_slope)?,
        simon_glatzel_exponent: known(&x.simon_glatzel_exponent)?,
        molecular_absorption_cross_section: known(&x.molecular_absorption_cross_section)?,
        gas: x.gas.try_complete()?,
        liquid: x.liquid.try_complete()?,
        solids: x
            .solids
            .iter()
            .map(PartlyKnownSolid::try_complete)
            .collect::<Option<Vec<CompletedSolid>>>()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference_data::water;
    use crate::relation::{Property, StatePoint};

    fn water_completed() -> CompletedCompound {
        let water = crate::speculate::speculate(&crate::infer::infer(&water().unwrap()));
        try_complete(&water).expect("water is fully known after inference")
    }

    #[test]
    fn test_empty_record_equals_fallback() {
        let fallback = water_completed();
        assert_eq!(complete(&PartlyKnownCompound::default(), &fallback), fallback);
    }

    #[test]
    fn test_completion_round_trips_a_completed_record() {
        let fallback = water_completed();
        let as_partly = PartlyKnownCompound::from(&fallback);
        assert!(as_partly.missing_fields().is_empty());
        assert_eq!(try_complete(&as_partly), Some(fallback));
    }

    #[test]
    fn test_known_fields_survive_completion() {
        let fallback = water_completed();
        let compound = PartlyKnownCompound {
            molar_mass: OptionalField::known(0.04401),
            solids: vec![PartlyKnownSolid::default(), PartlyKnownSolid::default(), PartlyKnownSolid {
                density: OptionalField::known(Property::Exact(1562.0)),
                ..Default::default()
            }],
            ..Default::default()
        };
        let completed = complete(&compound, &fallback);
        assert_eq!(completed.molar_mass, 0.04401);
        assert_eq!(completed.critical_point_temperature, fallback.critical_point_temperature);
        assert_eq!(completed.solids.len(), 3);
        // polymorphs beyond the fallback's list borrow from its representative
        assert_eq!(completed.solids[1], fallback.solids[0]);
        assert_eq!(completed.solids[2].density.at(&StatePoint::STANDARD), 1562.0);
    }

    #[test]
    fn test_fallback_without_solids_keeps_self_complete_polymorphs() {
        let water = water_completed();
        let fallback = CompletedCompound { solids: Vec::new(), ..water.clone() };
        let ice = PartlyKnownSolid::from(&water.solids[0]);
        let compound = PartlyKnownCompound {
            solids: vec![
                PartlyKnownSolid {
                    density: OptionalField::known(Property::Exact(917.0)),
                    ..Default::default()
                },
                ice.clone(),
            ],
            ..Default::default()
        };
        assert!(!has_solid_fallback(&compound, &fallback));
        assert!(has_solid_fallback(&compound, &water));
        assert!(has_solid_fallback(&PartlyKnownCompound::default(), &fallback));

        // the sparse polymorph is filled from the complete one rather than dropped
        let completed = complete(&compound, &fallback);
        assert_eq!(completed.solids.len(), 2);
        assert_eq!(completed.solids[0].density.at(&StatePoint::STANDARD), 917.0);
        assert_eq!(completed.solids[0].shear_modulus, water.solids[0].shear_modulus);
    }

    #[test]
    fn test_try_complete_reports_unknown_fields() {
        assert_eq!(try_complete(&PartlyKnownCompound::default()), None);
    }
}
