//! The per-substance record whose fields are each independently known or unknown.

use crate::completed_compound::CompletedCompound;
use crate::optional_field::OptionalField;
use crate::phase::{PartlyKnownGas, PartlyKnownLiquid, PartlyKnownSolid};
use crate::relation::Property;
use serde::{Deserialize, Serialize};

/// Bulk properties are SI: kg/mol, m, m³/mol, K, Pa, J/kg, and m² for the
/// absorption cross-section (a function of wavenumber).
///
/// `solids` is ordered; the polymorph at index 0 is the representative form
/// used as the hub when cross-filling solid properties.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartlyKnownCompound {
    pub molar_mass: OptionalField<f64>,
    pub atoms_per_molecule: OptionalField<u32>,
    pub molecular_diameter: OptionalField<f64>,
    pub molecular_degrees_of_freedom: OptionalField<f64>,
    pub acentric_factor: OptionalField<f64>,

    pub critical_point_pressure: OptionalField<f64>,
    pub critical_point_volume: OptionalField<f64>,
    pub critical_point_temperature: OptionalField<f64>,
    pub critical_point_compressibility: OptionalField<f64>,

    pub latent_heat_of_vaporization: OptionalField<f64>,
    pub latent_heat_of_fusion: OptionalField<f64>,

    pub triple_point_pressure: OptionalField<f64>,
    pub triple_point_temperature: OptionalField<f64>,
    pub freezing_point_sample_pressure: OptionalField<f64>,
    pub freezing_point_sample_temperature: OptionalField<f64>,
    pub boiling_point_sample_pressure: OptionalField<f64>,
    pub boiling_point_sample_temperature: OptionalField<f64>,

    /// Simon-Glatzel melting curve: P - Pt = a·((T/Tt)^c - 1), `a` in Pa
    pub simon_glatzel_slope: OptionalField<f64>,
    pub simon_glatzel_exponent: OptionalField<f64>,

    pub molecular_absorption_cross_section: OptionalField<Property>,

    pub gas: PartlyKnownGas,
    pub liquid: PartlyKnownLiquid,
    pub solids: Vec<PartlyKnownSolid>,
}

impl PartlyKnownCompound {
    fn scalar_known_flags(&self) -> [(&'static str, bool); 20] {
        [
            ("molar_mass", self.molar_mass.is_known()),
            ("atoms_per_molecule", self.atoms_per_molecule.is_known()),
            ("molecular_diameter", self.molecular_diameter.is_known()),
            ("molecular_degrees_of_freedom", self.molecular_degrees_of_freedom.is_known()),
            ("acentric_factor", self.acentric_factor.is_known()),
            ("critical_point_pressure", self.critical_point_pressure.is_known()),
            ("critical_point_volume", self.critical_point_volume.is_known()),
            ("critical_point_temperature", self.critical_point_temperature.is_known()),
            ("critical_point_compressibility", self.critical_point_compressibility.is_known()),
            ("latent_heat_of_vaporization", self.latent_heat_of_vaporization.is_known()),
            ("latent_heat_of_fusion", self.latent_heat_of_fusion.is_known()),
            ("triple_point_pressure", self.triple_point_pressure.is_known()),
            ("triple_point_temperature", self.triple_point_temperature.is_known()),
            ("freezing_point_sample_pressure", self.freezing_point_sample_pressure.is_known()),
            ("freezing_point_sample_temperature", self.freezing_point_sample_temperature.is_known()),
            ("boiling_point_sample_pressure", self.boiling_point_sample_pressure.is_known()),
            ("boiling_point_sample_temperature", self.boiling_point_sample_temperature.is_known()),
            ("simon_glatzel_slope", self.simon_glatzel_slope.is_known()),
            ("simon_glatzel_exponent", self.simon_glatzel_exponent.is_known()),
            ("molecular_absorption_cross_section", self.molecular_absorption_cross_section.is_known()),
        ]
    }

    /// Number of known leaf fields, counting every polymorph separately.
    pub fn known_count(&self) -> usize {
        let scalars = self.scalar_known_flags().iter().filter(|(_, known)| *known).count();
        scalars
            + self.gas.known_count()
            + self.liquid.known_count()
            + self.solids.iter().map(PartlyKnownSolid::known_count).sum::<usize>()
    }

    /// Dotted names of every unknown leaf field.
    pub fn missing_fields(&self) -> Vec<String> {
        let mut missing: Vec<String> = self
            .scalar_known_flags()
            .iter()
            .filter(|(_, known)| !known)
            .map(|(name, _)| name.to_string())
            .collect();
        missing.extend(self.gas.missing_fields("gas"));
        missing.extend(self.liquid.missing_fields("liquid"));
        for (index, solid) in self.solids.iter().enumerate() {
            missing.extend(solid.missing_fields(&format!("solids[{}]", index)));
        }
        missing
    }

    /// The representative polymorph, if any solid form is listed.
    pub fn representative_solid(&self) -> Option<&PartlyKnownSolid> {
        self.solids.first()
    }
}

impl From<&CompletedCompound> for PartlyKnownCompound {
    fn from(completed: &CompletedCompound) -> Self {
        PartlyKnownCompound {
            molar_mass: OptionalField::known(completed.molar_mass),
            atoms_per_molecule: OptionalField::known(completed.atoms_per_molecule),
            molecular_diameter: OptionalField::known(completed.molecular_diameter),
            molecular_degrees_of_freedom: OptionalField::known(completed.molecular_degrees_of_freedom),
            acentric_factor: OptionalField::known(completed.acentric_factor),
            critical_point_pressure: OptionalField::known(completed.critical_point_pressure),
            critical_point_volume: OptionalField::known(completed.critical_point_volume),
            critical_point_temperature: OptionalField::known(completed.critical_point_temperature),
            critical_point_compressibility: OptionalField::known(completed.critical_point_compressibility),
            latent_heat_of_vaporization: OptionalField::known(completed.latent_heat_of_vaporization),
            latent_heat_of_fusion: OptionalField::known(completed.latent_heat_of_fusion),
            triple_point_pressure: OptionalField::known(completed.triple_point_pressure),
            triple_point_temperature: OptionalField::known(completed.triple_point_temperature),
            freezing_point_sample_pressure: OptionalField::known(completed.freezing_point_sample_pressure),
            freezing_point_sample_temperature: OptionalField::known(completed.freezing_point_sample_temperature),
            boiling_point_sample_pressure: OptionalField::known(completed.boiling_point_sample_pressure),
            boiling_point_sample_temperature: OptionalField::known(completed.boiling_point_sample_temperature),
            simon_glatzel_slope: OptionalField::known(completed.simon_glatzel_slope),
            simon_glatzel_exponent: OptionalField::known(completed.simon_glatzel_exponent),
            molecular_absorption_cross_section: OptionalField::known(
                completed.molecular_absorption_cross_section.clone(),
            ),
            gas: PartlyKnownGas::from(&completed.gas),
            liquid: PartlyKnownLiquid::from(&completed.liquid),
            solids: completed.solids.iter().map(PartlyKnownSolid::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_record_counts_nothing() {
        let compound = PartlyKnownCompound::default();
        assert_eq!(compound.known_count(), 0);
        assert_eq!(compound.missing_fields().len(), 20 + 5 + 7);
    }

    #[test]
    fn test_known_count_includes_every_polymorph() {
        let solid = PartlyKnownSolid {
            density: OptionalField::known(Property::Exact(917.0)),
            ..Default::default()
        };
        let compound = PartlyKnownCompound {
            molar_mass: OptionalField::known(0.018015),
            solids: vec![solid.clone(), solid],
            ..Default::default()
        };
        assert_eq!(compound.known_count(), 3);
        assert!(compound.missing_fields().contains(&"solids[1].shear_modulus".to_string()));
    }

    #[test]
    fn test_deserializes_sparse_json() {
        let json = r#"{
            "molar_mass": 0.018015,
            "liquid": { "density": { "Exact": 997.0 } },
            "solids": [ {}, { "density": { "Exact": 917.0 } } ]
        }"#;
        let compound: PartlyKnownCompound = serde_json::from_str(json).unwrap();
        assert_eq!(compound.molar_mass.get(), Some(0.018015));
        assert!(compound.liquid.density.is_known());
        assert_eq!(compound.solids.len(), 2);
        assert!(compound.solids[0].density.is_unknown());
        assert_eq!(compound.known_count(), 3);
    }
}
