//! A per-substance property bundle with no missing fields.

use crate::phase::{CompletedGas, CompletedLiquid, CompletedSolid};
use crate::plausibility::{ACENTRIC_FACTOR, COMPRESSIBILITY, FINITE, POSITIVE, Plausibility};
use crate::relation::{Property, StatePoint};
use crate::samples::Samples;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompletedCompound {
    pub molar_mass: f64,
    pub atoms_per_molecule: u32,
    pub molecular_diameter: f64,
    pub molecular_degrees_of_freedom: f64,
    pub acentric_factor: f64,

    pub critical_point_pressure: f64,
    pub critical_point_volume: f64,
    pub critical_point_temperature: f64,
    pub critical_point_compressibility: f64,

    pub latent_heat_of_vaporization: f64,
    pub latent_heat_of_fusion: f64,

    pub triple_point_pressure: f64,
    pub triple_point_temperature: f64,
    pub freezing_point_sample_pressure: f64,
    pub freezing_point_sample_temperature: f64,
    pub boiling_point_sample_pressure: f64,
    pub boiling_point_sample_temperature: f64,

    pub simon_glatzel_slope: f64,
    pub simon_glatzel_exponent: f64,

    pub molecular_absorption_cross_section: Property,

    pub gas: CompletedGas,
    pub liquid: CompletedLiquid,
    pub solids: Vec<CompletedSolid>,
}

impl CompletedCompound {
    pub fn triple_point(&self) -> StatePoint {
        StatePoint::new(self.triple_point_pressure, self.triple_point_temperature)
    }

    /// Melting temperature at `pressure_pa` along the Simon-Glatzel curve.
    pub fn melting_temperature(&self, pressure_pa: f64) -> f64 {
        let relative = (pressure_pa - self.triple_point_pressure) / self.simon_glatzel_slope;
        self.triple_point_temperature * (1.0 + relative).powf(1.0 / self.simon_glatzel_exponent)
    }

    pub fn representative_solid(&self) -> Option<&CompletedSolid> {
        self.solids.first()
    }

    /// Names of fields whose values fall outside their plausible range.
    ///
    /// Phase properties are checked at the representative sample of their
    /// phase. Used to catch corrupted or newly added data, never at runtime.
    pub fn implausible_fields(&self) -> Vec<String> {
        let scalars: [(&str, f64, Plausibility); 19] = [
            ("molar_mass", self.molar_mass, POSITIVE),
            ("atoms_per_molecule", self.atoms_per_molecule as f64, POSITIVE),
            ("molecular_diameter", self.molecular_diameter, POSITIVE),
            ("molecular_degrees_of_freedom", self.molecular_degrees_of_freedom, POSITIVE),
            ("acentric_factor", self.acentric_factor, ACENTRIC_FACTOR),
            ("critical_point_pressure", self.critical_point_pressure, POSITIVE),
            ("critical_point_volume", self.critical_point_volume, POSITIVE),
            ("critical_point_temperature", self.critical_point_temperature, POSITIVE),
            ("critical_point_compressibility", self.critical_point_compressibility, COMPRESSIBILITY),
            ("latent_heat_of_vaporization", self.latent_heat_of_vaporization, POSITIVE),
            ("latent_heat_of_fusion", self.latent_heat_of_fusion, POSITIVE),
            ("triple_point_pressure", self.triple_point_pressure, POSITIVE),
            ("triple_point_temperature", self.triple_point_temperature, POSITIVE),
            ("freezing_point_sample_pressure", self.freezing_point_sample_pressure, POSITIVE),
            ("freezing_point_sample_temperature", self.freezing_point_sample_temperature, POSITIVE),
            ("boiling_point_sample_pressure", self.boiling_point_sample_pressure, POSITIVE),
            ("boiling_point_sample_temperature", self.boiling_point_sample_temperature, POSITIVE),
            ("simon_glatzel_slope", self.simon_glatzel_slope, FINITE),
            ("simon_glatzel_exponent", self.simon_glatzel_exponent, POSITIVE),
        ];
        let mut implausible: Vec<String> = scalars
            .iter()
            .filter(|(_, value, bounds)| !bounds.admits(*value))
            .map(|(name, _, _)| name.to_string())
            .collect();

        let samples = Samples::of_completed(self);
        if !POSITIVE.admits(self.molecular_absorption_cross_section.at(&samples.gas())) {
            implausible.push("molecular_absorption_cross_section".to_string());
        }
        implausible.extend(self.gas.implausible_fields("gas", &samples.gas()));
        implausible.extend(self.liquid.implausible_fields("liquid", &samples.liquid()));
        for (index, solid) in self.solids.iter().enumerate() {
            implausible.extend(solid.implausible_fields(&format!("solids[{}]", index), &samples.solid()));
        }
        implausible
    }
}
