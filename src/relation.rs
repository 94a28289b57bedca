//! Relations: pure functions of state that return one physical quantity.
//!
//! A `Relation` is a tagged family of estimator shapes, each carrying its
//! literal coefficients as data. Inference treats relations as opaque: it only
//! samples them at a `StatePoint` or passes them through into the record.

use crate::constants::{STANDARD_PRESSURE_PA, STANDARD_TEMPERATURE_K, VISIBLE_WAVENUMBER_PER_M};
use crate::correlation;
use crate::math_utils::{inverse_lerp, lerp};
use serde::{Deserialize, Serialize};

/// A thermodynamic state plus the spectral coordinate optical relations need.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatePoint {
    pub pressure_pa: f64,
    pub temperature_k: f64,
    pub wavenumber_per_m: f64,
}

impl StatePoint {
    pub const STANDARD: StatePoint = StatePoint {
        pressure_pa: STANDARD_PRESSURE_PA,
        temperature_k: STANDARD_TEMPERATURE_K,
        wavenumber_per_m: VISIBLE_WAVENUMBER_PER_M,
    };

    pub fn new(pressure_pa: f64, temperature_k: f64) -> Self {
        StatePoint { pressure_pa, temperature_k, wavenumber_per_m: VISIBLE_WAVENUMBER_PER_M }
    }

    pub fn with_temperature(&self, temperature_k: f64) -> Self {
        StatePoint { temperature_k, ..*self }
    }

    pub fn with_wavenumber(&self, wavenumber_per_m: f64) -> Self {
        StatePoint { wavenumber_per_m, ..*self }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    Temperature,
    Pressure,
    Wavenumber,
}

impl Axis {
    pub fn of(&self, state: &StatePoint) -> f64 {
        match self {
            Axis::Temperature => state.temperature_k,
            Axis::Pressure => state.pressure_pa,
            Axis::Wavenumber => state.wavenumber_per_m,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Relation {
    /// Σ cᵢ·xⁱ (DIPPR 100 when the axis is temperature)
    Polynomial { axis: Axis, coefficients: Vec<f64> },
    /// exp(A + B/T + C·ln T + D·T^E)
    Dippr101 { coefficients: [f64; 5] },
    /// A·T^B / (1 + C/T + D/T²)
    Dippr102 { coefficients: [f64; 4] },
    /// A / B^(1 + (1 - T/C)^D), with A pre-scaled to kg/m³
    Dippr105 { coefficients: [f64; 4] },
    /// A·(1-Tr)^(B + C·Tr + D·Tr² + E·Tr³)
    Dippr106 { critical_temperature_k: f64, coefficients: [f64; 5] },
    /// scale·exp(kp·(P - P₀) + kT·(T - T₀))
    ExponentialPressureTemperature {
        scale: f64,
        reference: StatePoint,
        per_pa: f64,
        per_k: f64,
    },
    /// low + (high - low) / (1 + exp(-(x - center)/width))
    Sigmoid { axis: Axis, low: f64, high: f64, center: f64, width: f64 },
    /// Piecewise linear through sorted samples, clamped outside them.
    Interpolated { axis: Axis, samples: Vec<(f64, f64)> },
    IdealGasDensity { molar_mass_kg_per_mol: f64 },
    PitzerVirialGasDensity {
        molar_mass_kg_per_mol: f64,
        critical_temperature_k: f64,
        critical_pressure_pa: f64,
        acentric_factor: f64,
    },
    RackettLiquidDensity {
        molar_mass_kg_per_mol: f64,
        critical_temperature_k: f64,
        critical_pressure_pa: f64,
        critical_compressibility: f64,
    },
    LeeKeslerVaporPressure {
        critical_temperature_k: f64,
        critical_pressure_pa: f64,
        acentric_factor: f64,
    },
    LetsouStielViscosity {
        molar_mass_kg_per_mol: f64,
        critical_temperature_k: f64,
        critical_pressure_pa: f64,
        acentric_factor: f64,
    },
    SatoRiedelConductivity {
        molar_mass_kg_per_mol: f64,
        boiling_temperature_k: f64,
        critical_temperature_k: f64,
    },
    SheffyJohnsonConductivity {
        molar_mass_kg_per_mol: f64,
        melting_temperature_k: f64,
    },
    ClausiusClapeyron {
        reference: StatePoint,
        latent_heat_j_per_kg: f64,
        molar_mass_kg_per_mol: f64,
    },
    EuckenConductivity {
        viscosity: Box<Property>,
        specific_heat: Box<Property>,
        molar_mass_kg_per_mol: f64,
    },
    EuckenViscosity {
        conductivity: Box<Property>,
        specific_heat: Box<Property>,
        molar_mass_kg_per_mol: f64,
    },
}

impl Relation {
    pub fn evaluate(&self, state: &StatePoint) -> f64 {
        let t = state.temperature_k;
        let p = state.pressure_pa;
        match self {
            Relation::Polynomial { axis, coefficients } => {
                let x = axis.of(state);
                coefficients.iter().rev().fold(0.0, |acc, c| acc * x + c)
            }
            Relation::Dippr101 { coefficients: [a, b, c, d, e] } => (a + b / t + c * t.ln() + d * t.powf(*e)).exp(),
            Relation::Dippr102 { coefficients: [a, b, c, d] } => a * t.powf(*b) / (1.0 + c / t + d / (t * t)),
            Relation::Dippr105 { coefficients: [a, b, c, d] } => a / b.powf(1.0 + (1.0 - t / c).powf(*d)),
            Relation::Dippr106 { critical_temperature_k, coefficients: [a, b, c, d, e] } => {
                let tr = t / critical_temperature_k;
                a * (1.0 - tr).powf(b + c * tr + d * tr * tr + e * tr * tr * tr)
            }
            Relation::ExponentialPressureTemperature { scale, reference, per_pa, per_k } => {
                scale * (per_pa * (p - reference.pressure_pa) + per_k * (t - reference.temperature_k)).exp()
            }
            Relation::Sigmoid { axis, low, high, center, width } => {
                let x = axis.of(state);
                low + (high - low) / (1.0 + (-(x - center) / width).exp())
            }
            Relation::Interpolated { axis, samples } => interpolate(samples, axis.of(state)),
            Relation::IdealGasDensity { molar_mass_kg_per_mol } => {
                correlation::ideal_gas_density(*molar_mass_kg_per_mol, p, t)
            }
            Relation::PitzerVirialGasDensity {
                molar_mass_kg_per_mol,
                critical_temperature_k,
                critical_pressure_pa,
                acentric_factor,
            } => correlation::pitzer_virial_gas_density(
                *molar_mass_kg_per_mol,
                *critical_temperature_k,
                *critical_pressure_pa,
                *acentric_factor,
                p,
                t,
            ),
            Relation::RackettLiquidDensity {
                molar_mass_kg_per_mol,
                critical_temperature_k,
                critical_pressure_pa,
                critical_compressibility,
            } => correlation::rackett_liquid_density(
                *molar_mass_kg_per_mol,
                *critical_temperature_k,
                *critical_pressure_pa,
                *critical_compressibility,
                t,
            ),
            Relation::LeeKeslerVaporPressure { critical_temperature_k, critical_pressure_pa, acentric_factor } => {
                correlation::lee_kesler_vapor_pressure(
                    *critical_temperature_k,
                    *critical_pressure_pa,
                    *acentric_factor,
                    t,
                )
            }
            Relation::LetsouStielViscosity {
                molar_mass_kg_per_mol,
                critical_temperature_k,
                critical_pressure_pa,
                acentric_factor,
            } => correlation::letsou_stiel_viscosity(
                *molar_mass_kg_per_mol,
                *critical_temperature_k,
                *critical_pressure_pa,
                *acentric_factor,
                t,
            ),
            Relation::SatoRiedelConductivity {
                molar_mass_kg_per_mol,
                boiling_temperature_k,
                critical_temperature_k,
            } => {
                correlation::sato_riedel_liquid_conductivity(
                    *molar_mass_kg_per_mol,
                    *boiling_temperature_k,
                    *critical_temperature_k,
                    t,
                )
            }
            Relation::SheffyJohnsonConductivity { molar_mass_kg_per_mol, melting_temperature_k } => {
                correlation::sheffy_johnson_liquid_conductivity(*molar_mass_kg_per_mol, *melting_temperature_k, t)
            }
            Relation::ClausiusClapeyron { reference, latent_heat_j_per_kg, molar_mass_kg_per_mol } => {
                correlation::clausius_clapeyron_pressure(
                    reference.pressure_pa,
                    reference.temperature_k,
                    *latent_heat_j_per_kg,
                    *molar_mass_kg_per_mol,
                    t,
                )
            }
            Relation::EuckenConductivity { viscosity, specific_heat, molar_mass_kg_per_mol } => {
                correlation::eucken_gas_conductivity(
                    viscosity.at(state),
                    specific_heat.at(state),
                    *molar_mass_kg_per_mol,
                )
            }
            Relation::EuckenViscosity { conductivity, specific_heat, molar_mass_kg_per_mol } => {
                correlation::eucken_gas_viscosity(
                    conductivity.at(state),
                    specific_heat.at(state),
                    *molar_mass_kg_per_mol,
                )
            }
        }
    }
}

fn interpolate(samples: &[(f64, f64)], x: f64) -> f64 {
    match samples {
        [] => f64::NAN,
        [(_, only)] => *only,
        [(x0, y0), ..] if x <= *x0 => *y0,
        [.., (xn, yn)] if x >= *xn => *yn,
        _ => samples
            .windows(2)
            .find(|pair| x >= pair[0].0 && x <= pair[1].0)
            .map(|pair| lerp(pair[0].1, pair[1].1, inverse_lerp(pair[0].0, pair[1].0, x)))
            .unwrap_or(f64::NAN),
    }
}

/// A known property value: either a single measured number or a function of state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Property {
    Exact(f64),
    Relation(Relation),
}

impl Property {
    pub fn at(&self, state: &StatePoint) -> f64 {
        match self {
            Property::Exact(value) => *value,
            Property::Relation(relation) => relation.evaluate(state),
        }
    }

    pub fn is_state_dependent(&self) -> bool {
        matches!(self, Property::Relation(_))
    }
}

impl From<f64> for Property {
    fn from(value: f64) -> Self {
        Property::Exact(value)
    }
}

impl From<Relation> for Property {
    fn from(relation: Relation) -> Self {
        Property::Relation(relation)
    }
}
