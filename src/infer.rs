//! Inference: a fixed, hand-ordered chain of physically grounded derivations.
//!
//! Each step fills only fields that are still unknown and keeps a derived
//! value only if it passes the field's plausibility predicate. The order of
//! the steps below is the priority order of the rules; changing it changes
//! which route a field is derived through.

use crate::constants::{DERIVATIVE_RELATIVE_STEP, LIQUID_PACKING_FRACTION};
use crate::correlation;
use crate::math_utils::central_difference;
use crate::partly_known_compound::PartlyKnownCompound;
use crate::plausibility::{ACENTRIC_FACTOR, COMPRESSIBILITY, POSITIVE};
use crate::polymorph;
use crate::relation::{Property, Relation, StatePoint};
use crate::samples::Samples;

/// Applies `pass` until it stops discovering fields.
///
/// Passes never overwrite a known field, so an unchanged known count means
/// the record itself is unchanged and `pass` has reached its fixed point.
pub(crate) fn until_stable(
    compound: &PartlyKnownCompound,
    pass: impl Fn(&PartlyKnownCompound) -> PartlyKnownCompound,
) -> PartlyKnownCompound {
    let mut current = pass(compound);
    loop {
        let next = pass(&current);
        if next.known_count() == current.known_count() {
            return current;
        }
        current = next;
    }
}

/// Derives as many unknown fields as the inference rules allow.
///
/// Last-resort routes only run once the ordered rules have stopped making
/// progress, so they never pre-empt a better estimate a later pass would find.
pub fn infer(compound: &PartlyKnownCompound) -> PartlyKnownCompound {
    let preferred = until_stable(compound, infer_once);
    until_stable(&preferred, |x| infer_once(&infer_gas_density_last_resort(x)))
}

/// One ordered pass over every inference rule.
pub fn infer_once(compound: &PartlyKnownCompound) -> PartlyKnownCompound {
    let compound = infer_critical_point(compound);
    let compound = infer_densities(&compound);
    let compound = cross_pollinate_solids(&compound);
    let compound = infer_triple_point_temperature(&compound);
    let compound = infer_from_triple_point(&compound);
    let compound = infer_acentric_factor(&compound);
    let compound = infer_from_acentric_factor(&compound);
    let compound = infer_liquid_conductivity(&compound);
    let compound = infer_gas_transport(&compound);
    // some solid rules only become satisfiable once the sweep surfaces what the first round found
    let compound = polymorph::infer_solids(&compound);
    let compound = cross_pollinate_solids(&compound);
    polymorph::infer_solids(&compound)
}

fn cross_pollinate_solids(x: &PartlyKnownCompound) -> PartlyKnownCompound {
    PartlyKnownCompound {
        solids: polymorph::cross_pollinate(&x.solids),
        ..x.clone()
    }
}

/// d(ln P)/dT of a coexistence curve at `at`.
fn log_pressure_slope(pressure: &Property, at: &StatePoint) -> f64 {
    let t = at.temperature_k;
    central_difference(
        |temperature| pressure.at(&at.with_temperature(temperature)).ln(),
        t,
        t * DERIVATIVE_RELATIVE_STEP,
    )
}

fn infer_critical_point(x: &PartlyKnownCompound) -> PartlyKnownCompound {
    let at = Samples::of(x).gas();
    let pc = x.critical_point_pressure.get();
    let tc = x.critical_point_temperature.get();
    let mut y = x.clone();

    y.critical_point_compressibility = y.critical_point_compressibility.fill_if_missing(&COMPRESSIBILITY, &at, || {
        Some(correlation::critical_compressibility(pc?, x.critical_point_volume.get()?, tc?))
    });
    y.critical_point_volume = y.critical_point_volume.fill_if_missing(&POSITIVE, &at, || {
        Some(correlation::critical_volume(y.critical_point_compressibility.get()?, pc?, tc?))
    });
    y.molecular_diameter = y.molecular_diameter.fill_if_missing(&POSITIVE, &at, || {
        Some(correlation::molecular_diameter_from_critical_volume(y.critical_point_volume.get()?))
    });
    y
}

fn infer_densities(x: &PartlyKnownCompound) -> PartlyKnownCompound {
    let samples = Samples::of(x);
    let molar_mass = x.molar_mass.get();
    let pc = x.critical_point_pressure.get();
    let tc = x.critical_point_temperature.get();
    let mut y = x.clone();

    y.liquid.density = y.liquid.density
        .fill_if_missing(&POSITIVE, &samples.liquid(), || {
            Some(Property::Relation(Relation::RackettLiquidDensity {
                molar_mass_kg_per_mol: molar_mass?,
                critical_temperature_k: tc?,
                critical_pressure_pa: pc?,
                critical_compressibility: x.critical_point_compressibility.get()?,
            }))
        })
        .fill_if_missing(&POSITIVE, &samples.liquid(), || {
            Some(Property::Exact(correlation::packed_density(
                molar_mass?,
                x.molecular_diameter.get()?,
                LIQUID_PACKING_FRACTION,
            )))
        });

    y.gas.density = y.gas.density.fill_if_missing(&POSITIVE, &samples.gas(), || {
        Some(Property::Relation(Relation::PitzerVirialGasDensity {
            molar_mass_kg_per_mol: molar_mass?,
            critical_temperature_k: tc?,
            critical_pressure_pa: pc?,
            acentric_factor: x.acentric_factor.get()?,
        }))
    });
    y
}

/// Gas density for records whose acentric factor stays unknown: the Pitzer
/// virial as a simple fluid (ω = 0), then the ideal gas law.
fn infer_gas_density_last_resort(x: &PartlyKnownCompound) -> PartlyKnownCompound {
    let at = Samples::of(x).gas();
    let molar_mass = x.molar_mass.get();
    let mut y = x.clone();

    y.gas.density = y.gas.density
        .fill_if_missing(&POSITIVE, &at, || {
            Some(Property::Relation(Relation::PitzerVirialGasDensity {
                molar_mass_kg_per_mol: molar_mass?,
                critical_temperature_k: x.critical_point_temperature.get()?,
                critical_pressure_pa: x.critical_point_pressure.get()?,
                acentric_factor: 0.0,
            }))
        })
        .fill_if_missing(&POSITIVE, &at, || {
            Some(Property::Relation(Relation::IdealGasDensity { molar_mass_kg_per_mol: molar_mass? }))
        });
    y
}

/// The melt at the triple point is taken to sit midway between the sampled
/// liquid and solid densities; Guggenheim's scaling then gives its temperature.
fn infer_triple_point_temperature(x: &PartlyKnownCompound) -> PartlyKnownCompound {
    let samples = Samples::of(x);
    let mut y = x.clone();

    y.triple_point_temperature = y.triple_point_temperature.fill_if_missing(&POSITIVE, &samples.solid(), || {
        let liquid = x.liquid.density.at(&samples.liquid())?;
        let solid = x.representative_solid()?.density.at(&samples.solid())?;
        let critical_density = x.molar_mass.get()? / x.critical_point_volume.get()?;
        Some(correlation::guggenheim_temperature_for_density(
            0.5 * (liquid + solid),
            critical_density,
            x.critical_point_temperature.get()?,
        ))
    });
    y
}

fn infer_from_triple_point(x: &PartlyKnownCompound) -> PartlyKnownCompound {
    let samples = Samples::of(x);
    let triple = samples.triple_point;
    let at = triple.unwrap_or_else(|| samples.liquid());
    let molar_mass = x.molar_mass.get();
    let mut y = x.clone();

    y.latent_heat_of_vaporization = y.latent_heat_of_vaporization
        .fill_if_missing(&POSITIVE, &at, || {
            let triple = triple?;
            let slope = log_pressure_slope(x.liquid.vapor_pressure.value()?, &triple);
            Some(correlation::latent_heat_from_log_pressure_slope(slope, triple.temperature_k, molar_mass?))
        })
        .fill_if_missing(&POSITIVE, &at, || {
            let (triple, boiling) = (triple?, samples.boiling_point?);
            Some(correlation::clausius_clapeyron_latent_heat(
                triple.pressure_pa,
                triple.temperature_k,
                boiling.pressure_pa,
                boiling.temperature_k,
                molar_mass?,
            ))
        });

    // sublimation minus vaporization
    y.latent_heat_of_fusion = y.latent_heat_of_fusion.fill_if_missing(&POSITIVE, &at, || {
        let triple = triple?;
        let slope = log_pressure_slope(x.representative_solid()?.vapor_pressure.value()?, &triple);
        let sublimation = correlation::latent_heat_from_log_pressure_slope(slope, triple.temperature_k, molar_mass?);
        Some(sublimation - y.latent_heat_of_vaporization.get()?)
    });

    let sublimation = y.solids.first().map(|representative| {
        representative.vapor_pressure.fill_if_missing(&POSITIVE, &samples.solid(), || {
            polymorph::sublimation_pressure(&y, &samples)
        })
    });
    if let (Some(vapor_pressure), Some(representative)) = (sublimation, y.solids.first_mut()) {
        representative.vapor_pressure = vapor_pressure;
    }
    y
}

/// Three independent estimators in priority order; the first plausible one wins.
fn infer_acentric_factor(x: &PartlyKnownCompound) -> PartlyKnownCompound {
    let samples = Samples::of(x);
    let liquid = samples.liquid();
    let molar_mass = x.molar_mass.get();
    let pc = x.critical_point_pressure.get();
    let tc = x.critical_point_temperature.get();
    let mut y = x.clone();

    y.acentric_factor = y.acentric_factor
        .fill_if_missing(&ACENTRIC_FACTOR, &liquid, || {
            Some(correlation::pitzer_acentric_factor(
                x.latent_heat_of_vaporization.get()?,
                molar_mass?,
                tc?,
                samples.boiling_point?.temperature_k,
            ))
        })
        .fill_if_missing(&ACENTRIC_FACTOR, &liquid, || {
            Some(correlation::letsou_stiel_acentric_factor(
                x.liquid.dynamic_viscosity.at(&liquid)?,
                molar_mass?,
                tc?,
                pc?,
                liquid.temperature_k,
            ))
        })
        .fill_if_missing(&ACENTRIC_FACTOR, &liquid, || {
            Some(correlation::lee_kesler_acentric_factor(
                tc?,
                pc?,
                x.liquid.vapor_pressure.at(&liquid)?,
                liquid.temperature_k,
            ))
        });
    y
}

fn infer_from_acentric_factor(x: &PartlyKnownCompound) -> PartlyKnownCompound {
    let samples = Samples::of(x);
    let liquid = samples.liquid();
    let molar_mass = x.molar_mass.get();
    let pc = x.critical_point_pressure.get();
    let tc = x.critical_point_temperature.get();
    let omega = x.acentric_factor.get();
    let mut y = x.clone();

    y.latent_heat_of_vaporization = y.latent_heat_of_vaporization.fill_if_missing(&POSITIVE, &liquid, || {
        Some(correlation::pitzer_latent_heat_of_vaporization(
            molar_mass?,
            tc?,
            omega?,
            samples.boiling_point?.temperature_k,
        ))
    });
    y.liquid.dynamic_viscosity = y.liquid.dynamic_viscosity.fill_if_missing(&POSITIVE, &liquid, || {
        Some(Property::Relation(Relation::LetsouStielViscosity {
            molar_mass_kg_per_mol: molar_mass?,
            critical_temperature_k: tc?,
            critical_pressure_pa: pc?,
            acentric_factor: omega?,
        }))
    });
    y.liquid.vapor_pressure = y.liquid.vapor_pressure.fill_if_missing(&POSITIVE, &liquid, || {
        Some(Property::Relation(Relation::LeeKeslerVaporPressure {
            critical_temperature_k: tc?,
            critical_pressure_pa: pc?,
            acentric_factor: omega?,
        }))
    });
    y
}

fn infer_liquid_conductivity(x: &PartlyKnownCompound) -> PartlyKnownCompound {
    let samples = Samples::of(x);
    let molar_mass = x.molar_mass.get();
    let mut y = x.clone();

    y.liquid.thermal_conductivity = y.liquid.thermal_conductivity
        .fill_if_missing(&POSITIVE, &samples.liquid(), || {
            Some(Property::Relation(Relation::SatoRiedelConductivity {
                molar_mass_kg_per_mol: molar_mass?,
                boiling_temperature_k: samples.boiling_point?.temperature_k,
                critical_temperature_k: x.critical_point_temperature.get()?,
            }))
        })
        .fill_if_missing(&POSITIVE, &samples.liquid(), || {
            Some(Property::Relation(Relation::SheffyJohnsonConductivity {
                molar_mass_kg_per_mol: molar_mass?,
                melting_temperature_k: samples.freezing_point?.temperature_k,
            }))
        });
    y
}

/// Gas viscosity and conductivity supply each other through the Eucken relation.
fn infer_gas_transport(x: &PartlyKnownCompound) -> PartlyKnownCompound {
    let at = Samples::of(x).gas();
    let molar_mass = x.molar_mass.get();
    let mut y = x.clone();

    y.gas.dynamic_viscosity = y.gas.dynamic_viscosity.fill_if_missing(&POSITIVE, &at, || {
        Some(Property::Relation(Relation::EuckenViscosity {
            conductivity: Box::new(x.gas.thermal_conductivity.value()?.clone()),
            specific_heat: Box::new(x.gas.isobaric_specific_heat_capacity.value()?.clone()),
            molar_mass_kg_per_mol: molar_mass?,
        }))
    });
    y.gas.thermal_conductivity = y.gas.thermal_conductivity.fill_if_missing(&POSITIVE, &at, || {
        Some(Property::Relation(Relation::EuckenConductivity {
            viscosity: Box::new(y.gas.dynamic_viscosity.value()?.clone()),
            specific_heat: Box::new(x.gas.isobaric_specific_heat_capacity.value()?.clone()),
            molar_mass_kg_per_mol: molar_mass?,
        }))
    });
    y
}
