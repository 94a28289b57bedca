//! Rules that act on the list of solid polymorphs.
//!
//! The polymorph at index 0 is the representative form. Cross-pollination
//! gathers every other polymorph's knowledge into it, then hands the result
//! back out, so each missing field is filled from the first polymorph in list
//! order that knows it.

use crate::constants::SOLID_PACKING_FRACTION;
use crate::correlation;
use crate::optional_field::OptionalField;
use crate::partly_known_compound::PartlyKnownCompound;
use crate::phase::PartlyKnownSolid;
use crate::plausibility::{FINITE, POISSON_RATIO, POSITIVE, Plausibility};
use crate::relation::{Property, Relation, StatePoint};
use crate::samples::Samples;

/// Two-pass sweep: fill the representative from every other polymorph, then
/// every other polymorph from the representative.
pub fn cross_pollinate(solids: &[PartlyKnownSolid]) -> Vec<PartlyKnownSolid> {
    let Some((first, rest)) = solids.split_first() else {
        return Vec::new();
    };
    let representative = rest.iter().fold(first.clone(), |hub, other| hub.fill_from(other));
    std::iter::once(representative.clone())
        .chain(rest.iter().map(|solid| solid.fill_from(&representative)))
        .collect()
}

/// Clausius-Clapeyron sublimation curve anchored at the triple point, using
/// the latent heat of sublimation (vaporization plus fusion).
pub fn sublimation_pressure(compound: &PartlyKnownCompound, samples: &Samples) -> Option<Property> {
    let latent_heat = compound.latent_heat_of_vaporization.get()? + compound.latent_heat_of_fusion.get()?;
    Some(Property::Relation(Relation::ClausiusClapeyron {
        reference: samples.triple_point?,
        latent_heat_j_per_kg: latent_heat,
        molar_mass_kg_per_mol: compound.molar_mass.get()?,
    }))
}

fn from_pair(first: Option<f64>, second: Option<f64>, estimate: fn(f64, f64) -> f64) -> Option<Property> {
    Some(Property::Exact(estimate(first?, second?)))
}

fn derive(
    field: &OptionalField<Property>,
    bounds: &Plausibility,
    at: &StatePoint,
    first: &OptionalField<Property>,
    second: &OptionalField<Property>,
    estimate: fn(f64, f64) -> f64,
) -> OptionalField<Property> {
    field.fill_if_missing(bounds, at, || from_pair(first.at(at), second.at(at), estimate))
}

/// Solid-only inference for one polymorph.
pub fn infer_solid(compound: &PartlyKnownCompound, solid: &PartlyKnownSolid) -> PartlyKnownSolid {
    let samples = Samples::of(compound);
    let at = samples.solid();
    let mut s = solid.clone();

    s.density = s.density.fill_if_missing(&POSITIVE, &at, || {
        Some(Property::Exact(correlation::packed_density(
            compound.molar_mass.get()?,
            compound.molecular_diameter.get()?,
            SOLID_PACKING_FRACTION,
        )))
    });
    s.vapor_pressure = s.vapor_pressure.fill_if_missing(&POSITIVE, &at, || {
        sublimation_pressure(compound, &samples)
    });

    // elastic constants: bulk and shear from whichever pair is known, the rest from those two
    s.bulk_modulus = derive(
        &s.bulk_modulus,
        &POSITIVE,
        &at,
        &s.tensile_modulus,
        &s.shear_modulus,
        correlation::bulk_from_tensile_and_shear,
    );
    s.bulk_modulus = derive(
        &s.bulk_modulus,
        &POSITIVE,
        &at,
        &s.tensile_modulus,
        &s.poisson_ratio,
        correlation::bulk_from_tensile_and_poisson,
    );
    s.bulk_modulus = derive(
        &s.bulk_modulus,
        &POSITIVE,
        &at,
        &s.shear_modulus,
        &s.poisson_ratio,
        correlation::bulk_from_shear_and_poisson,
    );
    s.bulk_modulus = derive(
        &s.bulk_modulus,
        &POSITIVE,
        &at,
        &s.lame_parameter,
        &s.shear_modulus,
        correlation::bulk_from_lame_and_shear,
    );
    s.bulk_modulus = derive(
        &s.bulk_modulus,
        &POSITIVE,
        &at,
        &s.pwave_modulus,
        &s.shear_modulus,
        correlation::bulk_from_pwave_and_shear,
    );

    s.shear_modulus = derive(
        &s.shear_modulus,
        &POSITIVE,
        &at,
        &s.bulk_modulus,
        &s.tensile_modulus,
        correlation::shear_from_bulk_and_tensile,
    );
    s.shear_modulus = derive(
        &s.shear_modulus,
        &POSITIVE,
        &at,
        &s.tensile_modulus,
        &s.poisson_ratio,
        correlation::shear_from_tensile_and_poisson,
    );
    s.shear_modulus = derive(
        &s.shear_modulus,
        &POSITIVE,
        &at,
        &s.bulk_modulus,
        &s.poisson_ratio,
        correlation::shear_from_bulk_and_poisson,
    );
    s.shear_modulus = derive(
        &s.shear_modulus,
        &POSITIVE,
        &at,
        &s.bulk_modulus,
        &s.lame_parameter,
        correlation::shear_from_bulk_and_lame,
    );
    s.shear_modulus = derive(
        &s.shear_modulus,
        &POSITIVE,
        &at,
        &s.bulk_modulus,
        &s.pwave_modulus,
        correlation::shear_from_bulk_and_pwave,
    );

    s.tensile_modulus = derive(
        &s.tensile_modulus,
        &POSITIVE,
        &at,
        &s.bulk_modulus,
        &s.shear_modulus,
        correlation::tensile_from_bulk_and_shear,
    );
    s.lame_parameter = derive(
        &s.lame_parameter,
        &FINITE,
        &at,
        &s.bulk_modulus,
        &s.shear_modulus,
        correlation::lame_from_bulk_and_shear,
    );
    s.poisson_ratio = derive(
        &s.poisson_ratio,
        &POISSON_RATIO,
        &at,
        &s.bulk_modulus,
        &s.shear_modulus,
        correlation::poisson_from_bulk_and_shear,
    );
    s.pwave_modulus = derive(
        &s.pwave_modulus,
        &POSITIVE,
        &at,
        &s.bulk_modulus,
        &s.shear_modulus,
        correlation::pwave_from_bulk_and_shear,
    );

    s.shear_yield_strength = s.shear_yield_strength.fill_if_missing(&POSITIVE, &at, || {
        Some(Property::Exact(correlation::shear_yield_from_tensile_yield(s.tensile_yield_strength.at(&at)?)))
    });
    s.tensile_yield_strength = s.tensile_yield_strength.fill_if_missing(&POSITIVE, &at, || {
        Some(Property::Exact(correlation::tensile_yield_from_shear_yield(s.shear_yield_strength.at(&at)?)))
    });

    s
}

/// Solid-only inference over every polymorph.
pub fn infer_solids(compound: &PartlyKnownCompound) -> PartlyKnownCompound {
    PartlyKnownCompound {
        solids: compound.solids.iter().map(|solid| infer_solid(compound, solid)).collect(),
        ..compound.clone()
    }
}
