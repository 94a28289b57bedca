//! Speculation: rule-of-thumb guesses for whatever inference could not derive.
//!
//! These are weaker than the inference rules and only run afterwards. Each
//! guess still passes through the field's plausibility check and never
//! replaces a known value.

use crate::constants::{
    DEFAULT_MOLECULAR_DEGREES_OF_FREEDOM, SOLID_DENSITY_PER_LIQUID_DENSITY, SOLID_VISCOSITY_PER_LIQUID_VISCOSITY,
};
use crate::infer::until_stable;
use crate::partly_known_compound::PartlyKnownCompound;
use crate::phase::PartlyKnownSolid;
use crate::plausibility::POSITIVE;
use crate::relation::Property;
use crate::samples::Samples;

/// Applies every speculative rule until none of them discovers anything new.
pub fn speculate(compound: &PartlyKnownCompound) -> PartlyKnownCompound {
    until_stable(compound, speculate_once)
}

/// One ordered pass over every speculative rule.
pub fn speculate_once(x: &PartlyKnownCompound) -> PartlyKnownCompound {
    let samples = Samples::of(x);
    let (liquid_at, solid_at) = (samples.liquid(), samples.solid());
    let mut y = x.clone();

    let liquid_density = x.liquid.density.at(&liquid_at);
    let liquid_viscosity = x.liquid.dynamic_viscosity.at(&liquid_at);
    y.solids = x
        .solids
        .iter()
        .map(|solid| PartlyKnownSolid {
            density: solid.density.fill_if_missing(&POSITIVE, &solid_at, || {
                Some(Property::Exact(liquid_density? * SOLID_DENSITY_PER_LIQUID_DENSITY))
            }),
            dynamic_viscosity: solid.dynamic_viscosity.fill_if_missing(&POSITIVE, &solid_at, || {
                Some(Property::Exact(liquid_viscosity? * SOLID_VISCOSITY_PER_LIQUID_VISCOSITY))
            }),
            ..solid.clone()
        })
        .collect();

    y.liquid.density = y.liquid.density.fill_if_missing(&POSITIVE, &liquid_at, || {
        let solid_density = x.representative_solid()?.density.at(&solid_at)?;
        Some(Property::Exact(solid_density / SOLID_DENSITY_PER_LIQUID_DENSITY))
    });

    y.molecular_degrees_of_freedom = y
        .molecular_degrees_of_freedom
        .fill_if_missing(&POSITIVE, &liquid_at, || {
            Some(degrees_of_freedom(x.atoms_per_molecule.get()?, x.acentric_factor.get()?))
        })
        .or_value(DEFAULT_MOLECULAR_DEGREES_OF_FREEDOM);
    y
}

/// Translational and rotational modes, plus a share of the vibrational modes
/// that grows with the molecule's departure from sphericity.
fn degrees_of_freedom(atoms_per_molecule: u32, acentric_factor: f64) -> f64 {
    if atoms_per_molecule <= 1 {
        return 3.0;
    }
    let (rotational, vibrational) = if atoms_per_molecule == 2 {
        (2.0, 1.0)
    } else {
        // nonlinear molecules assumed
        (3.0, 3.0 * atoms_per_molecule as f64 - 6.0)
    };
    3.0 + rotational + acentric_factor.max(0.0) * vibrational
}
