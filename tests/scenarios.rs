use approx::assert_abs_diff_eq;
use compound_catalog::catalog::Catalog;
use compound_catalog::complete::complete;
use compound_catalog::compound_id::CompoundId;
use compound_catalog::correlation;
use compound_catalog::infer::infer;
use compound_catalog::optional_field::OptionalField;
use compound_catalog::partly_known_compound::PartlyKnownCompound;
use compound_catalog::phase::{PartlyKnownGas, PartlyKnownLiquid, PartlyKnownSolid};
use compound_catalog::polymorph::cross_pollinate;
use compound_catalog::reference_data;
use compound_catalog::relation::{Property, StatePoint};
use compound_catalog::speculate::speculate;
use more_asserts::{assert_gt, assert_lt};

fn exact(value: f64) -> OptionalField<Property> {
    OptionalField::known(Property::Exact(value))
}

#[test]
fn test_acentric_factor_from_a_single_vapor_pressure_sample() {
    // water, with its vapor pressure at the literature point
    let compound = PartlyKnownCompound {
        molar_mass: OptionalField::known(0.018015),
        critical_point_pressure: OptionalField::known(22.064e6),
        critical_point_temperature: OptionalField::known(647.096),
        liquid: PartlyKnownLiquid {
            vapor_pressure: exact(3169.9),
            ..Default::default()
        },
        ..Default::default()
    };
    assert!(compound.acentric_factor.is_unknown());

    let omega = infer(&compound).acentric_factor.get().expect("acentric factor inferred");
    assert_gt!(omega, -1.0);
    assert_lt!(omega, 1.0);
}

#[test]
fn test_density_on_one_polymorph_reaches_all_three() {
    let solids = vec![
        PartlyKnownSolid::default(),
        PartlyKnownSolid::default(),
        PartlyKnownSolid {
            density: exact(1562.0),
            ..Default::default()
        },
    ];
    for solid in cross_pollinate(&solids) {
        assert_eq!(solid.density.value(), Some(&Property::Exact(1562.0)));
    }

    let inferred = infer(&PartlyKnownCompound { solids, ..Default::default() });
    assert_eq!(inferred.solids.len(), 3);
    for solid in &inferred.solids {
        assert_eq!(solid.density.value(), Some(&Property::Exact(1562.0)));
    }
}

#[test]
fn test_gas_conductivity_from_viscosity_and_heat_capacity() {
    let compound = PartlyKnownCompound {
        molar_mass: OptionalField::known(0.0280134),
        gas: PartlyKnownGas {
            dynamic_viscosity: exact(1.76e-5),
            isobaric_specific_heat_capacity: exact(1040.0),
            ..Default::default()
        },
        ..Default::default()
    };
    let inferred = infer(&compound);
    let expected = correlation::eucken_gas_conductivity(1.76e-5, 1040.0, 0.0280134);
    for state in [StatePoint::STANDARD, StatePoint::new(2e5, 150.0)] {
        assert_abs_diff_eq!(inferred.gas.thermal_conductivity.at(&state).unwrap(), expected, epsilon = 1e-15);
    }
    // the viscosity it was derived from is untouched
    assert_eq!(inferred.gas.dynamic_viscosity.value(), Some(&Property::Exact(1.76e-5)));
}

#[test]
fn test_record_with_no_data_completes_to_its_fallback() {
    let sources = reference_data::sources().unwrap();
    let catalog = Catalog::build(&sources).unwrap();
    let fallback = catalog.get(CompoundId::Water);

    let empty = PartlyKnownCompound::default();
    let completed = complete(&speculate(&infer(&empty)), fallback);
    // speculation supplies its default degrees of freedom, which water happens to share
    assert_eq!(&completed, fallback);
    assert_eq!(&complete(&empty, fallback), fallback);
}

#[test]
fn test_implausible_acentric_factor_is_rejected() {
    let latent_heat = correlation::pitzer_latent_heat_of_vaporization(0.1, 500.0, 1.4, 350.0);
    let compound = PartlyKnownCompound {
        molar_mass: OptionalField::known(0.1),
        atoms_per_molecule: OptionalField::known(8),
        critical_point_temperature: OptionalField::known(500.0),
        latent_heat_of_vaporization: OptionalField::known(latent_heat),
        boiling_point_sample_pressure: OptionalField::known(101_325.0),
        boiling_point_sample_temperature: OptionalField::known(350.0),
        ..Default::default()
    };
    let candidate = correlation::pitzer_acentric_factor(latent_heat, 0.1, 500.0, 350.0);
    assert_abs_diff_eq!(candidate, 1.4, epsilon = 1e-9);

    let inferred = infer(&compound);
    assert!(inferred.acentric_factor.is_unknown());
    assert!(inferred.missing_fields().contains(&"acentric_factor".to_string()));

    // speculation sees the gap: no factor-based guess, only the default
    let speculated = speculate(&inferred);
    assert!(speculated.acentric_factor.is_unknown());
    assert_eq!(speculated.molecular_degrees_of_freedom.get(), Some(6.0));
}
