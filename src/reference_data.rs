//! A small curated set of literature tables.
//!
//! Water is the root of the fallback graph and is curated densely enough to be
//! completed from inference alone. The other compounds list what the
//! literature commonly reports and borrow the rest along the chain
//! carbon dioxide -> water, methane -> carbon dioxide, nitrogen -> methane,
//! oxygen -> nitrogen, argon -> nitrogen.
//!
//! Sources: NIST Chemistry WebBook, CRC Handbook of Chemistry and Physics,
//! Perry's Chemical Engineers' Handbook (DIPPR coefficients), IAPWS for water.

use crate::catalog::{CatalogError, CatalogSources};
use crate::compound_id::CompoundId::{self, *};
use crate::optional_field::OptionalField;
use crate::partly_known_compound::PartlyKnownCompound;
use crate::phase::{PartlyKnownGas, PartlyKnownLiquid, PartlyKnownSolid};
use crate::relation::{Axis, Property, Relation};
use crate::table::{DenseTable, SparseTable};

const TRIPLE_POINT_TEMPERATURE_JSON: &str = include_str!("../data/triple_point_temperature.json");
const TRIPLE_POINT_PRESSURE_JSON: &str = include_str!("../data/triple_point_pressure.json");
const LATENT_HEAT_OF_FUSION_JSON: &str = include_str!("../data/latent_heat_of_fusion.json");

fn exact(value: f64) -> OptionalField<Property> {
    OptionalField::known(Property::Exact(value))
}

fn relation(relation: Relation) -> OptionalField<Property> {
    OptionalField::known(Property::Relation(relation))
}

fn gas_phases() -> SparseTable<PartlyKnownGas> {
    let gas = |specific_heat: f64, viscosity: f64, refractive_index: f64| PartlyKnownGas {
        isobaric_specific_heat_capacity: exact(specific_heat),
        dynamic_viscosity: exact(viscosity),
        refractive_index: exact(refractive_index),
        ..Default::default()
    };
    SparseTable::from_entries(
        "gas",
        [
            (
                Water,
                PartlyKnownGas {
                    thermal_conductivity: exact(0.0248),
                    ..gas(2080.0, 1.227e-5, 1.000261)
                },
            ),
            (CarbonDioxide, gas(844.0, 1.47e-5, 1.000449)),
            (Methane, gas(2220.0, 1.10e-5, 1.000444)),
            (Nitrogen, gas(1040.0, 1.76e-5, 1.000298)),
            (Oxygen, gas(918.0, 2.04e-5, 1.000271)),
            (Argon, gas(520.3, 2.23e-5, 1.000281)),
        ],
    )
}

fn liquid_phases() -> SparseTable<PartlyKnownLiquid> {
    let liquid = |specific_heat: f64, refractive_index: f64| PartlyKnownLiquid {
        isobaric_specific_heat_capacity: exact(specific_heat),
        refractive_index: exact(refractive_index),
        ..Default::default()
    };
    SparseTable::from_entries(
        "liquid",
        [
            (
                Water,
                PartlyKnownLiquid {
                    thermal_conductivity: exact(0.6065),
                    dynamic_viscosity: relation(Relation::Dippr101 {
                        coefficients: [-52.843, 3703.6, 5.866, -5.879e-29, 10.0],
                    }),
                    density: relation(Relation::Dippr105 { coefficients: [98.343885, 0.30542, 647.13, 0.081] }),
                    vapor_pressure: relation(Relation::Dippr101 {
                        coefficients: [73.649, -7258.2, -7.3037, 4.1653e-6, 2.0],
                    }),
                    surface_tension: relation(Relation::Dippr106 {
                        critical_temperature_k: 647.13,
                        coefficients: [0.18548, 2.717, -3.554, 2.047, 0.0],
                    }),
                    ..liquid(4181.3, 1.333)
                },
            ),
            (CarbonDioxide, liquid(2000.0, 1.195)),
            (
                Methane,
                PartlyKnownLiquid {
                    surface_tension: relation(Relation::Dippr106 {
                        critical_temperature_k: 190.56,
                        coefficients: [0.03825, 1.1874, 0.0, 0.0, 0.0],
                    }),
                    ..liquid(3480.0, 1.29)
                },
            ),
            (Nitrogen, liquid(2040.0, 1.199)),
            (Oxygen, liquid(1699.0, 1.2243)),
            (Argon, liquid(1117.0, 1.23)),
        ],
    )
}

fn solid_phases() -> SparseTable<Vec<PartlyKnownSolid>> {
    let with_density = |density: f64| PartlyKnownSolid { density: exact(density), ..Default::default() };
    let ice_ih = PartlyKnownSolid {
        isobaric_specific_heat_capacity: exact(2050.0),
        thermal_conductivity: exact(2.22),
        dynamic_viscosity: exact(1e13),
        density: exact(916.9),
        surface_tension: exact(0.109),
        refractive_index: exact(1.31),
        tensile_modulus: exact(9.1e9),
        shear_modulus: exact(3.5e9),
        compressive_fracture_strength: exact(5e6),
        tensile_fracture_strength: exact(1e6),
        shear_fracture_strength: exact(1.1e6),
        compressive_yield_strength: exact(5e6),
        tensile_yield_strength: exact(1e6),
        ..Default::default()
    };
    SparseTable::from_entries(
        "solids",
        [
            (Water, vec![ice_ih]),
            (CarbonDioxide, vec![with_density(1562.0)]),
            (Methane, vec![with_density(522.0)]),
            // alpha and beta nitrogen
            (Nitrogen, vec![with_density(1026.0), with_density(990.0)]),
            (Oxygen, vec![with_density(1426.0)]),
            (Argon, vec![with_density(1616.0)]),
        ],
    )
}

/// Builds the reference source tables.
pub fn sources() -> Result<CatalogSources, CatalogError> {
    let molar_mass = DenseTable::from_entries(
        "molar_mass",
        [
            (Water, 0.018015),
            (CarbonDioxide, 0.04401),
            (Methane, 0.016043),
            (Nitrogen, 0.0280134),
            (Oxygen, 0.031998),
            (Argon, 0.039948),
        ],
    )?;
    let atoms_per_molecule = DenseTable::from_entries(
        "atoms_per_molecule",
        [(Water, 3), (CarbonDioxide, 3), (Methane, 5), (Nitrogen, 2), (Oxygen, 2), (Argon, 1)],
    )?;
    let borrows_from = DenseTable::from_entries(
        "borrows_from",
        [
            (Water, None),
            (CarbonDioxide, Some(Water)),
            (Methane, Some(CarbonDioxide)),
            (Nitrogen, Some(Methane)),
            (Oxygen, Some(Nitrogen)),
            (Argon, Some(Nitrogen)),
        ],
    )?;

    let sparse = |name: &'static str, entries: &[(CompoundId, f64)]| {
        SparseTable::from_entries(name, entries.iter().copied())
    };

    Ok(CatalogSources {
        molecular_diameter: sparse("molecular_diameter", &[(Water, 2.65e-10)]),
        molecular_degrees_of_freedom: sparse("molecular_degrees_of_freedom", &[(Water, 6.0)]),
        acentric_factor: sparse(
            "acentric_factor",
            &[
                (Water, 0.3443),
                (CarbonDioxide, 0.2276),
                (Methane, 0.0114),
                (Nitrogen, 0.0372),
                (Oxygen, 0.0222),
                (Argon, -0.0022),
            ],
        ),
        critical_point_pressure: sparse(
            "critical_point_pressure",
            &[
                (Water, 22.064e6),
                (CarbonDioxide, 7.3773e6),
                (Methane, 4.5992e6),
                (Nitrogen, 3.3958e6),
                (Oxygen, 5.043e6),
                (Argon, 4.863e6),
            ],
        ),
        critical_point_volume: sparse(
            "critical_point_volume",
            &[
                (Water, 55.9e-6),
                (CarbonDioxide, 94.07e-6),
                (Methane, 98.6e-6),
                (Nitrogen, 89.5e-6),
                (Oxygen, 73.4e-6),
                (Argon, 75.7e-6),
            ],
        ),
        critical_point_temperature: sparse(
            "critical_point_temperature",
            &[
                (Water, 647.096),
                (CarbonDioxide, 304.13),
                (Methane, 190.564),
                (Nitrogen, 126.192),
                (Oxygen, 154.581),
                (Argon, 150.687),
            ],
        ),
        latent_heat_of_vaporization: sparse(
            "latent_heat_of_vaporization",
            &[(Water, 2.2564e6), (Methane, 510.83e3), (Nitrogen, 199.2e3), (Oxygen, 213.1e3), (Argon, 161.0e3)],
        ),
        latent_heat_of_fusion: SparseTable::from_json_str("latent_heat_of_fusion", LATENT_HEAT_OF_FUSION_JSON)?,
        triple_point_pressure: SparseTable::from_json_str("triple_point_pressure", TRIPLE_POINT_PRESSURE_JSON)?,
        triple_point_temperature: SparseTable::from_json_str(
            "triple_point_temperature",
            TRIPLE_POINT_TEMPERATURE_JSON,
        )?,
        freezing_point_sample_pressure: sparse("freezing_point_sample_pressure", &[(Water, 101_325.0)]),
        freezing_point_sample_temperature: sparse("freezing_point_sample_temperature", &[(Water, 273.15)]),
        // carbon dioxide has no normal boiling point; its sample sits on the liquid side at 10 bar
        boiling_point_sample_pressure: sparse(
            "boiling_point_sample_pressure",
            &[
                (Water, 101_325.0),
                (CarbonDioxide, 1.005e6),
                (Methane, 101_325.0),
                (Nitrogen, 101_325.0),
                (Oxygen, 101_325.0),
                (Argon, 101_325.0),
            ],
        ),
        boiling_point_sample_temperature: sparse(
            "boiling_point_sample_temperature",
            &[
                (Water, 373.15),
                (CarbonDioxide, 233.15),
                (Methane, 111.66),
                (Nitrogen, 77.355),
                (Oxygen, 90.19),
                (Argon, 87.302),
            ],
        ),
        simon_glatzel_slope: sparse("simon_glatzel_slope", &[(Water, -395.2e6), (Nitrogen, 160.7e6), (Argon, 211.4e6)]),
        simon_glatzel_exponent: sparse("simon_glatzel_exponent", &[(Water, 9.0), (Nitrogen, 1.791), (Argon, 1.593)]),
        molecular_absorption_cross_section: SparseTable::from_entries(
            "molecular_absorption_cross_section",
            [(
                Water,
                Property::Relation(Relation::Interpolated {
                    axis: Axis::Wavenumber,
                    samples: vec![
                        (1.0e5, 1.0e-23),
                        (5.0e5, 3.0e-25),
                        (1.5e6, 1.0e-28),
                        (2.0e6, 1.0e-28),
                        (5.0e6, 1.0e-26),
                        (1.0e7, 1.0e-21),
                    ],
                }),
            )],
        ),
        gas: gas_phases(),
        liquid: liquid_phases(),
        solids: solid_phases(),
        ..CatalogSources::new(molar_mass, atoms_per_molecule, borrows_from)
    })
}

/// The water record exactly as the reference tables report it.
pub fn water() -> Result<PartlyKnownCompound, CatalogError> {
    Ok(sources()?.compound(Water))
}
