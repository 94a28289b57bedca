//! Phase sub-records, each in a partly known and a completed form.
//!
//! Units are SI: J/(kg·K) for heat capacity, W/(m·K) for conductivity, Pa·s for
//! viscosity, kg/m³ for density, Pa for pressures, moduli and strengths, N/m for
//! surface tension. Refractive index and Poisson ratio are dimensionless.

use crate::optional_field::OptionalField;
use crate::plausibility::{FINITE, POISSON_RATIO, POSITIVE, REFRACTIVE_INDEX};
use crate::relation::{Property, StatePoint};
use serde::{Deserialize, Serialize};

/// Declares a partly known record, its completed twin, and the field-wise
/// operations every stage needs on them.
macro_rules! phase_records {
    (
        $(#[$meta:meta])*
        $partly:ident => $completed:ident {
            $( $(#[$field_meta:meta])* $field:ident => $bounds:expr ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
        #[serde(default)]
        pub struct $partly {
            $( $(#[$field_meta])* pub $field: OptionalField<Property>, )*
        }

        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
        pub struct $completed {
            $( $(#[$field_meta])* pub $field: Property, )*
        }

        impl $partly {
            pub const FIELD_NAMES: &'static [&'static str] = &[$(stringify!($field)),*];

            pub fn known_count(&self) -> usize {
                0 $( + self.$field.is_known() as usize )*
            }

            /// Keeps every known field, adopting `other`'s value wherever this one is unknown.
            pub fn fill_from(&self, other: &Self) -> Self {
                $partly { $( $field: self.$field.or(&other.$field), )* }
            }

            pub fn complete(&self, fallback: &$completed) -> $completed {
                $completed { $( $field: self.$field.complete(&fallback.$field), )* }
            }

            pub fn try_complete(&self) -> Option<$completed> {
                Some($completed { $( $field: self.$field.value()?.clone(), )* })
            }

            pub fn missing_fields(&self, prefix: &str) -> Vec<String> {
                let mut missing = Vec::new();
                $( if self.$field.is_unknown() { missing.push(format!("{}.{}", prefix, stringify!($field))); } )*
                missing
            }
        }

        impl $completed {
            /// Names of fields whose value at `sample` falls outside the field's bounds.
            pub fn implausible_fields(&self, prefix: &str, sample: &StatePoint) -> Vec<String> {
                let mut implausible = Vec::new();
                $( if !$bounds.admits(self.$field.at(sample)) {
                    implausible.push(format!("{}.{}", prefix, stringify!($field)));
                } )*
                implausible
            }
        }

        impl From<&$completed> for $partly {
            fn from(completed: &$completed) -> Self {
                $partly { $( $field: OptionalField::known(completed.$field.clone()), )* }
            }
        }
    };
}

phase_records! {
    /// Properties of the substance as a gas.
    PartlyKnownGas => CompletedGas {
        isobaric_specific_heat_capacity => POSITIVE,
        thermal_conductivity => POSITIVE,
        dynamic_viscosity => POSITIVE,
        density => POSITIVE,
        refractive_index => REFRACTIVE_INDEX,
    }
}

phase_records! {
    /// Properties of the substance as a liquid.
    PartlyKnownLiquid => CompletedLiquid {
        isobaric_specific_heat_capacity => POSITIVE,
        thermal_conductivity => POSITIVE,
        dynamic_viscosity => POSITIVE,
        density => POSITIVE,
        vapor_pressure => POSITIVE,
        surface_tension => POSITIVE,
        refractive_index => REFRACTIVE_INDEX,
    }
}

phase_records! {
    /// Properties of one crystalline form (polymorph) of the substance.
    PartlyKnownSolid => CompletedSolid {
        isobaric_specific_heat_capacity => POSITIVE,
        thermal_conductivity => POSITIVE,
        dynamic_viscosity => POSITIVE,
        density => POSITIVE,
        /// sublimation pressure
        vapor_pressure => POSITIVE,
        /// surface energy against the vapor
        surface_tension => POSITIVE,
        refractive_index => REFRACTIVE_INDEX,
        bulk_modulus => POSITIVE,
        /// Young's modulus
        tensile_modulus => POSITIVE,
        shear_modulus => POSITIVE,
        pwave_modulus => POSITIVE,
        /// Lamé's first parameter
        lame_parameter => FINITE,
        poisson_ratio => POISSON_RATIO,
        compressive_fracture_strength => POSITIVE,
        tensile_fracture_strength => POSITIVE,
        shear_fracture_strength => POSITIVE,
        compressive_yield_strength => POSITIVE,
        tensile_yield_strength => POSITIVE,
        shear_yield_strength => POSITIVE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_from_prefers_own_values() {
        let mine = PartlyKnownGas {
            density: OptionalField::known(Property::Exact(1.0)),
            ..Default::default()
        };
        let theirs = PartlyKnownGas {
            density: OptionalField::known(Property::Exact(2.0)),
            refractive_index: OptionalField::known(Property::Exact(1.0003)),
            ..Default::default()
        };
        let merged = mine.fill_from(&theirs);
        assert_eq!(merged.density.value(), Some(&Property::Exact(1.0)));
        assert_eq!(merged.refractive_index.value(), Some(&Property::Exact(1.0003)));
        assert_eq!(merged.known_count(), 2);
    }

    #[test]
    fn test_missing_fields_are_named() {
        let liquid = PartlyKnownLiquid {
            density: OptionalField::known(Property::Exact(997.0)),
            ..Default::default()
        };
        let missing = liquid.missing_fields("liquid");
        assert_eq!(missing.len(), PartlyKnownLiquid::FIELD_NAMES.len() - 1);
        assert!(missing.contains(&"liquid.vapor_pressure".to_string()));
        assert!(liquid.try_complete().is_none());
    }

    #[test]
    fn test_solid_carries_the_liquid_fields() {
        for name in PartlyKnownLiquid::FIELD_NAMES {
            assert!(PartlyKnownSolid::FIELD_NAMES.contains(name), "solid lacks {}", name);
        }
        let missing = PartlyKnownSolid::default().missing_fields("solids[0]");
        assert!(missing.contains(&"solids[0].surface_tension".to_string()));
    }

    #[test]
    fn test_completed_round_trips_through_partly_known() {
        let completed = CompletedGas {
            isobaric_specific_heat_capacity: Property::Exact(1040.0),
            thermal_conductivity: Property::Exact(0.026),
            dynamic_viscosity: Property::Exact(1.8e-5),
            density: Property::Exact(1.2),
            refractive_index: Property::Exact(1.0003),
        };
        let partly = PartlyKnownGas::from(&completed);
        assert_eq!(partly.known_count(), PartlyKnownGas::FIELD_NAMES.len());
        assert_eq!(partly.try_complete(), Some(completed));
    }
}
