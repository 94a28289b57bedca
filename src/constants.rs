pub const UNIVERSAL_GAS_CONSTANT_J_PER_MOL_K: f64 = 8.314462618;
pub const AVOGADRO_PER_MOL: f64 = 6.02214076e23;

// standard (literature) state, the point most tabulated values are reported at
pub const STANDARD_TEMPERATURE_K: f64 = 298.15;
pub const STANDARD_PRESSURE_PA: f64 = 101_325.0;
pub const VISIBLE_WAVENUMBER_PER_M: f64 = 1.0 / 550e-9;

// packing fractions for converting a molecular diameter into a bulk density
pub const LIQUID_PACKING_FRACTION: f64 = 0.64; // random close packing
pub const SOLID_PACKING_FRACTION: f64 = 0.74; // face centered cubic

// === rule-of-thumb ratios used only by speculation ===
pub const SOLID_DENSITY_PER_LIQUID_DENSITY: f64 = 1.1;
pub const SOLID_VISCOSITY_PER_LIQUID_VISCOSITY: f64 = 1e16; // ice near melting vs. water
pub const DEFAULT_MOLECULAR_DEGREES_OF_FREEDOM: f64 = 6.0;

// relative step for numeric temperature derivatives of relations
pub const DERIVATIVE_RELATIVE_STEP: f64 = 1e-4;
