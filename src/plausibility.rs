//! Per-field validity predicates for derived estimates.
//!
//! Every estimate produced during inference or speculation must be finite and
//! fall strictly inside the bounds of the field it is destined for. The bounds
//! are empirical ranges observed for real substances, not theoretical limits.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plausibility {
    pub name: &'static str,
    /// exclusive lower bound
    pub lower: f64,
    /// exclusive upper bound
    pub upper: f64,
}

impl Plausibility {
    pub const fn between(name: &'static str, lower: f64, upper: f64) -> Self {
        Plausibility { name, lower, upper }
    }

    pub fn admits(&self, value: f64) -> bool {
        value.is_finite() && value > self.lower && value < self.upper
    }
}

pub const FINITE: Plausibility = Plausibility::between("finite", f64::NEG_INFINITY, f64::INFINITY);
pub const POSITIVE: Plausibility = Plausibility::between("positive", 0.0, f64::INFINITY);
pub const ACENTRIC_FACTOR: Plausibility = Plausibility::between("acentric factor", -1.0, 1.0);
pub const COMPRESSIBILITY: Plausibility = Plausibility::between("compressibility", 0.0, 1.0);
pub const POISSON_RATIO: Plausibility = Plausibility::between("poisson ratio", -1.0, 0.5);
pub const REFRACTIVE_INDEX: Plausibility = Plausibility::between("refractive index", 0.0, f64::INFINITY);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_are_exclusive() {
        assert!(ACENTRIC_FACTOR.admits(0.344));
        assert!(ACENTRIC_FACTOR.admits(-0.5));
        assert!(!ACENTRIC_FACTOR.admits(1.0));
        assert!(!ACENTRIC_FACTOR.admits(-1.0));
        assert!(!ACENTRIC_FACTOR.admits(1.4));
        assert!(!POSITIVE.admits(0.0));
        assert!(!POISSON_RATIO.admits(0.5));
    }

    #[test]
    fn test_non_finite_is_never_plausible() {
        assert!(!FINITE.admits(f64::NAN));
        assert!(!FINITE.admits(f64::INFINITY));
        assert!(!POSITIVE.admits(f64::INFINITY));
        assert!(FINITE.admits(-1e300));
    }
}
