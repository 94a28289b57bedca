//! A property that is either known or unknown, with first-known-wins filling.

use crate::plausibility::Plausibility;
use crate::relation::{Property, StatePoint};
use serde::{Deserialize, Serialize};

/// Values that can be checked against a field's plausibility predicate.
///
/// State-dependent values are checked at the representative sample of the
/// phase they describe.
pub trait Plausible {
    fn is_plausible(&self, bounds: &Plausibility, sample: &StatePoint) -> bool;
}

impl Plausible for f64 {
    fn is_plausible(&self, bounds: &Plausibility, _sample: &StatePoint) -> bool {
        bounds.admits(*self)
    }
}

impl Plausible for u32 {
    fn is_plausible(&self, bounds: &Plausibility, _sample: &StatePoint) -> bool {
        bounds.admits(*self as f64)
    }
}

impl Plausible for Property {
    fn is_plausible(&self, bounds: &Plausibility, sample: &StatePoint) -> bool {
        bounds.admits(self.at(sample))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionalField<T>(Option<T>);

impl<T> Default for OptionalField<T> {
    fn default() -> Self {
        OptionalField(None)
    }
}

impl<T> From<Option<T>> for OptionalField<T> {
    fn from(value: Option<T>) -> Self {
        OptionalField(value)
    }
}

impl<T> OptionalField<T> {
    pub fn known(value: T) -> Self {
        OptionalField(Some(value))
    }

    pub fn unknown() -> Self {
        OptionalField(None)
    }

    pub fn is_known(&self) -> bool {
        self.0.is_some()
    }

    pub fn is_unknown(&self) -> bool {
        self.0.is_none()
    }

    pub fn value(&self) -> Option<&T> {
        self.0.as_ref()
    }

    pub fn into_option(self) -> Option<T> {
        self.0
    }
}

impl<T: Copy> OptionalField<T> {
    pub fn get(&self) -> Option<T> {
        self.0
    }
}

impl OptionalField<Property> {
    /// The value at `state`, or `None` when unknown.
    pub fn at(&self, state: &StatePoint) -> Option<f64> {
        self.0.as_ref().map(|property| property.at(state))
    }
}

impl<T: Clone> OptionalField<T> {
    /// Adopts `other` wherever this field is unknown.
    pub fn or(&self, other: &Self) -> Self {
        match self.0 {
            Some(_) => self.clone(),
            None => other.clone(),
        }
    }

    /// Adopts a literal value if missing.
    pub fn or_value(&self, constant: T) -> Self {
        match self.0 {
            Some(_) => self.clone(),
            None => OptionalField::known(constant),
        }
    }

    /// The known value, or the fallback's value verbatim.
    pub fn complete(&self, fallback: &T) -> T {
        self.0.clone().unwrap_or_else(|| fallback.clone())
    }
}

impl<T: Clone + Plausible> OptionalField<T> {
    /// Runs `rule` only if this field is unknown, keeping its candidate only if plausible.
    ///
    /// The rule resolves its own inputs and returns `None` when any of them is
    /// unknown. A rejected candidate leaves the field unknown.
    pub fn fill_if_missing(
        &self,
        bounds: &Plausibility,
        sample: &StatePoint,
        rule: impl FnOnce() -> Option<T>,
    ) -> Self {
        match self.0 {
            Some(_) => self.clone(),
            None => OptionalField(rule().filter(|candidate| candidate.is_plausible(bounds, sample))),
        }
    }
}
