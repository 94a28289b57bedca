//! Representative state points at which state-dependent fields are sampled.
//!
//! Some rules need a concrete number where a record only holds a function of
//! state. The samples below pick the points at which such functions are best
//! constrained for each phase. They are a pure function of the record and must
//! be regenerated whenever the record gains known fields.

use crate::completed_compound::CompletedCompound;
use crate::partly_known_compound::PartlyKnownCompound;
use crate::relation::StatePoint;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Samples {
    pub triple_point: Option<StatePoint>,
    pub freezing_point: Option<StatePoint>,
    pub boiling_point: Option<StatePoint>,
}

fn point(pressure_pa: Option<f64>, temperature_k: Option<f64>) -> Option<StatePoint> {
    Some(StatePoint::new(pressure_pa?, temperature_k?))
}

impl Samples {
    pub fn of(compound: &PartlyKnownCompound) -> Self {
        Samples {
            triple_point: point(compound.triple_point_pressure.get(), compound.triple_point_temperature.get()),
            freezing_point: point(
                compound.freezing_point_sample_pressure.get(),
                compound.freezing_point_sample_temperature.get(),
            ),
            boiling_point: point(
                compound.boiling_point_sample_pressure.get(),
                compound.boiling_point_sample_temperature.get(),
            ),
        }
    }

    pub fn of_completed(compound: &CompletedCompound) -> Self {
        Samples {
            triple_point: Some(compound.triple_point()),
            freezing_point: Some(StatePoint::new(
                compound.freezing_point_sample_pressure,
                compound.freezing_point_sample_temperature,
            )),
            boiling_point: Some(StatePoint::new(
                compound.boiling_point_sample_pressure,
                compound.boiling_point_sample_temperature,
            )),
        }
    }

    /// The literature measurement point most tabulated values are reported at.
    pub fn literature(&self) -> StatePoint {
        StatePoint::STANDARD
    }

    pub fn gas(&self) -> StatePoint {
        self.boiling_point.unwrap_or_else(|| self.literature())
    }

    pub fn liquid(&self) -> StatePoint {
        self.boiling_point
            .or(self.triple_point)
            .or(self.freezing_point)
            .unwrap_or_else(|| self.literature())
    }

    pub fn solid(&self) -> StatePoint {
        self.triple_point
            .or(self.freezing_point)
            .unwrap_or_else(|| self.literature())
    }
}
