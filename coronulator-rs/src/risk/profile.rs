use crate::{
    error::RiskError,
    prelude::{Dimension, ForDimension, Real, NUM_DIMENSIONS},
};
use getset::CopyGetters;
use serde::{Deserialize, Serialize};

/// The resolved input record: one numeric contribution per risk dimension.
///
/// Population IR and IFR are rates. All other entries are multipliers
/// relative to an average person.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct Profile {
    age: Real,
    preconditions: Real,
    social_contact: Real,
    hygiene: Real,
    gender: Real,
    health_services: Real,
    climate: Real,
    population_ir: Real,
    ifr: Real,
}

per_dimension!(Profile: Real {
    age,
    preconditions,
    social_contact,
    hygiene,
    gender,
    health_services,
    climate,
    population_ir,
    ifr,
});

impl Profile {
    /// Create profile from values given in dimension order.
    pub fn from_array(values: [Real; NUM_DIMENSIONS]) -> Self {
        Self::from_fn(|dim| values.for_dimension(dim))
    }

    /// Return a copy with a single dimension replaced.
    pub fn with(mut self, dim: Dimension, value: Real) -> Self {
        self.set(dim, value);
        self
    }

    /// Check all values are in the admissible range of their dimensions.
    /// Reports the first offending dimension.
    pub fn validate(&self) -> Result<(), RiskError> {
        for dim in Dimension::ALL.iter().copied() {
            let value = self.for_dimension(dim);
            if !dim.admits(value) {
                return Err(RiskError::InvalidInput {
                    dimension: dim,
                    value,
                });
            }
        }
        Ok(())
    }

    /// Factors that scale the chance of getting infected.
    pub fn exposure_factors(&self) -> [Real; 4] {
        [
            self.population_ir,
            self.social_contact,
            self.hygiene,
            self.climate,
        ]
    }

    /// Factors that scale the chance an infection is fatal.
    pub fn vulnerability_factors(&self) -> [Real; 5] {
        [
            self.ifr,
            self.age,
            self.preconditions,
            self.gender,
            self.health_services,
        ]
    }
}
