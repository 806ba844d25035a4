use super::{Dimension, Opt};
use crate::{
    error::RiskError,
    prelude::{ForDimension, NUM_DIMENSIONS},
    risk::Profile,
};
use getset::CopyGetters;
use log::*;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// The slider position chosen for each dimension, as an index into the
/// dimension's option table.
///
/// A selection is just user state. It must be resolved into a Profile before
/// any risk computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, CopyGetters)]
#[serde(default)]
#[getset(get_copy = "pub")]
pub struct Selection {
    age: usize,
    preconditions: usize,
    social_contact: usize,
    hygiene: usize,
    gender: usize,
    health_services: usize,
    climate: usize,
    population_ir: usize,
    ifr: usize,
}

per_dimension!(Selection: usize {
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

impl Selection {
    /// All dimensions at their least risky option.
    pub fn lowest() -> Self {
        Self::from_fn(|_| 0)
    }

    /// All dimensions at their riskiest option.
    pub fn highest() -> Self {
        Self::from_fn(Dimension::last_index)
    }

    /// Pick a valid option for each dimension uniformly at random.
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::from_fn(|dim| rng.gen_range(0..dim.options().len()))
    }

    /// The option currently selected for dim.
    pub fn option(&self, dim: Dimension) -> Result<&'static Opt, RiskError> {
        dim.option(self.for_dimension(dim))
    }

    /// Labels of the selected options, in dimension order.
    pub fn labels(&self) -> Result<[&'static str; NUM_DIMENSIONS], RiskError> {
        let mut labels = [""; NUM_DIMENSIONS];
        for dim in Dimension::ALL.iter().copied() {
            labels[dim.index()] = self.option(dim)?.label();
        }
        Ok(labels)
    }

    /// Resolve each index into the numeric value of its option.
    ///
    /// Fails at the first index that is out of range, in dimension order.
    pub fn resolve(&self) -> Result<Profile, RiskError> {
        let profile = Profile::try_from_fn(|dim| self.option(dim).map(|opt| opt.value()))?;
        debug!(target: "resolve", "{:?} -> {:?}", self.to_array(), profile.to_array());
        Ok(profile)
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::from_fn(Dimension::default_index)
    }
}
