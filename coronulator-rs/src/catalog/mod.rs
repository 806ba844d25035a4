//! The factor catalog: fixed tables of selectable options for each risk
//! dimension.
//!
//! Options are ordered from the lowest to the highest risk, so a slider
//! position maps directly to an index into the table. The tables are static
//! data and are never mutated.
mod selection;
mod tables;

pub use selection::*;
pub use tables::*;

use crate::{error::RiskError, prelude::Real};
use getset::CopyGetters;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// One selectable choice within a dimension: a label shown to the user and
/// the numeric contribution used by the aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct Opt {
    label: &'static str,
    value: Real,
}

impl Opt {
    pub const fn new(label: &'static str, value: Real) -> Self {
        Opt { label, value }
    }
}

/// How the values of a dimension are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Kind {
    /// A relative risk that scales some baseline. Any finite non-negative
    /// value is admissible.
    Multiplier,

    /// A probability. Admissible values lie in [0, 1].
    Rate,
}

impl Kind {
    /// Check if value is admissible for this kind of dimension.
    pub fn admits(self, value: Real) -> bool {
        match self {
            Kind::Multiplier => value.is_finite() && value >= 0.0,
            Kind::Rate => value.is_finite() && (0.0..=1.0).contains(&value),
        }
    }
}

/// One independent axis of risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Age,
    Preconditions,
    SocialContact,
    Hygiene,
    Gender,
    HealthServices,
    Climate,
    PopulationIr,
    Ifr,
}

impl Dimension {
    /// All dimensions in canonical order.
    pub const ALL: [Dimension; 9] = [
        Dimension::Age,
        Dimension::Preconditions,
        Dimension::SocialContact,
        Dimension::Hygiene,
        Dimension::Gender,
        Dimension::HealthServices,
        Dimension::Climate,
        Dimension::PopulationIr,
        Dimension::Ifr,
    ];

    /// Position of dimension in Dimension::ALL.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Key used in config files and CSV headers.
    pub fn key(self) -> &'static str {
        match self {
            Dimension::Age => "age",
            Dimension::Preconditions => "preconditions",
            Dimension::SocialContact => "social_contact",
            Dimension::Hygiene => "hygiene",
            Dimension::Gender => "gender",
            Dimension::HealthServices => "health_services",
            Dimension::Climate => "climate",
            Dimension::PopulationIr => "population_ir",
            Dimension::Ifr => "ifr",
        }
    }

    /// Display name.
    pub fn label(self) -> &'static str {
        match self {
            Dimension::Age => "Age",
            Dimension::Preconditions => "Preconditions",
            Dimension::SocialContact => "Social Contact",
            Dimension::Hygiene => "Hygiene",
            Dimension::Gender => "Gender",
            Dimension::HealthServices => "Health Services",
            Dimension::Climate => "Climate",
            Dimension::PopulationIr => "Population IR",
            Dimension::Ifr => "IFR",
        }
    }

    /// A short explanation of what the dimension means and how it affects
    /// the estimate.
    pub fn help(self) -> &'static str {
        match self {
            Dimension::Age => {
                "Age is by far the strongest predictor of a fatal outcome. The \
                 fatality ratio roughly doubles every decade after 40."
            }
            Dimension::Preconditions => {
                "Chronic conditions such as heart disease, diabetes, lung disease \
                 or a weakened immune system raise the chance an infection turns \
                 critical."
            }
            Dimension::SocialContact => {
                "How many people you are close to on a typical day. More contacts \
                 means more chances of being exposed."
            }
            Dimension::Hygiene => {
                "Washing hands, not touching your face and wearing a mask reduce \
                 the chance an exposure becomes an infection."
            }
            Dimension::Gender => "Men have shown a higher fatality ratio than women.",
            Dimension::HealthServices => {
                "Access to hospital beds and intensive care. Overwhelmed health \
                 services turn treatable cases into deaths."
            }
            Dimension::Climate => {
                "Respiratory viruses tend to spread faster in cold, dry weather \
                 when people gather indoors."
            }
            Dimension::PopulationIr => {
                "The share of the population expected to be infected over the \
                 course of the epidemic where you live."
            }
            Dimension::Ifr => {
                "The infection fatality ratio: the fraction of all infected \
                 people, with symptoms or not, that die. Estimates vary, so pick \
                 the one you believe."
            }
        }
    }

    /// Slider position used when the user has not chosen anything yet.
    pub fn default_index(self) -> usize {
        match self {
            Dimension::Age => 4,
            Dimension::Preconditions => 0,
            Dimension::SocialContact => 2,
            Dimension::Hygiene => 1,
            Dimension::Gender => 1,
            Dimension::HealthServices => 1,
            Dimension::Climate => 1,
            Dimension::PopulationIr => 6,
            Dimension::Ifr => 2,
        }
    }

    pub fn kind(self) -> Kind {
        match self {
            Dimension::PopulationIr | Dimension::Ifr => Kind::Rate,
            _ => Kind::Multiplier,
        }
    }

    /// Check if value lies in the admissible range of the dimension.
    pub fn admits(self, value: Real) -> bool {
        self.kind().admits(value)
    }

    /// Ordered list of options for this dimension.
    pub fn options(self) -> &'static [Opt] {
        options_for(self)
    }

    /// Return option at the given index. Out of range indexes are rejected,
    /// never clamped.
    pub fn option(self, index: usize) -> Result<&'static Opt, RiskError> {
        let options = self.options();
        options.get(index).ok_or(RiskError::IndexOutOfRange {
            dimension: self,
            index,
            len: options.len(),
        })
    }

    /// Index of the riskiest option.
    pub fn last_index(self) -> usize {
        self.options().len() - 1
    }

    /// Find dimension from its key.
    pub fn from_key(key: &str) -> Option<Dimension> {
        Dimension::ALL.iter().copied().find(|d| d.key() == key)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Dimension {
    type Err = RiskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace(|c: char| c == ' ' || c == '-', "_");
        Dimension::from_key(&key).ok_or_else(|| RiskError::UnknownDimension(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_tables_are_ordered_by_risk() {
        for dim in Dimension::ALL.iter().copied() {
            let options = dim.options();
            assert!(!options.is_empty(), "{} has no options", dim);
            for pair in options.windows(2) {
                assert!(
                    pair[0].value() < pair[1].value(),
                    "{}: '{}' should be less risky than '{}'",
                    dim,
                    pair[0].label(),
                    pair[1].label()
                );
            }
        }
    }

    #[test]
    fn option_values_are_admissible() {
        for dim in Dimension::ALL.iter().copied() {
            for opt in dim.options() {
                assert!(dim.admits(opt.value()), "{}: {:?}", dim, opt);
            }
            assert!(dim.default_index() <= dim.last_index());
        }
    }

    #[test]
    fn dimension_order_matches_index() {
        for (i, dim) in Dimension::ALL.iter().enumerate() {
            assert_eq!(dim.index(), i);
            assert_eq!(Dimension::from_key(dim.key()), Some(*dim));
        }
    }

    #[test]
    fn parse_dimension_names() {
        assert_eq!("age".parse::<Dimension>(), Ok(Dimension::Age));
        assert_eq!("Social Contact".parse::<Dimension>(), Ok(Dimension::SocialContact));
        assert_eq!("population-ir".parse::<Dimension>(), Ok(Dimension::PopulationIr));
        assert_eq!(
            "height".parse::<Dimension>(),
            Err(RiskError::UnknownDimension("height".into()))
        );
    }

    #[test]
    fn out_of_range_option_fails_fast() {
        let len = Dimension::Gender.options().len();
        assert_eq!(
            Dimension::Gender.option(len),
            Err(RiskError::IndexOutOfRange {
                dimension: Dimension::Gender,
                index: len,
                len
            })
        );
        assert_eq!(Dimension::Gender.option(0).unwrap().label(), "Female");
    }

    #[test]
    fn admissible_ranges() {
        assert!(Kind::Multiplier.admits(0.0));
        assert!(Kind::Multiplier.admits(25.0));
        assert!(!Kind::Multiplier.admits(-0.1));
        assert!(!Kind::Multiplier.admits(Real::NAN));
        assert!(!Kind::Multiplier.admits(Real::INFINITY));
        assert!(Kind::Rate.admits(1.0));
        assert!(!Kind::Rate.admits(1.01));
    }
}
