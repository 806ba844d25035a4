use super::Profile;
use crate::{error::RiskError, prelude::Real};
use getset::CopyGetters;
use log::*;
use serde::Serialize;

/// Decomposition of a death probability estimate.
///
/// death = infection * fatality, and all values lie in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct Estimate {
    /// Probability of getting infected.
    infection: Real,

    /// Probability an infection kills this person (a personal IFR).
    fatality: Real,

    /// Probability of dying from the infection.
    death: Real,
}

/// Product of non-negative factors, clamped to 1.
///
/// A zero factor always wins, even if the remaining factors overflow.
fn clamped_product(factors: &[Real]) -> Real {
    if factors.iter().any(|&x| x == 0.0) {
        return 0.0;
    }
    let prod: Real = factors.iter().product();
    if prod > 1.0 {
        trace!("product {:?} = {} clamped to 1", factors, prod);
    }
    prod.min(1.0)
}

/// Estimate the chances of infection and death for the given profile.
///
/// The population IR is scaled by the exposure multipliers (social contact,
/// hygiene, climate) and the baseline IFR is scaled by the vulnerability
/// multipliers (age, preconditions, gender, health services). Each is clamped
/// to 1 and the two compound. Every factor enters as a non-negative product,
/// so the result never decreases when any factor increases.
pub fn estimate(profile: &Profile) -> Result<Estimate, RiskError> {
    profile.validate()?;
    let infection = clamped_product(&profile.exposure_factors());
    let fatality = clamped_product(&profile.vulnerability_factors());
    Ok(Estimate {
        infection,
        fatality,
        death: infection * fatality,
    })
}

/// Probability of dying from the infection, in [0, 1].
pub fn death_probability(profile: &Profile) -> Result<Real, RiskError> {
    estimate(profile).map(|e| e.death)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        catalog::{Dimension, Selection},
        prelude::ForDimension,
        utils::seeded_rng,
    };
    use assert_approx_eq::assert_approx_eq;

    fn prob(sel: &Selection) -> Real {
        death_probability(&sel.resolve().unwrap()).unwrap()
    }

    #[test]
    fn default_person() {
        let est = estimate(&Selection::default().resolve().unwrap()).unwrap();
        assert_approx_eq!(est.infection(), 0.2 * 0.6 * 0.8 * 1.0, 1e-12);
        assert_approx_eq!(est.fatality(), 0.006 * 0.24, 1e-12);
        assert_approx_eq!(est.death(), 0.00013824, 1e-12);
    }

    #[test]
    fn probabilities_are_bounded() {
        let mut rng = seeded_rng(1);
        for _ in 0..2_000 {
            let est = estimate(&Selection::random(&mut rng).resolve().unwrap()).unwrap();
            for &p in [est.infection(), est.fatality(), est.death()].iter() {
                assert!((0.0..=1.0).contains(&p), "{:?}", est);
            }
        }
        assert_eq!(prob(&Selection::highest()), 1.0);
    }

    #[test]
    fn riskier_options_never_lower_the_probability() {
        let mut rng = seeded_rng(2);
        for _ in 0..300 {
            let sel = Selection::random(&mut rng);
            let base = prob(&sel);
            for dim in Dimension::ALL.iter().copied() {
                let idx = sel.for_dimension(dim);
                if idx < dim.last_index() {
                    let mut up = sel;
                    up.set(dim, idx + 1);
                    assert!(prob(&up) >= base, "{} up from {:?}", dim, sel);
                }
                if idx > 0 {
                    let mut down = sel;
                    down.set(dim, idx - 1);
                    assert!(prob(&down) <= base, "{} down from {:?}", dim, sel);
                }
            }
        }
    }

    #[test]
    fn larger_raw_values_never_lower_the_probability() {
        let profile = Selection::default().resolve().unwrap();
        let base = death_probability(&profile).unwrap();
        for dim in Dimension::ALL.iter().copied() {
            let value = profile.for_dimension(dim);
            let bigger = if dim.kind() == crate::catalog::Kind::Rate {
                (value * 1.5).min(1.0)
            } else {
                value * 10.0
            };
            let up = death_probability(&profile.with(dim, bigger)).unwrap();
            let down = death_probability(&profile.with(dim, value / 2.0)).unwrap();
            assert!(up > base, "{}", dim);
            assert!(down < base, "{}", dim);
        }
    }

    #[test]
    fn same_profile_gives_identical_results() {
        let mut rng = seeded_rng(3);
        for _ in 0..100 {
            let profile = Selection::random(&mut rng).resolve().unwrap();
            let a = death_probability(&profile).unwrap();
            let b = death_probability(&profile).unwrap();
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn lowest_risk_is_below_highest_risk() {
        for ifr in 0..Dimension::Ifr.options().len() {
            let mut lo = Selection::lowest();
            let mut hi = Selection::highest();
            lo.set(Dimension::Ifr, ifr);
            hi.set(Dimension::Ifr, ifr);
            assert!(prob(&lo) < prob(&hi));
        }
    }

    #[test]
    fn invalid_input_is_reported() {
        let profile = Selection::default().resolve().unwrap();
        assert_eq!(
            death_probability(&profile.with(Dimension::Ifr, 1.2)),
            Err(RiskError::InvalidInput {
                dimension: Dimension::Ifr,
                value: 1.2
            })
        );
        assert!(death_probability(&profile.with(Dimension::Age, Real::NAN)).is_err());
    }

    #[test]
    fn zero_factor_wins_over_overflow() {
        let profile = Profile::from_array([1e300; 9])
            .with(Dimension::PopulationIr, 0.5)
            .with(Dimension::Ifr, 0.5)
            .with(Dimension::Climate, 0.0);
        let est = estimate(&profile).unwrap();
        assert_eq!(est.infection(), 0.0);
        assert_eq!(est.fatality(), 1.0);
        assert_eq!(est.death(), 0.0);
    }
}
