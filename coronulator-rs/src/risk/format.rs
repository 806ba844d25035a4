use crate::{error::RiskError, prelude::Real};
use std::{convert::TryFrom, fmt};

/// Probabilities at or above this value are shown as percentages, and as
/// "1 in N" odds below it.
pub const PERCENT_THRESHOLD: Real = 0.01;

/// Significant digits of the percentage figure.
pub const SIGNIFICANT_DIGITS: usize = 2;

/// Figure shown for a zero probability.
pub const ZERO_FIGURE: &str = "0%";

/// Odds of the form "1 in N", with N = round(1 / p).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Odds {
    one_in: Real,
}

impl Odds {
    /// The N in "1 in N". Always a positive finite integer.
    pub fn one_in(&self) -> Real {
        self.one_in
    }
}

impl TryFrom<Real> for Odds {
    type Error = RiskError;

    /// Fails with DegenerateProbability if p is zero (or not positive) or so
    /// small that N overflows.
    fn try_from(p: Real) -> Result<Self, Self::Error> {
        if !(p > 0.0) {
            return Err(RiskError::DegenerateProbability);
        }
        let one_in = (1.0 / p).round();
        if !one_in.is_finite() {
            return Err(RiskError::DegenerateProbability);
        }
        Ok(Odds { one_in })
    }
}

impl fmt::Display for Odds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "1 in {}", group_thousands(&format!("{:.0}", self.one_in)))
    }
}

/// Render probability for display.
///
/// Values from 1% upwards are shown as a percentage with two significant
/// digits ("3.4%", "10%"). Smaller values are shown as odds ("1 in 5,000").
/// A zero probability renders as "0%". Inputs are clamped to [0, 1] and NaN
/// counts as zero.
pub fn format_probability(p: Real) -> String {
    let p = p.max(0.0).min(1.0);
    if p >= PERCENT_THRESHOLD {
        return format!("{}%", to_precision(100.0 * p, SIGNIFICANT_DIGITS));
    }
    match Odds::try_from(p) {
        Ok(odds) => odds.to_string(),
        Err(_) => ZERO_FIGURE.to_string(),
    }
}

/// Format x with the given number of significant digits. Ties are rounded
/// away from zero and trailing zeros are kept, so 5 renders as "5.0" with two
/// digits. Numbers with more integer digits than requested are rounded and
/// printed in full.
///
/// Rounding is applied to the binary value after scaling by a power of ten,
/// not to its exact decimal expansion. When the scaled value lands exactly on
/// a tie, the last digit may differ from JavaScript's `toPrecision`.
pub fn to_precision(x: Real, digits: usize) -> String {
    let digits = digits.max(1) as i32;
    if x == 0.0 || !x.is_finite() {
        return format!("{:.*}", (digits - 1) as usize, x);
    }

    let mut exp = x.abs().log10().floor() as i32;
    if scaled(x, digits - 1 - exp).abs() >= (10.0 as Real).powi(digits) {
        exp += 1;
    }
    let shift = digits - 1 - exp;
    let rounded = unscaled(scaled(x, shift), shift);
    format!("{:.*}", shift.max(0) as usize, rounded)
}

/// round(x * 10^shift)
fn scaled(x: Real, shift: i32) -> Real {
    if shift >= 0 {
        (x * (10.0 as Real).powi(shift)).round()
    } else {
        (x / (10.0 as Real).powi(-shift)).round()
    }
}

/// m / 10^shift
fn unscaled(m: Real, shift: i32) -> Real {
    if shift >= 0 {
        m / (10.0 as Real).powi(shift)
    } else {
        m * (10.0 as Real).powi(-shift)
    }
}

/// Insert a comma every three digits of the integer part of a formatted
/// number.
pub fn group_thousands(number: &str) -> String {
    let (int_part, frac_part) = match number.find('.') {
        Some(i) => number.split_at(i),
        None => (number, ""),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut grouped = String::with_capacity(number.len() + digits.len() / 3);
    grouped.push_str(sign);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped.push_str(frac_part);
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentages() {
        assert_eq!(format_probability(0.034), "3.4%");
        assert_eq!(format_probability(0.05), "5.0%");
        assert_eq!(format_probability(0.10), "10%");
        assert_eq!(format_probability(0.125), "13%");
        assert_eq!(format_probability(0.999), "100%");
        assert_eq!(format_probability(1.0), "100%");
    }

    #[test]
    fn odds() {
        assert_eq!(format_probability(0.0002), "1 in 5,000");
        assert_eq!(format_probability(0.0001), "1 in 10,000");
        assert_eq!(format_probability(0.00013824), "1 in 7,234");
        assert_eq!(format_probability(0.005), "1 in 200");
        assert_eq!(format_probability(1e-9), "1 in 1,000,000,000");
    }

    #[test]
    fn threshold_between_percent_and_odds() {
        assert_eq!(format_probability(PERCENT_THRESHOLD), "1.0%");
        assert_eq!(format_probability(0.0099), "1 in 101");
    }

    #[test]
    fn zero_probability_is_well_defined() {
        assert_eq!(Odds::try_from(0.0), Err(RiskError::DegenerateProbability));
        assert_eq!(format_probability(0.0), "0%");
        assert_eq!(format_probability(Real::NAN), "0%");
        assert_eq!(format_probability(-0.5), "0%");
        assert_eq!(format_probability(Real::MIN_POSITIVE / 16.0), "0%");
    }

    #[test]
    fn out_of_range_inputs_are_clamped() {
        assert_eq!(format_probability(3.0), "100%");
    }

    #[test]
    fn odds_are_rounded_half_away_from_zero() {
        let odds = Odds::try_from(1.0 / 2.5).unwrap();
        assert_eq!(odds.one_in(), 3.0);
        assert_eq!(odds.to_string(), "1 in 3");
    }

    #[test]
    fn significant_digits() {
        assert_eq!(to_precision(3.4000000000000004, 2), "3.4");
        assert_eq!(to_precision(1.25, 2), "1.3");
        assert_eq!(to_precision(9.96, 2), "10");
        assert_eq!(to_precision(123.0, 2), "120");
        assert_eq!(to_precision(0.0123, 2), "0.012");
        assert_eq!(to_precision(-4.56, 2), "-4.6");
        assert_eq!(to_precision(7.0, 3), "7.00");
    }

    #[test]
    fn ties_after_scaling_round_up() {
        // 4.35 is stored just below 4.35, but 4.35 * 10 == 43.5 exactly.
        // JavaScript gives "4.3" and "2.67" here.
        assert_eq!(to_precision(4.35, 2), "4.4");
        assert_eq!(to_precision(2.675, 3), "2.68");
    }

    #[test]
    fn thousands() {
        assert_eq!(group_thousands("7"), "7");
        assert_eq!(group_thousands("100"), "100");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("123456789"), "123,456,789");
        assert_eq!(group_thousands("-1234.5"), "-1,234.5");
    }
}
