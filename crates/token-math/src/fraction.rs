//! Exact rational numbers and rounding modes.
//!
//! A [`Fraction`] is a `(numerator, denominator)` pair kept exact: no
//! reduction to lowest terms, no floating point anywhere. All intermediates
//! are checked `u128` operations; overflow surfaces as an error instead of
//! wrapping.

use crate::error::AmountError;

/// Rounding mode applied when an exact rational result must become an
/// integer number of raw units or a fixed number of decimal places.
///
/// `Down` is the system default: every amount-producing operation rounds
/// down, so display and internal arithmetic agree on boundary values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rounding {
    /// Floor toward zero.
    #[default]
    Down,
    /// Round halves up, everything else to the nearest integer.
    HalfUp,
    /// Ceiling away from zero.
    Up,
}

/// An exact non-negative rational number.
///
/// Equality is structural (`1/2 != 2/4`): callers that need value equality
/// should compare the results of applying the fractions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fraction {
    numerator: u128,
    denominator: u128,
}

/// A ratio between two like quantities (the scales cancel), e.g. a fee
/// rate or a share of a pool.
pub type Percent = Fraction;

impl Fraction {
    pub fn new(numerator: u128, denominator: u128) -> Result<Self, AmountError> {
        if denominator == 0 {
            return Err(AmountError::DivisionByZero);
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    pub fn zero() -> Self {
        Self {
            numerator: 0,
            denominator: 1,
        }
    }

    pub fn one() -> Self {
        Self {
            numerator: 1,
            denominator: 1,
        }
    }

    pub fn numerator(&self) -> u128 {
        self.numerator
    }

    pub fn denominator(&self) -> u128 {
        self.denominator
    }

    pub fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    /// `1 - self`. Fails with `OutOfRange` when `self > 1`, since fractions
    /// here are non-negative.
    pub fn one_minus(&self) -> Result<Self, AmountError> {
        if self.numerator > self.denominator {
            return Err(AmountError::OutOfRange(format!(
                "1 - {}/{} is negative",
                self.numerator, self.denominator
            )));
        }
        Self::new(self.denominator - self.numerator, self.denominator)
    }

    /// Multiply an integer by this fraction and round the exact result to
    /// an integer with the given mode.
    pub fn apply(&self, value: u128, rounding: Rounding) -> Result<u128, AmountError> {
        let scaled = value.checked_mul(self.numerator).ok_or_else(|| {
            AmountError::OutOfRange(format!(
                "{value} * {}/{} overflows",
                self.numerator, self.denominator
            ))
        })?;
        Ok(div_round(scaled, self.denominator, rounding))
    }
}

/// Integer division with explicit rounding. `den` must be nonzero.
pub(crate) fn div_round(num: u128, den: u128, rounding: Rounding) -> u128 {
    let quotient = num / den;
    let remainder = num % den;
    if remainder == 0 {
        return quotient;
    }
    match rounding {
        Rounding::Down => quotient,
        Rounding::Up => quotient + 1,
        // remainder >= den - remainder avoids doubling, which could overflow
        Rounding::HalfUp => {
            if remainder >= den - remainder {
                quotient + 1
            } else {
                quotient
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Construction -------------------------------------------------------

    #[test]
    fn zero_denominator_is_rejected() {
        assert_eq!(Fraction::new(1, 0), Err(AmountError::DivisionByZero));
    }

    #[test]
    fn no_reduction_to_lowest_terms() {
        let frac = Fraction::new(2, 4).unwrap();
        assert_eq!(frac.numerator(), 2);
        assert_eq!(frac.denominator(), 4);
    }

    // -- one_minus ----------------------------------------------------------

    #[test]
    fn one_minus_basis_points() {
        // 1 - 30/10000 = 9970/10000
        let fee = Fraction::new(30, 10_000).unwrap();
        let kept = fee.one_minus().unwrap();
        assert_eq!(kept.numerator(), 9_970);
        assert_eq!(kept.denominator(), 10_000);
    }

    #[test]
    fn one_minus_of_one_is_zero() {
        let whole = Fraction::new(7, 7).unwrap();
        assert!(whole.one_minus().unwrap().is_zero());
    }

    #[test]
    fn one_minus_above_one_fails() {
        let frac = Fraction::new(3, 2).unwrap();
        assert!(matches!(
            frac.one_minus(),
            Err(AmountError::OutOfRange(_))
        ));
    }

    // -- apply --------------------------------------------------------------

    #[test]
    fn apply_rounds_down_by_default_mode() {
        // 10 * 1/3 = 3.33..
        let third = Fraction::new(1, 3).unwrap();
        assert_eq!(third.apply(10, Rounding::Down).unwrap(), 3);
        assert_eq!(third.apply(10, Rounding::HalfUp).unwrap(), 3);
        assert_eq!(third.apply(10, Rounding::Up).unwrap(), 4);
    }

    #[test]
    fn apply_exact_result_ignores_rounding() {
        let half = Fraction::new(1, 2).unwrap();
        for rounding in [Rounding::Down, Rounding::HalfUp, Rounding::Up] {
            assert_eq!(half.apply(10, rounding).unwrap(), 5);
        }
    }

    #[test]
    fn apply_half_up_on_exact_half() {
        let half = Fraction::new(1, 2).unwrap();
        assert_eq!(half.apply(5, Rounding::HalfUp).unwrap(), 3);
        assert_eq!(half.apply(5, Rounding::Down).unwrap(), 2);
    }

    #[test]
    fn apply_overflow_is_reported() {
        let huge = Fraction::new(u128::MAX, 1).unwrap();
        assert!(matches!(
            huge.apply(2, Rounding::Down),
            Err(AmountError::OutOfRange(_))
        ));
    }

    // -- div_round ----------------------------------------------------------

    #[test]
    fn div_round_half_up_near_max_denominator() {
        // den > u128::MAX / 2: the naive `remainder * 2` would overflow.
        let den = u128::MAX - 1;
        let num = den - 1; // remainder = den - 1, well above half
        assert_eq!(div_round(num, den, Rounding::HalfUp), 1);
    }

    #[test]
    fn div_round_up_only_on_nonzero_remainder() {
        assert_eq!(div_round(9, 3, Rounding::Up), 3);
        assert_eq!(div_round(10, 3, Rounding::Up), 4);
    }
}
