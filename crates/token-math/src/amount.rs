//! Exact fixed-point token amounts.
//!
//! A [`TokenAmount`] is the unscaled on-chain integer quantity (`raw`)
//! paired with its [`Token`] identity. `raw` is a native `u64`, so the
//! on-chain range invariant is a property of the type itself; every path
//! that widens beyond `u64` (parsing, percentage scaling) re-checks the
//! bound explicitly and fails instead of clamping.
//!
//! Amounts are immutable value types: every operation returns a new value.

use crate::error::AmountError;
use crate::format::{format_fixed_point, strip_trailing_zeros, NumberFormat};
use crate::fraction::{div_round, Fraction, Percent, Rounding};
use crate::token::Token;

/// The largest representable raw quantity, as a u128 for widening checks.
pub const MAX_U64: u128 = u64::MAX as u128;

/// An exact, immutable quantity of a specific token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenAmount {
    token: Token,
    raw: u64,
}

impl TokenAmount {
    /// Wrap a raw u64 quantity. Infallible: the type already guarantees
    /// the on-chain range.
    pub fn new(token: Token, raw: u64) -> Self {
        Self { token, raw }
    }

    /// Construct from a possibly-wide raw integer, validating
    /// `0 <= raw <= 2^64 - 1`. Never clamps.
    pub fn from_raw(token: Token, raw: u128) -> Result<Self, AmountError> {
        if raw > MAX_U64 {
            return Err(AmountError::OutOfRange(format!("{raw} overflows u64")));
        }
        Ok(Self {
            token,
            raw: raw as u64,
        })
    }

    /// Parse a human-readable decimal string, scaling up by `10^decimals`
    /// and truncating any excess fractional digits toward zero.
    ///
    /// Accepts an optional leading sign, digits, and at most one decimal
    /// point. No scientific notation, no grouping separators. A negative
    /// input only parses if it truncates to exactly zero.
    pub fn parse(token: Token, text: &str) -> Result<Self, AmountError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(AmountError::InvalidDecimal("empty string".into()));
        }

        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };

        let (whole, frac) = match unsigned.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (unsigned, ""),
        };
        if whole.is_empty() && frac.is_empty() {
            return Err(AmountError::InvalidDecimal(format!("no digits in `{trimmed}`")));
        }
        // A second `.` ends up inside `frac` and fails the digit check.
        if !whole.bytes().all(|b| b.is_ascii_digit())
            || !frac.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(AmountError::InvalidDecimal(format!(
                "unexpected character in `{trimmed}`"
            )));
        }

        let decimals = token.decimals() as usize;
        // Keep at most `decimals` fractional digits (truncation toward
        // zero), right-padding with zeros up to the native scale.
        let mut scaled_frac: String = frac.chars().take(decimals).collect();
        while scaled_frac.len() < decimals {
            scaled_frac.push('0');
        }

        let mut raw: u128 = 0;
        for b in whole.bytes().chain(scaled_frac.bytes()) {
            let digit = (b - b'0') as u128;
            raw = raw
                .checked_mul(10)
                .and_then(|r| r.checked_add(digit))
                .ok_or_else(|| {
                    AmountError::OutOfRange(format!(
                        "`{trimmed}` overflows u64 at scale {decimals}"
                    ))
                })?;
        }

        if negative && raw != 0 {
            return Err(AmountError::OutOfRange(format!("`{trimmed}` is negative")));
        }

        Self::from_raw(token, raw)
    }

    pub fn token(&self) -> &Token {
        &self.token
    }

    /// The unscaled integer quantity, as stored on chain.
    pub fn raw(&self) -> u64 {
        self.raw
    }

    pub fn is_zero(&self) -> bool {
        self.raw == 0
    }

    fn require_same_token(&self, other: &Self) -> Result<(), AmountError> {
        if self.token != other.token {
            return Err(AmountError::TokenMismatch);
        }
        Ok(())
    }

    // -- Arithmetic ---------------------------------------------------------

    pub fn add(&self, other: &Self) -> Result<Self, AmountError> {
        self.require_same_token(other)?;
        let raw = self.raw.checked_add(other.raw).ok_or_else(|| {
            AmountError::OutOfRange(format!("{} + {} overflows u64", self.raw, other.raw))
        })?;
        Ok(Self::new(self.token, raw))
    }

    /// Subtraction that would go below zero fails; there is no implicit
    /// floor at zero.
    pub fn subtract(&self, other: &Self) -> Result<Self, AmountError> {
        self.require_same_token(other)?;
        let raw = self.raw.checked_sub(other.raw).ok_or_else(|| {
            AmountError::OutOfRange(format!(
                "{} - {} underflows below zero",
                self.raw, other.raw
            ))
        })?;
        Ok(Self::new(self.token, raw))
    }

    /// This amount as an exact ratio of `other`. The scales cancel, so the
    /// result carries no token identity.
    pub fn divide_by_amount(&self, other: &Self) -> Result<Percent, AmountError> {
        self.require_same_token(other)?;
        Percent::new(self.raw as u128, other.raw as u128)
    }

    /// This amount's rational value (`raw / 10^decimals`) divided by an
    /// arbitrary fraction. No identity check: a fraction carries no token
    /// identity, so unlike [`divide_by_amount`](Self::divide_by_amount) the
    /// scale does not cancel here.
    pub fn divide_by_fraction(&self, fraction: &Fraction) -> Result<Percent, AmountError> {
        // (raw / 10^decimals) / (n/d) = (raw * d) / (n * 10^decimals)
        let overflow = || {
            AmountError::OutOfRange(format!(
                "{} / ({}/{}) overflows",
                self.raw,
                fraction.numerator(),
                fraction.denominator()
            ))
        };
        let numerator = (self.raw as u128)
            .checked_mul(fraction.denominator())
            .ok_or_else(overflow)?;
        let scale = 10u128
            .checked_pow(self.token.decimals() as u32)
            .ok_or_else(overflow)?;
        let denominator = fraction
            .numerator()
            .checked_mul(scale)
            .ok_or_else(overflow)?;
        Percent::new(numerator, denominator)
    }

    /// Multiply by a percent, rounding the exact result to an integer
    /// number of raw units.
    ///
    /// Lossy by nature: repeated application accumulates rounding error.
    /// [`Rounding::Down`] is the system default.
    pub fn mul_percent(&self, percent: &Percent, rounding: Rounding) -> Result<Self, AmountError> {
        let raw = percent.apply(self.raw as u128, rounding)?;
        Self::from_raw(self.token, raw)
    }

    /// Reduce by a percent: multiply by `1 - percent`. Same loss caveat as
    /// [`mul_percent`](Self::mul_percent).
    pub fn reduce_by_percent(
        &self,
        percent: &Percent,
        rounding: Rounding,
    ) -> Result<Self, AmountError> {
        self.mul_percent(&percent.one_minus()?, rounding)
    }

    // -- Formatting ---------------------------------------------------------

    /// Exact decimal rendering at the token's full native scale.
    pub fn to_exact(&self) -> String {
        format_fixed_point(self.raw as u128, self.token.decimals())
    }

    /// Render to exactly `places` decimal places.
    ///
    /// `places` may not exceed the token's decimals: no information exists
    /// beyond the native scale and none is invented.
    pub fn to_fixed(&self, places: u8, rounding: Rounding) -> Result<String, AmountError> {
        let decimals = self.token.decimals();
        if places > decimals {
            return Err(AmountError::InvalidPrecisionRequest(format!(
                "requested {places} decimal places, token has {decimals}"
            )));
        }

        let dropped = (decimals - places) as u32;
        let raw = self.raw as u128;
        let scaled = match 10u128.checked_pow(dropped) {
            Some(divisor) => div_round(raw, divisor, rounding),
            // More digits dropped than u128 can scale: every raw digit is
            // below the cut, so the quotient is 0 with remainder `raw`.
            None => match rounding {
                Rounding::Down | Rounding::HalfUp => 0,
                Rounding::Up => u128::from(raw != 0),
            },
        };
        Ok(format_fixed_point(scaled, places))
    }

    /// Render at most `digits` significant digits, trimming trailing
    /// zeros. `digits` must be at least 1.
    pub fn to_significant(&self, digits: u32, rounding: Rounding) -> Result<String, AmountError> {
        if digits == 0 {
            return Err(AmountError::InvalidPrecisionRequest(
                "at least one significant digit is required".into(),
            ));
        }
        if self.raw == 0 {
            return Ok("0".to_string());
        }

        let raw = self.raw as u128;
        let raw_digits = count_digits(raw);
        if raw_digits <= digits as usize {
            return Ok(strip_trailing_zeros(&self.to_exact()));
        }

        // Round away everything past the requested significant digits,
        // then rescale so the decimal point stays put.
        let dropped = (raw_digits - digits as usize) as u32;
        let divisor = 10u128.pow(dropped);
        let rounded = div_round(raw, divisor, rounding);
        let rescaled = rounded.checked_mul(divisor).ok_or_else(|| {
            AmountError::OutOfRange(format!("rounding {raw} to {digits} digits overflows"))
        })?;
        Ok(strip_trailing_zeros(&format_fixed_point(
            rescaled,
            self.token.decimals(),
        )))
    }

    /// Human display. `None` renders the exact value with trailing zeros
    /// stripped; `Some` applies the group/decimal separators.
    pub fn format(&self, format: Option<&NumberFormat>) -> String {
        let exact = self.to_exact();
        match format {
            None => strip_trailing_zeros(&exact),
            Some(format) => format.apply(&exact),
        }
    }
}

fn count_digits(mut value: u128) -> usize {
    let mut count = 0;
    while value > 0 {
        count += 1;
        value /= 10;
    }
    count
}
