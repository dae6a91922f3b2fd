//! Swap fee schedule.
//!
//! Fees live in the swap account as raw numerator/denominator u64 pairs; a
//! zero denominator means the fee is unset. The accessors surface each
//! pair as an exact [`Fraction`] for use with token amounts.

use account_layout::{Field, LayoutError, Record, StructLayout, Value};
use token_math::{AmountError, Fraction};

/// The eight raw fee fields of a swap account: four fees, each a
/// numerator/denominator pair of u64s. 64 bytes on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Fees {
    pub admin_trade_fee_numerator: u64,
    pub admin_trade_fee_denominator: u64,
    pub admin_withdraw_fee_numerator: u64,
    pub admin_withdraw_fee_denominator: u64,
    pub trade_fee_numerator: u64,
    pub trade_fee_denominator: u64,
    pub withdraw_fee_numerator: u64,
    pub withdraw_fee_denominator: u64,
}

impl Fees {
    /// The nested fee record layout: eight u64 fields in declaration order.
    pub fn layout() -> StructLayout {
        StructLayout::new(vec![
            Field::u64("admin_trade_fee_numerator"),
            Field::u64("admin_trade_fee_denominator"),
            Field::u64("admin_withdraw_fee_numerator"),
            Field::u64("admin_withdraw_fee_denominator"),
            Field::u64("trade_fee_numerator"),
            Field::u64("trade_fee_denominator"),
            Field::u64("withdraw_fee_numerator"),
            Field::u64("withdraw_fee_denominator"),
        ])
    }

    pub(crate) fn from_record(record: &Record) -> Result<Self, LayoutError> {
        Ok(Self {
            admin_trade_fee_numerator: record.uint("admin_trade_fee_numerator")?,
            admin_trade_fee_denominator: record.uint("admin_trade_fee_denominator")?,
            admin_withdraw_fee_numerator: record.uint("admin_withdraw_fee_numerator")?,
            admin_withdraw_fee_denominator: record.uint("admin_withdraw_fee_denominator")?,
            trade_fee_numerator: record.uint("trade_fee_numerator")?,
            trade_fee_denominator: record.uint("trade_fee_denominator")?,
            withdraw_fee_numerator: record.uint("withdraw_fee_numerator")?,
            withdraw_fee_denominator: record.uint("withdraw_fee_denominator")?,
        })
    }

    pub(crate) fn to_record(&self) -> Record {
        Record::new()
            .with(
                "admin_trade_fee_numerator",
                Value::Uint(self.admin_trade_fee_numerator),
            )
            .with(
                "admin_trade_fee_denominator",
                Value::Uint(self.admin_trade_fee_denominator),
            )
            .with(
                "admin_withdraw_fee_numerator",
                Value::Uint(self.admin_withdraw_fee_numerator),
            )
            .with(
                "admin_withdraw_fee_denominator",
                Value::Uint(self.admin_withdraw_fee_denominator),
            )
            .with("trade_fee_numerator", Value::Uint(self.trade_fee_numerator))
            .with(
                "trade_fee_denominator",
                Value::Uint(self.trade_fee_denominator),
            )
            .with(
                "withdraw_fee_numerator",
                Value::Uint(self.withdraw_fee_numerator),
            )
            .with(
                "withdraw_fee_denominator",
                Value::Uint(self.withdraw_fee_denominator),
            )
    }

    /// Fee charged on trades, as an exact fraction.
    pub fn trade_fee(&self) -> Result<Fraction, AmountError> {
        Fraction::new(
            self.trade_fee_numerator as u128,
            self.trade_fee_denominator as u128,
        )
    }

    /// Fee charged on withdrawals, as an exact fraction.
    pub fn withdraw_fee(&self) -> Result<Fraction, AmountError> {
        Fraction::new(
            self.withdraw_fee_numerator as u128,
            self.withdraw_fee_denominator as u128,
        )
    }

    /// Admin share of the trade fee, as an exact fraction.
    pub fn admin_trade_fee(&self) -> Result<Fraction, AmountError> {
        Fraction::new(
            self.admin_trade_fee_numerator as u128,
            self.admin_trade_fee_denominator as u128,
        )
    }

    /// Admin share of the withdraw fee, as an exact fraction.
    pub fn admin_withdraw_fee(&self) -> Result<Fraction, AmountError> {
        Fraction::new(
            self.admin_withdraw_fee_numerator as u128,
            self.admin_withdraw_fee_denominator as u128,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_spans_64_bytes() {
        assert_eq!(Fees::layout().span(), 64);
    }

    #[test]
    fn record_round_trip() {
        let fees = Fees {
            admin_trade_fee_numerator: 1,
            admin_trade_fee_denominator: 2,
            admin_withdraw_fee_numerator: 3,
            admin_withdraw_fee_denominator: 4,
            trade_fee_numerator: 30,
            trade_fee_denominator: 10_000,
            withdraw_fee_numerator: 50,
            withdraw_fee_denominator: 10_000,
        };
        let restored = Fees::from_record(&fees.to_record()).unwrap();
        assert_eq!(restored, fees);
    }

    #[test]
    fn fraction_accessors_are_exact() {
        let fees = Fees {
            trade_fee_numerator: 30,
            trade_fee_denominator: 10_000,
            ..Fees::default()
        };
        let fee = fees.trade_fee().unwrap();
        assert_eq!(fee.numerator(), 30);
        assert_eq!(fee.denominator(), 10_000);
    }

    #[test]
    fn unset_fee_surfaces_division_by_zero() {
        // All-zero fees (fresh account) have zero denominators.
        let fees = Fees::default();
        assert_eq!(fees.trade_fee(), Err(AmountError::DivisionByZero));
    }
}
