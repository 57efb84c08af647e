//! Decimal conversions for the wire's fixed-point money types.
//!
//! `Quotation` and `MoneyValue` carry a value as `units + nano / 1e9`, where
//! `units` and `nano` always share the same sign.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use thiserror::Error;

use crate::proto::{MoneyValue, Quotation};

/// Nano units per whole unit.
const NANO_SCALE: u32 = 9;
const NANOS_PER_UNIT: i64 = 1_000_000_000;

/// A decimal that does not fit the wire's `i64` units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("decimal {0} is out of range for a quotation")]
pub struct OutOfRange(pub Decimal);

impl Quotation {
    /// Build a quotation from whole units and nano units.
    #[must_use]
    pub const fn new(units: i64, nano: i32) -> Self {
        Self { units, nano }
    }

    /// Exact decimal value.
    #[must_use]
    pub fn to_decimal(&self) -> Decimal {
        to_decimal(self.units, self.nano)
    }

    /// Lossy floating point value.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_f64(&self) -> f64 {
        self.units as f64 + f64::from(self.nano) / 1e9
    }
}

impl TryFrom<Decimal> for Quotation {
    type Error = OutOfRange;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        let (units, nano) = split(value)?;
        Ok(Self { units, nano })
    }
}

impl From<Quotation> for Decimal {
    fn from(value: Quotation) -> Self {
        value.to_decimal()
    }
}

impl MoneyValue {
    /// Build a money value in the given currency.
    #[must_use]
    pub fn new(currency: impl Into<String>, units: i64, nano: i32) -> Self {
        Self {
            currency: currency.into(),
            units,
            nano,
        }
    }

    /// Build a money value from a decimal amount.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] if the whole part does not fit in `i64`.
    pub fn from_decimal(currency: impl Into<String>, amount: Decimal) -> Result<Self, OutOfRange> {
        let (units, nano) = split(amount)?;
        Ok(Self::new(currency, units, nano))
    }

    /// Exact decimal amount, currency dropped.
    #[must_use]
    pub fn to_decimal(&self) -> Decimal {
        to_decimal(self.units, self.nano)
    }

    /// Lossy floating point amount, currency dropped.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_f64(&self) -> f64 {
        self.units as f64 + f64::from(self.nano) / 1e9
    }
}

fn to_decimal(units: i64, nano: i32) -> Decimal {
    Decimal::from(units) + Decimal::new(i64::from(nano), NANO_SCALE)
}

/// Rounds to nano precision first, so a carry lands in `units` and
/// `|nano|` stays below one unit.
fn split(value: Decimal) -> Result<(i64, i32), OutOfRange> {
    let rounded = value.round_dp(NANO_SCALE);
    let whole = rounded.trunc();
    let units = whole.to_i64().ok_or(OutOfRange(value))?;
    let nano = ((rounded - whole) * Decimal::from(NANOS_PER_UNIT))
        .to_i32()
        .ok_or(OutOfRange(value))?;
    Ok((units, nano))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use test_case::test_case;

    #[test_case(114, 250_000_000, dec!(114.25) ; "positive")]
    #[test_case(-200, -200_000_000, dec!(-200.2) ; "negative")]
    #[test_case(0, 1, dec!(0.000000001) ; "smallest nano")]
    #[test_case(0, 0, dec!(0) ; "zero")]
    fn quotation_to_decimal(units: i64, nano: i32, expected: Decimal) {
        assert_eq!(Quotation::new(units, nano).to_decimal(), expected);
    }

    #[test]
    fn decimal_splits_with_matching_signs() {
        let q = Quotation::try_from(dec!(-3.5)).unwrap();
        assert_eq!(q.units, -3);
        assert_eq!(q.nano, -500_000_000);
    }

    #[test_case(dec!(1.9999999999), 2, 0 ; "carries into units")]
    #[test_case(dec!(-1.9999999999), -2, 0 ; "carries into negative units")]
    #[test_case(dec!(0.1234567894), 0, 123_456_789 ; "rounds down below half nano")]
    fn sub_nano_digits_round_into_valid_quotation(value: Decimal, units: i64, nano: i32) {
        let q = Quotation::try_from(value).unwrap();
        assert_eq!((q.units, q.nano), (units, nano));
        assert!(i64::from(q.nano).abs() < NANOS_PER_UNIT);
    }

    #[test]
    fn money_from_decimal_carries_sub_nano_overflow() {
        let money = MoneyValue::from_decimal("rub", dec!(99.99999999999)).unwrap();
        assert_eq!((money.units, money.nano), (100, 0));
    }

    #[test]
    fn decimal_out_of_range_is_rejected() {
        let huge = Decimal::MAX;
        assert!(Quotation::try_from(huge).is_err());
    }

    #[test]
    fn money_value_to_f64() {
        let money = MoneyValue::new("rub", 100_000, 500_000_000);
        assert!((money.to_f64() - 100_000.5).abs() < f64::EPSILON);
        assert_eq!(money.to_decimal(), dec!(100000.5));
    }

    #[test]
    fn money_value_from_decimal_keeps_currency() {
        let money = MoneyValue::from_decimal("usd", dec!(12.01)).unwrap();
        assert_eq!(money.currency, "usd");
        assert_eq!(money.units, 12);
        assert_eq!(money.nano, 10_000_000);
    }
}
