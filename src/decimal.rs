use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;

/// currency amount held at 2 decimal places
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);
    pub const ONE: Money = Money(Decimal::ONE);

    /// decimal places kept on every amount
    pub const SCALE: u32 = 2;

    /// create from decimal, rounding half to even
    pub fn from_decimal(d: Decimal) -> Self {
        Money(d.round_dp(Self::SCALE))
    }

    /// create from string with exact parsing
    pub fn from_str_exact(s: &str) -> Result<Self, rust_decimal::Error> {
        Ok(Money(Decimal::from_str(s)?.round_dp(Self::SCALE)))
    }

    /// create from whole currency units
    pub fn from_major(amount: i64) -> Self {
        Money(Decimal::from(amount))
    }

    /// create from minor units (paise, cents)
    pub fn from_minor(amount: i64) -> Self {
        Money(Decimal::new(amount, Self::SCALE))
    }

    /// get underlying decimal
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// strictly greater than zero
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// strictly less than zero
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// strictly above `share` of `whole`, compared without rounding the share
    pub fn exceeds_share_of(&self, whole: Money, share: Rate) -> bool {
        self.0 > whole.0 * share.as_decimal()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::from_str_exact(s)
    }
}

impl From<Decimal> for Money {
    fn from(d: Decimal) -> Self {
        Money::from_decimal(d)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money((self.0 + other.0).round_dp(Self::SCALE))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |acc, x| acc + *x)
    }
}

/// rate type for interest rates and ratios, stored as a fraction (0.10 = 10%)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct Rate(Decimal);

impl Rate {
    pub const ZERO: Rate = Rate(Decimal::ZERO);
    pub const ONE: Rate = Rate(Decimal::ONE);

    /// create from decimal fraction (e.g., 0.05 for 5%)
    pub fn from_decimal(d: Decimal) -> Self {
        Rate(d)
    }

    /// create from whole percentage (e.g., 5 for 5%)
    pub fn from_percentage(p: u32) -> Self {
        Rate(Decimal::from(p) / Decimal::from(100))
    }

    /// create from a fractional percentage (e.g., 10.5 for 10.5%)
    pub fn from_percent(p: Decimal) -> Self {
        Rate(p / Decimal::from(100))
    }

    /// create from basis points (e.g., 500 for 5%)
    pub fn from_bps(bps: u32) -> Self {
        Rate(Decimal::from(bps) / Decimal::from(10000))
    }

    /// get as decimal fraction
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// get as percentage, trailing zeros removed
    pub fn as_percentage(&self) -> Decimal {
        (self.0 * Decimal::from(100)).normalize()
    }

    /// monthly rate from annual rate
    pub fn monthly_rate(&self) -> Rate {
        Rate(self.0 / Decimal::from(12))
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.as_percentage())
    }
}

impl From<Decimal> for Rate {
    fn from(d: Decimal) -> Self {
        Rate::from_decimal(d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_precision() {
        let m = Money::from_str_exact("100.125").unwrap();
        assert_eq!(m.to_string(), "100.12"); // half to even

        let m = Money::from_str_exact("100.135").unwrap();
        assert_eq!(m.to_string(), "100.14");
    }

    #[test]
    fn test_minor_units() {
        assert_eq!(Money::from_minor(439_579), Money::from_str_exact("4395.79").unwrap());
        assert_eq!(Money::from_minor(100), Money::ONE);
    }

    #[test]
    fn test_sign_checks() {
        assert!(!Money::ZERO.is_positive());
        assert!(!Money::ZERO.is_negative());
        assert!(Money::from_major(-1_000).is_negative());
        assert!(Money::from_major(1).is_positive());
    }

    #[test]
    fn test_money_sum() {
        let amounts = vec![Money::from_major(100), Money::from_minor(50), Money::from_major(25)];
        let total: Money = amounts.iter().sum();
        assert_eq!(total, Money::from_str_exact("125.50").unwrap());
    }

    #[test]
    fn test_share_of_income() {
        let half = Rate::from_percentage(50);
        let income = Money::from_major(70_000);
        assert!(!Money::from_major(35_000).exceeds_share_of(income, half));
        assert!(Money::from_str_exact("35000.01").unwrap().exceeds_share_of(income, half));

        // half of 70000.07 is 35000.035, which would round to 35000.04
        let odd = Money::from_str_exact("70000.07").unwrap();
        assert!(Money::from_str_exact("35000.04").unwrap().exceeds_share_of(odd, half));
        assert!(!Money::from_str_exact("35000.03").unwrap().exceeds_share_of(odd, half));
    }

    #[test]
    fn test_rate_conversions() {
        let rate = Rate::from_percent(dec!(10.5));
        assert_eq!(rate.as_decimal(), dec!(0.105));
        assert_eq!(rate.as_percentage(), dec!(10.5));
        assert_eq!(Rate::from_percentage(16).to_string(), "16%");
        assert_eq!(Rate::from_bps(1200), Rate::from_percentage(12));
        assert_eq!(Rate::from_percentage(12).monthly_rate().as_decimal(), dec!(0.01));
    }
}
