//! Money
//!
//! Non-negative currency amounts stored as whole cents.

use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, DashboardResult};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: u64) -> Self {
        Money(cents)
    }

    /// Whole currency units (euros)
    pub const fn from_units(units: u64) -> Self {
        Money(units * 100)
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    pub const fn units(self) -> u64 {
        self.0 / 100
    }

    /// Parse form input such as `250`, `99.5`, `1234,56` or `+10`.
    ///
    /// Empty input is zero. At most two fractional digits.
    pub fn parse(input: &str) -> DashboardResult<Self> {
        let s = input.trim();
        if s.is_empty() {
            return Ok(Money::ZERO);
        }
        if s.starts_with('-') {
            return Err(DashboardError::NegativeAmount(s.to_string()));
        }
        let s = s.strip_prefix('+').unwrap_or(s);
        let invalid = || DashboardError::InvalidAmount(input.to_string());

        let (whole, frac) = match s.find(|c: char| c == '.' || c == ',') {
            Some(i) => (&s[..i], &s[i + 1..]),
            None => (s, ""),
        };
        let digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if (whole.is_empty() && frac.is_empty()) || !digits(whole) || !digits(frac) || frac.len() > 2 {
            return Err(invalid());
        }

        let units: u64 = if whole.is_empty() { 0 } else { whole.parse().map_err(|_| invalid())? };
        let cents: u64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<u64>().map_err(|_| invalid())? * 10,
            _ => frac.parse().map_err(|_| invalid())?,
        };
        units
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents))
            .map(Money)
            .ok_or_else(invalid)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        *self = *self + rhs;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_whole_and_fractional() {
        assert_eq!(Money::parse("250"), Ok(Money::from_units(250)));
        assert_eq!(Money::parse(" 99.5 "), Ok(Money::from_cents(9950)));
        assert_eq!(Money::parse("1234,56"), Ok(Money::from_cents(123456)));
        assert_eq!(Money::parse(".75"), Ok(Money::from_cents(75)));
        assert_eq!(Money::parse("+10"), Ok(Money::from_units(10)));
    }

    #[test]
    fn test_parse_empty_is_zero() {
        assert_eq!(Money::parse(""), Ok(Money::ZERO));
        assert_eq!(Money::parse("   "), Ok(Money::ZERO));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(Money::parse("-5"), Err(DashboardError::NegativeAmount("-5".to_string())));
        assert!(matches!(Money::parse("abc"), Err(DashboardError::InvalidAmount(_))));
        assert!(matches!(Money::parse("1.234,5"), Err(DashboardError::InvalidAmount(_))));
        assert!(matches!(Money::parse("1.999"), Err(DashboardError::InvalidAmount(_))));
        assert!(matches!(Money::parse("."), Err(DashboardError::InvalidAmount(_))));
        assert!(matches!(Money::parse("99999999999999999999"), Err(DashboardError::InvalidAmount(_))));
    }

    #[test]
    fn test_sum() {
        let amounts = [Money::from_units(100), Money::from_units(250)];
        assert_eq!(amounts.iter().sum::<Money>(), Money::from_units(350));
        assert_eq!(Vec::<Money>::new().into_iter().sum::<Money>(), Money::ZERO);
    }
}
