//! [`Money`]-related definitions.

use std::{fmt, str::FromStr};

use derive_more::{From, Into};

/// Amount of Colombian pesos.
///
/// Pesos have no minor unit in practice, so the amount is a whole number.
#[derive(
    Clone, Copy, Debug, Default, Eq, From, Hash, Into, Ord, PartialEq, PartialOrd,
)]
pub struct Money(u64);

impl Money {
    /// Zero amount of [`Money`].
    pub const ZERO: Self = Self(0);

    /// Creates a new [`Money`] out of the provided amount.
    #[must_use]
    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    /// Returns the amount of this [`Money`].
    #[must_use]
    pub const fn amount(self) -> u64 {
        self.0
    }

    /// Adds the `other` [`Money`], returning [`None`] on overflow.
    #[must_use]
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Multiplies this [`Money`] by `times`, returning [`None`] on overflow.
    #[must_use]
    pub const fn checked_mul(self, times: u64) -> Option<Self> {
        match self.0.checked_mul(times) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }
}

/// Formats as `$150.000`, grouping thousands with dots.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push('.');
            }
            out.push(c);
        }
        write!(f, "${out}")
    }
}

impl FromStr for Money {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix('$').unwrap_or(s);
        if s.is_empty() {
            return Err("empty amount");
        }
        if s.starts_with('.') || s.ends_with('.') || s.contains("..") {
            return Err("misplaced separator");
        }

        s.chars()
            .filter(|c| *c != '.')
            .collect::<String>()
            .parse()
            .map(Self)
            .map_err(|_| "invalid amount")
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use super::Money;

    #[test]
    fn from_str() {
        assert_eq!(Money::from_str("150000").unwrap(), Money::new(150_000));
        assert_eq!(Money::from_str("$150.000").unwrap(), Money::new(150_000));
        assert_eq!(Money::from_str("1.000.000").unwrap(), Money::new(1_000_000));
        assert_eq!(Money::from_str("0").unwrap(), Money::ZERO);

        assert!(Money::from_str("").is_err());
        assert!(Money::from_str("$").is_err());
        assert!(Money::from_str("-5").is_err());
        assert!(Money::from_str("150.").is_err());
        assert!(Money::from_str("1..000").is_err());
        assert!(Money::from_str("12abc").is_err());
    }

    #[test]
    fn to_string() {
        assert_eq!(Money::new(0).to_string(), "$0");
        assert_eq!(Money::new(999).to_string(), "$999");
        assert_eq!(Money::new(65_000).to_string(), "$65.000");
        assert_eq!(Money::new(150_000).to_string(), "$150.000");
        assert_eq!(Money::new(1_000_000).to_string(), "$1.000.000");
    }

    #[test]
    fn checked_arithmetic() {
        assert_eq!(
            Money::new(180_000).checked_mul(5),
            Some(Money::new(900_000)),
        );
        assert_eq!(
            Money::new(900_000).checked_add(Money::new(65_000)),
            Some(Money::new(965_000)),
        );
        assert_eq!(Money::new(u64::MAX).checked_mul(2), None);
        assert_eq!(Money::new(u64::MAX).checked_add(Money::new(1)), None);
    }
}
