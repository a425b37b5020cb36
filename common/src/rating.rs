//! [`Rating`]-related definitions.

use std::{fmt, str::FromStr};

use rust_decimal::Decimal;

/// Exact decimal rating between `0` and `5` inclusive.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Rating(Decimal);

impl Rating {
    /// Lowest possible [`Rating`].
    pub const MIN: Self = Self(Decimal::ZERO);

    /// Highest possible [`Rating`].
    pub const MAX: Self = Self(Decimal::from_parts(5, 0, 0, false, 0));

    /// Creates a new [`Rating`] by checking the provided value is not less
    /// than `0` and not greater than `5`.
    #[must_use]
    pub fn new(val: Decimal) -> Option<Self> {
        (Self::MIN.0..=Self::MAX.0)
            .contains(&val)
            .then_some(Self(val.normalize()))
    }

    /// Creates a new [`Rating`] out of hundredths of a point, so `485` is
    /// `4.85`.
    ///
    /// Values above `500` saturate to [`Rating::MAX`].
    #[must_use]
    pub const fn from_hundredths(val: u32) -> Self {
        if val > 500 {
            Self::MAX
        } else {
            Self(Decimal::from_parts(val, 0, 0, false, 2))
        }
    }

    /// Returns the inner [`Decimal`] value of this [`Rating`].
    #[must_use]
    pub fn into_inner(self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

impl FromStr for Rating {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s)
            .ok()
            .and_then(Self::new)
            .ok_or("invalid rating value")
    }
}

impl TryFrom<f64> for Rating {
    type Error = &'static str;

    /// Goes through the shortest decimal representation of the `value`, so
    /// `4.85_f64` becomes exactly `4.85`.
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err("invalid rating value");
        }
        value.to_string().parse()
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use super::Rating;

    #[test]
    fn from_str() {
        assert_eq!(Rating::from_str("4.85").unwrap().to_string(), "4.85");
        assert_eq!(Rating::from_str("5").unwrap(), Rating::MAX);
        assert_eq!(Rating::from_str("5.0").unwrap(), Rating::MAX);
        assert_eq!(Rating::from_str("0").unwrap(), Rating::MIN);

        assert!(Rating::from_str("5.01").is_err());
        assert!(Rating::from_str("-0.1").is_err());
        assert!(Rating::from_str("five").is_err());
    }

    #[test]
    fn from_hundredths() {
        assert_eq!(Rating::from_hundredths(485), "4.85".parse().unwrap());
        assert_eq!(Rating::from_hundredths(480), "4.8".parse().unwrap());
        assert_eq!(Rating::from_hundredths(500), Rating::MAX);
        assert_eq!(Rating::from_hundredths(900), Rating::MAX);
    }

    #[test]
    fn displays_without_trailing_zeros() {
        assert_eq!(Rating::from_hundredths(500).to_string(), "5");
        assert_eq!(Rating::from_hundredths(480).to_string(), "4.8");
        assert_eq!(Rating::from_hundredths(485).to_string(), "4.85");
        assert_eq!(Rating::try_from(5.0).unwrap().to_string(), "5");
        assert_eq!(Rating::MIN.to_string(), "0");
    }

    #[test]
    fn from_float_is_exact() {
        let threshold = Rating::from_hundredths(480);
        assert!(Rating::try_from(4.78).unwrap() < threshold);
        assert!(Rating::try_from(4.8).unwrap() >= threshold);
        assert_eq!(Rating::try_from(4.8).unwrap(), threshold);
        assert!(Rating::try_from(f64::NAN).is_err());
        assert!(Rating::try_from(7.5).is_err());
    }
}
