//! Calendar date utilities.

use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
    str::FromStr,
};

use derive_more::{Display, Error};
use time::macros::format_description;

/// Untyped calendar date.
pub type Date = DateOf;

/// Calendar date without a time-of-day component.
pub struct DateOf<Of: ?Sized = ()> {
    /// Inner representation of the date.
    inner: time::Date,

    /// Type parameter describing the kind of date.
    _of: PhantomData<Of>,
}

impl<Of: ?Sized> DateOf<Of> {
    /// Creates a new [`DateOf`] representing the current UTC date.
    #[must_use]
    pub fn today() -> Self {
        time::OffsetDateTime::now_utc().date().into()
    }

    /// Creates a new [`DateOf`] from the provided calendar components.
    ///
    /// [`None`] is returned if the components don't form a valid date.
    #[must_use]
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Option<Self> {
        let month = time::Month::try_from(month).ok()?;
        time::Date::from_calendar_date(year, month, day)
            .ok()
            .map(Into::into)
    }

    /// Parses a `YYYY-MM-DD` string into a [`DateOf`].
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid `YYYY-MM-DD` date.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        time::Date::parse(input, format_description!("[year]-[month]-[day]"))
            .map(Into::into)
            .map_err(ParseError)
    }

    /// Returns the date following this one.
    ///
    /// Saturates at the maximum representable date.
    #[must_use]
    pub fn next_day(self) -> Self {
        self.inner.next_day().unwrap_or(self.inner).into()
    }

    /// Returns the number of days from this date until the `other` one.
    ///
    /// Negative if the `other` date comes first.
    #[must_use]
    pub fn days_until<Other: ?Sized>(self, other: DateOf<Other>) -> i64 {
        (other.inner - self.inner).whole_days()
    }

    /// Returns the number of whole years passed from this date until the
    /// `other` one.
    ///
    /// A year is only counted once its anniversary is reached, so
    /// `2000-03-15` is `17` years until `2018-03-14` and `18` years until
    /// `2018-03-15`.
    #[must_use]
    pub fn years_until<Other: ?Sized>(self, other: DateOf<Other>) -> i32 {
        let (from, to) = (self.inner, other.inner);
        let month_day = |d: time::Date| (u8::from(d.month()), d.day());
        let years = to.year() - from.year();
        if month_day(to) < month_day(from) {
            years - 1
        } else {
            years
        }
    }

    /// Coerces one kind of [`DateOf`] into another.
    #[must_use]
    pub fn coerce<NewOf: ?Sized>(self) -> DateOf<NewOf> {
        DateOf {
            inner: self.inner,
            _of: PhantomData,
        }
    }
}

/// Error of parsing [`DateOf`] from a string.
#[derive(Clone, Copy, Debug, Display, Error)]
#[display("invalid `YYYY-MM-DD` date: {_0}")]
pub struct ParseError(time::error::Parse);

impl<Of: ?Sized> Display for DateOf<Of> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.inner.year(),
            u8::from(self.inner.month()),
            self.inner.day(),
        )
    }
}

impl<Of: ?Sized> fmt::Debug for DateOf<Of> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DateOf({self})")
    }
}

impl<Of: ?Sized> FromStr for DateOf<Of> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<Of: ?Sized> Copy for DateOf<Of> {}
impl<Of: ?Sized> Clone for DateOf<Of> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Of: ?Sized> Eq for DateOf<Of> {}
impl<Of: ?Sized> PartialEq for DateOf<Of> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<Of: ?Sized> Hash for DateOf<Of> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.hash(state);
    }
}

impl<Of: ?Sized> Ord for DateOf<Of> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.cmp(&other.inner)
    }
}
impl<Of: ?Sized> PartialOrd for DateOf<Of> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<Of: ?Sized> From<time::Date> for DateOf<Of> {
    fn from(inner: time::Date) -> Self {
        Self {
            inner,
            _of: PhantomData,
        }
    }
}

impl<Of: ?Sized> From<DateOf<Of>> for time::Date {
    fn from(date: DateOf<Of>) -> Self {
        date.inner
    }
}

#[cfg(test)]
mod spec {
    use time::macros::date;

    use super::Date;

    #[test]
    fn parses_and_formats() {
        let d = Date::parse("2025-08-09").unwrap();
        assert_eq!(time::Date::from(d), date!(2025 - 08 - 09));
        assert_eq!(d.to_string(), "2025-08-09");

        assert!(Date::parse("2025-8-9").is_err());
        assert!(Date::parse("2025-02-30").is_err());
        assert!(Date::parse("tomorrow").is_err());
    }

    #[test]
    fn next_day_crosses_month_and_year() {
        let d = Date::from(date!(2024 - 12 - 31));
        assert_eq!(d.next_day().to_string(), "2025-01-01");

        let leap = Date::from(date!(2024 - 02 - 28));
        assert_eq!(leap.next_day().to_string(), "2024-02-29");
    }

    #[test]
    fn counts_days_between() {
        let from = Date::from(date!(2025 - 01 - 10));
        let to = Date::from(date!(2025 - 01 - 15));
        assert_eq!(from.days_until(to), 5);
        assert_eq!(to.days_until(from), -5);
        assert_eq!(from.days_until(from), 0);
    }

    #[test]
    fn from_ymd_rejects_invalid() {
        assert!(Date::from_ymd(2025, 13, 1).is_none());
        assert!(Date::from_ymd(2025, 2, 29).is_none());
        assert_eq!(
            Date::from_ymd(2025, 1, 2).map(|d| d.to_string()),
            Some("2025-01-02".to_owned()),
        );
    }

    #[test]
    fn counts_whole_years_between() {
        let birth = Date::from(date!(2000 - 03 - 15));
        assert_eq!(birth.years_until(Date::from(date!(2018 - 03 - 14))), 17);
        assert_eq!(birth.years_until(Date::from(date!(2018 - 03 - 15))), 18);
        assert_eq!(birth.years_until(Date::from(date!(2018 - 02 - 20))), 17);
        assert_eq!(birth.years_until(birth), 0);

        let leap = Date::from(date!(2004 - 02 - 29));
        assert_eq!(leap.years_until(Date::from(date!(2022 - 02 - 28))), 17);
        assert_eq!(leap.years_until(Date::from(date!(2022 - 03 - 01))), 18);
    }
}
