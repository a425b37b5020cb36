//! [`User`] definitions.

use std::{fmt, str::FromStr, sync::LazyLock};

use common::{unit, Date, DateOf};
use derive_more::{AsRef, Display};
use regex::Regex;

/// Registered guest.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct User {
    /// [`Name`] of this [`User`].
    pub name: Name,

    /// [`Email`] of this [`User`].
    pub email: Email,

    /// [`Phone`] of this [`User`].
    pub phone: Phone,

    /// [`BirthDate`] of this [`User`].
    pub birth_date: BirthDate,
}

/// [`Date`] when a [`User`] was born.
pub type BirthDate = DateOf<(User, unit::Birth)>;

/// Age a [`User`] must have reached to register.
pub const ADULT_AGE: i32 = 18;

/// Returns the age of a [`User`] born on the `birth_date` as of `today`.
#[must_use]
pub fn age(birth_date: BirthDate, today: Date) -> i32 {
    birth_date.years_until(today)
}

/// Name of a [`User`].
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str)]
pub struct Name(String);

impl Name {
    /// Creates a new [`Name`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        Self::check(&name).then_some(Self(name))
    }

    /// Checks whether the given `name` is a valid [`Name`].
    fn check(name: impl AsRef<str>) -> bool {
        let name = name.as_ref();
        !name.trim().is_empty() && (2..=50).contains(&name.chars().count())
    }
}

impl FromStr for Name {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Name`")
    }
}

/// Email address of a [`User`].
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str)]
pub struct Email(String);

impl Email {
    /// Creates a new [`Email`] if the given `address` is valid.
    #[must_use]
    pub fn new(address: impl Into<String>) -> Option<Self> {
        let address = address.into();
        Self::check(&address).then_some(Self(address))
    }

    /// Checks whether the given `address` is a valid [`Email`].
    fn check(address: impl AsRef<str>) -> bool {
        /// Regular expression checking [`Email`] format:
        /// - a local part of dot-separated atoms;
        /// - a domain of dot-separated labels, each not starting or ending
        ///   with a hyphen and at most 63 characters long.
        static REGEX: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(
                "^[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+\
                  (\\.[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+)*\
                  @[a-zA-Z0-9]([a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?\
                  (\\.[a-zA-Z0-9]([a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
            )
            .expect("valid regex")
        });

        let address = address.as_ref();
        address.len() <= 254
            && address
                .split_once('@')
                .is_some_and(|(local, _)| local.len() <= 64)
            && REGEX.is_match(address)
    }
}

impl FromStr for Email {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Email`")
    }
}

/// Phone number of a [`User`].
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str)]
pub struct Phone(String);

impl Phone {
    /// Creates a new [`Phone`] if the given `number` is valid.
    #[must_use]
    pub fn new(number: impl Into<String>) -> Option<Self> {
        let number = number.into();
        Self::check(&number).then_some(Self(number))
    }

    /// Checks whether the given `number` is a valid [`Phone`].
    fn check(number: impl AsRef<str>) -> bool {
        /// Regular expression checking [`Phone`] format: an optional `+`
        /// followed by 10 to 15 digits, spaces, hyphens or parentheses.
        static REGEX: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"^[+]?[0-9\s\-()]{10,15}$").expect("valid regex")
        });

        REGEX.is_match(number.as_ref())
    }
}

impl FromStr for Phone {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Phone`")
    }
}

/// Password of a [`User`].
///
/// Any [`Password`] is good enough to log in, while registering requires a
/// [strong](Password::is_strong) one.
#[derive(Clone, Eq, PartialEq)]
pub struct Password(String);

impl Password {
    /// Minimal number of characters in a [`Password`].
    pub const MIN_LEN: usize = 6;

    /// Minimal number of characters in a strong [`Password`].
    pub const STRONG_MIN_LEN: usize = 8;

    /// Creates a new [`Password`] if the given `password` is valid.
    #[must_use]
    pub fn new(password: impl Into<String>) -> Option<Self> {
        let password = password.into();
        Self::check(&password).then_some(Self(password))
    }

    /// Checks whether the given `password` is a valid [`Password`].
    fn check(password: impl AsRef<str>) -> bool {
        let len = password.as_ref().chars().count();
        (Self::MIN_LEN..=128).contains(&len)
    }

    /// Indicates whether this [`Password`] is long enough and contains an
    /// uppercase letter and a digit.
    #[must_use]
    pub fn is_strong(&self) -> bool {
        /// Regular expression matching an uppercase letter.
        static UPPERCASE: LazyLock<Regex> =
            LazyLock::new(|| Regex::new("[A-Z]").expect("valid regex"));

        /// Regular expression matching a digit.
        static DIGIT: LazyLock<Regex> =
            LazyLock::new(|| Regex::new("[0-9]").expect("valid regex"));

        self.0.chars().count() >= Self::STRONG_MIN_LEN
            && UPPERCASE.is_match(&self.0)
            && DIGIT.is_match(&self.0)
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(..)")
    }
}

impl FromStr for Password {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Password`")
    }
}

#[cfg(test)]
mod spec {
    use common::Date;
    use time::macros::date;

    use super::{age, Email, Name, Password, Phone};

    #[test]
    fn name_length() {
        assert!(Name::new("").is_none());
        assert!(Name::new("A").is_none());
        assert!(Name::new("  ").is_none());
        assert!(Name::new("Al").is_some());
        assert!(Name::new("Ñu").is_some());
        assert!(Name::new("a".repeat(50)).is_some());
        assert!(Name::new("a".repeat(51)).is_none());
    }

    #[test]
    fn email_format() {
        for valid in ["ana@example.com", "a.b+c@mail.co", "x@localhost"] {
            assert!(Email::new(valid).is_some(), "`{valid}` is rejected");
        }
        for invalid in [
            "",
            "ana",
            "ana@",
            "@example.com",
            "ana@@example.com",
            "ana@-example.com",
            "ana..b@example.com",
            "ana @example.com",
        ] {
            assert!(Email::new(invalid).is_none(), "`{invalid}` is accepted");
        }
        let long_local = format!("{}@example.com", "a".repeat(65));
        assert!(Email::new(long_local).is_none());
    }

    #[test]
    fn phone_format() {
        for valid in ["3001234567", "+57 300 123 4567", "(604) 123-4567"] {
            assert!(Phone::new(valid).is_some(), "`{valid}` is rejected");
        }
        let invalids =
            ["300123456", "+57 300 123 4567 890", "300-CALL-NOW", ""];
        for invalid in invalids {
            assert!(Phone::new(invalid).is_none(), "`{invalid}` is accepted");
        }
    }

    #[test]
    fn password_strength() {
        assert!(Password::new("12345").is_none());

        let weak = Password::new("secret").unwrap();
        assert!(!weak.is_strong());
        assert!(!Password::new("Secret1").unwrap().is_strong());
        assert!(!Password::new("secretos1").unwrap().is_strong());
        assert!(!Password::new("Secretos").unwrap().is_strong());
        assert!(Password::new("Secretos1").unwrap().is_strong());

        assert_eq!(format!("{weak:?}"), "Password(..)");
    }

    #[test]
    fn age_counts_birthdays() {
        let today = Date::from(date!(2025 - 08 - 10));
        assert_eq!(age(date!(2007 - 08 - 10).into(), today), 18);
        assert_eq!(age(date!(2007 - 08 - 11).into(), today), 17);
        assert_eq!(age(date!(2025 - 08 - 10).into(), today), 0);
    }
}
