//! [`Stay`] definitions.

use common::{unit, Date, DateOf};
use derive_more::{Display, Error as StdError};

/// Date when a [`Stay`] starts.
pub type CheckIn = DateOf<(Stay, unit::CheckIn)>;

/// Date when a [`Stay`] ends.
pub type CheckOut = DateOf<(Stay, unit::CheckOut)>;

/// Range of nights chosen for a stay, along with its validation [`Status`].
///
/// The [`Status`] changes only on explicit date changes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Stay {
    /// [`CheckIn`] date of this [`Stay`].
    check_in: CheckIn,

    /// [`CheckOut`] date of this [`Stay`].
    check_out: CheckOut,

    /// Current [`Status`] of this [`Stay`].
    status: Status,
}

impl Stay {
    /// Creates a new [`Stay`] out of the provided dates, validating them.
    #[must_use]
    pub fn new(check_in: CheckIn, check_out: CheckOut) -> Self {
        Self {
            check_in,
            check_out,
            status: Self::validate(check_in, check_out).into(),
        }
    }

    /// Creates a single-night [`Stay`] starting `today`.
    #[must_use]
    pub fn starting(today: Date) -> Self {
        let check_in = today.coerce();
        Self::new(check_in, Self::min_check_out_for(check_in))
    }

    /// Validates the provided dates.
    ///
    /// Returns the earliest legal [`CheckOut`] for the `check_in`.
    ///
    /// # Errors
    ///
    /// - [`Error::CheckoutBeforeCheckin`] if the `check_out` precedes the
    ///   `check_in`.
    /// - [`Error::ZeroNightStay`] if both dates are the same.
    pub fn validate(
        check_in: CheckIn,
        check_out: CheckOut,
    ) -> Result<CheckOut, Error> {
        match check_in.days_until(check_out) {
            n if n < 0 => Err(Error::CheckoutBeforeCheckin),
            0 => Err(Error::ZeroNightStay),
            _ => Ok(Self::min_check_out_for(check_in)),
        }
    }

    /// Returns the earliest legal [`CheckOut`] for the provided `check_in`.
    #[must_use]
    pub fn min_check_out_for(check_in: CheckIn) -> CheckOut {
        check_in.next_day().coerce()
    }

    /// Returns the [`CheckIn`] date of this [`Stay`].
    #[must_use]
    pub fn check_in(&self) -> CheckIn {
        self.check_in
    }

    /// Returns the [`CheckOut`] date of this [`Stay`].
    #[must_use]
    pub fn check_out(&self) -> CheckOut {
        self.check_out
    }

    /// Returns the earliest legal [`CheckOut`] date of this [`Stay`].
    #[must_use]
    pub fn min_check_out(&self) -> CheckOut {
        Self::min_check_out_for(self.check_in)
    }

    /// Returns the current [`Status`] of this [`Stay`].
    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns the [`Error`] this [`Stay`] is invalid with, if any.
    #[must_use]
    pub fn error(&self) -> Option<Error> {
        match self.status {
            Status::Valid { .. } => None,
            Status::Invalid(e) => Some(e),
        }
    }

    /// Indicates whether this [`Stay`] is valid.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.error().is_none()
    }

    /// Returns the number of nights in this [`Stay`], if it's valid.
    #[must_use]
    pub fn nights(&self) -> Option<u32> {
        if !self.is_valid() {
            return None;
        }
        u32::try_from(self.check_in.days_until(self.check_out)).ok()
    }

    /// Changes the [`CheckIn`] date of this [`Stay`].
    ///
    /// A [`CheckOut`] not following the new `check_in` is advanced to the
    /// earliest legal one.
    pub fn set_check_in(&mut self, check_in: CheckIn) {
        self.check_in = check_in;
        let min_check_out = self.min_check_out();
        if self.check_out < min_check_out {
            self.check_out = min_check_out;
        }
        self.revalidate();
    }

    /// Changes the [`CheckOut`] date of this [`Stay`].
    pub fn set_check_out(&mut self, check_out: CheckOut) {
        self.check_out = check_out;
        self.revalidate();
    }

    /// Recomputes the [`Status`] of this [`Stay`].
    fn revalidate(&mut self) {
        self.status = Self::validate(self.check_in, self.check_out).into();
    }
}

/// Validation status of a [`Stay`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Status {
    /// [`Stay`] is valid.
    Valid {
        /// Earliest legal [`CheckOut`] of the [`Stay`].
        min_check_out: CheckOut,
    },

    /// [`Stay`] is invalid.
    Invalid(Error),
}

impl From<Result<CheckOut, Error>> for Status {
    fn from(res: Result<CheckOut, Error>) -> Self {
        match res {
            Ok(min_check_out) => Self::Valid { min_check_out },
            Err(e) => Self::Invalid(e),
        }
    }
}

/// Error of an invalid [`Stay`].
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, StdError)]
pub enum Error {
    /// [`CheckOut`] comes before [`CheckIn`].
    #[display("La fecha de salida no puede ser anterior a la fecha de entrada")]
    CheckoutBeforeCheckin,

    /// [`CheckOut`] is the same day as [`CheckIn`].
    #[display("La estadía debe ser de al menos una noche")]
    ZeroNightStay,
}

#[cfg(test)]
mod spec {
    use common::Date;
    use time::macros::date;

    use super::{CheckIn, CheckOut, Error, Status, Stay};

    fn check_in(d: time::Date) -> CheckIn {
        d.into()
    }

    fn check_out(d: time::Date) -> CheckOut {
        d.into()
    }

    #[test]
    fn starts_valid_with_single_night() {
        let stay = Stay::starting(Date::from(date!(2025 - 08 - 01)));
        assert_eq!(stay.check_in().to_string(), "2025-08-01");
        assert_eq!(stay.check_out().to_string(), "2025-08-02");
        assert_eq!(
            stay.status(),
            Status::Valid {
                min_check_out: check_out(date!(2025 - 08 - 02)),
            },
        );
        assert_eq!(stay.nights(), Some(1));
    }

    #[test]
    fn validates() {
        let d = date!(2025 - 08 - 10);
        assert_eq!(
            Stay::validate(check_in(d), check_out(date!(2025 - 08 - 09))),
            Err(Error::CheckoutBeforeCheckin),
        );
        assert_eq!(
            Stay::validate(check_in(d), check_out(d)),
            Err(Error::ZeroNightStay),
        );
        assert_eq!(
            Stay::validate(check_in(d), check_out(date!(2025 - 08 - 15))),
            Ok(check_out(date!(2025 - 08 - 11))),
        );
    }

    #[test]
    fn check_out_changes_transition_status() {
        let mut stay = Stay::starting(Date::from(date!(2025 - 08 - 10)));

        stay.set_check_out(check_out(date!(2025 - 08 - 10)));
        assert_eq!(stay.error(), Some(Error::ZeroNightStay));
        assert_eq!(stay.nights(), None);

        stay.set_check_out(check_out(date!(2025 - 08 - 01)));
        assert_eq!(stay.error(), Some(Error::CheckoutBeforeCheckin));

        stay.set_check_out(check_out(date!(2025 - 08 - 14)));
        assert!(stay.is_valid());
        assert_eq!(stay.nights(), Some(4));
    }

    #[test]
    fn check_in_change_advances_check_out() {
        let mut stay = Stay::new(
            check_in(date!(2025 - 08 - 10)),
            check_out(date!(2025 - 08 - 12)),
        );

        stay.set_check_in(check_in(date!(2025 - 08 - 20)));
        assert_eq!(stay.check_out(), check_out(date!(2025 - 08 - 21)));
        assert!(stay.is_valid());

        stay.set_check_in(check_in(date!(2025 - 08 - 21)));
        assert_eq!(stay.check_out(), check_out(date!(2025 - 08 - 22)));

        stay.set_check_in(check_in(date!(2025 - 08 - 15)));
        assert_eq!(stay.check_out(), check_out(date!(2025 - 08 - 22)));
        assert_eq!(stay.nights(), Some(7));
    }

    #[test]
    fn check_in_change_recovers_invalid_stay() {
        let mut stay = Stay::starting(Date::from(date!(2025 - 08 - 10)));
        stay.set_check_out(check_out(date!(2025 - 08 - 05)));
        assert!(!stay.is_valid());

        stay.set_check_in(check_in(date!(2025 - 08 - 01)));
        assert!(stay.is_valid());
        assert_eq!(stay.nights(), Some(4));
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            Error::ZeroNightStay.to_string(),
            "La estadía debe ser de al menos una noche",
        );
        assert_eq!(
            Error::CheckoutBeforeCheckin.to_string(),
            "La fecha de salida no puede ser anterior a la fecha de entrada",
        );
    }
}
