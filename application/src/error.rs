//! [`Error`]-related definitions.

use std::fmt;

use config::ConfigError;
use derive_more::Error as StdError;
use itertools::Itertools as _;
use service::{
    command::{register, reserve},
    domain::stay,
};
use tracerr::{Trace, Traced};

use crate::config::{CatalogError, ServiceError};

/// Defines a new error type.
#[expect(clippy::module_name_repetitions, reason = "more readable")]
#[macro_export]
macro_rules! define_error {
    (
        enum $name:ident {
            $(
                #[code = $code:literal]
                #[message = $message:literal]
                $variant:ident
            ),* $(,)?
        }
    ) => {
        /// Error type.
        #[derive(
            Clone,
            Copy,
            Debug,
            ::derive_more::Display,
            ::derive_more::Error
        )]
        #[repr(u16)]
        pub enum $name {
            $(
                #[display($message)]
                #[doc = $message]
                $variant,
            )*
        }

        impl From<$name> for $crate::Error {
            fn from(err: $name) -> Self {
                match err {
                    $(
                        $name::$variant => Self {
                            code: $code,
                            message: $message.to_string(),
                            backtrace: None,
                        },
                    )*
                }
            }
        }
    };
}

/// Application [`Error`] reported to the user.
#[derive(Clone, Debug, StdError)]
pub struct Error {
    /// [`Error`] code.
    pub code: Code,

    /// Backtrace of this [`Error`].
    #[error(not(backtrace))]
    pub backtrace: Option<Trace>,

    /// [`Error`] message.
    pub message: String,
}

impl Error {
    /// Create a new [`Error`] representing an unexpected failure.
    #[must_use]
    pub fn internal(msg: &impl ToString) -> Self {
        Self {
            code: "INTERNAL_ERROR",
            message: msg.to_string(),
            backtrace: None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            code,
            backtrace,
            message,
        } = self;

        write!(
            f,
            "[{code}]: {message}{}",
            backtrace
                .iter()
                .format_with("\n", |trace, f| f(&format_args!("\n{trace}"))),
        )
    }
}

/// [`Error`] code.
pub type Code = &'static str;

/// Helper trait for converting types into [`Error`]s.
pub trait AsError {
    /// Tries to convert the type into an [`Error`].
    ///
    /// [`None`] is returned if the type cannot be converted into an [`Error`].
    fn try_as_error(&self) -> Option<Error>;

    /// Converts the type into an [`Error`].
    fn as_error(&self) -> Error
    where
        Self: fmt::Display,
    {
        self.try_as_error()
            .unwrap_or_else(|| Error::internal(&self))
    }

    /// Converts the type into an [`Error`] by consuming it.
    fn into_error(self) -> Error
    where
        Self: fmt::Display + Sized,
    {
        self.as_error()
    }
}

impl<E: AsError> AsError for Traced<E> {
    fn try_as_error(&self) -> Option<Error> {
        let mut error = self.as_ref().try_as_error()?;
        error.backtrace = Some(self.trace().clone());
        Some(error)
    }
}

impl AsError for reserve::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        use reserve::ExecutionError as E;

        let code = match self {
            E::IncompleteForm => "INCOMPLETE_RESERVATION",
            E::ListingNotExists(_) => "LISTING_NOT_FOUND",
            E::TooManyGuests(_) => "TOO_MANY_GUESTS",
            E::InvalidStay(e) => return e.try_as_error(),
            E::QuoteOverflow => return None,
        };
        Some(Error {
            code,
            message: self.to_string(),
            backtrace: None,
        })
    }
}

impl AsError for register::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        use register::ExecutionError as E;

        let code = match self {
            E::Underage => "UNDERAGE",
            E::WeakPassword => "WEAK_PASSWORD",
        };
        Some(Error {
            code,
            message: self.to_string(),
            backtrace: None,
        })
    }
}

impl AsError for stay::Error {
    fn try_as_error(&self) -> Option<Error> {
        Some(Error {
            code: "INVALID_STAY",
            message: self.to_string(),
            backtrace: None,
        })
    }
}

impl AsError for ConfigError {
    fn try_as_error(&self) -> Option<Error> {
        Some(Error {
            code: "INVALID_CONFIG",
            message: self.to_string(),
            backtrace: None,
        })
    }
}

impl AsError for ServiceError {
    fn try_as_error(&self) -> Option<Error> {
        Some(Error {
            code: "INVALID_CONFIG",
            message: self.to_string(),
            backtrace: None,
        })
    }
}

impl AsError for CatalogError {
    fn try_as_error(&self) -> Option<Error> {
        Some(Error {
            code: "INVALID_CATALOG",
            message: self.to_string(),
            backtrace: None,
        })
    }
}

#[cfg(test)]
mod spec {
    use service::{
        command::{register, reserve::ExecutionError},
        domain::{listing, stay},
    };

    use super::AsError as _;

    #[test]
    fn maps_reservation_errors_to_codes() {
        let cases = [
            (ExecutionError::IncompleteForm, "INCOMPLETE_RESERVATION"),
            (
                ExecutionError::ListingNotExists(listing::Id::from(42)),
                "LISTING_NOT_FOUND",
            ),
            (
                ExecutionError::InvalidStay(stay::Error::ZeroNightStay),
                "INVALID_STAY",
            ),
            (ExecutionError::TooManyGuests(4), "TOO_MANY_GUESTS"),
            (ExecutionError::QuoteOverflow, "INTERNAL_ERROR"),
        ];
        for (err, code) in cases {
            assert_eq!(err.as_error().code, code, "wrong code of `{err}`");
        }
    }

    #[test]
    fn maps_registration_errors_to_codes() {
        let cases = [
            (register::ExecutionError::Underage, "UNDERAGE"),
            (register::ExecutionError::WeakPassword, "WEAK_PASSWORD"),
        ];
        for (err, code) in cases {
            let error = err.as_error();
            assert_eq!(error.code, code, "wrong code of `{err}`");
            assert_eq!(error.message, err.to_string());
        }
    }

    #[test]
    fn keeps_stay_message() {
        let err = stay::Error::CheckoutBeforeCheckin.as_error();
        assert_eq!(
            err.to_string(),
            "[INVALID_STAY]: La fecha de salida no puede ser anterior a la \
             fecha de entrada",
        );
    }

    #[test]
    fn attaches_trace() {
        let err = tracerr::new!(ExecutionError::IncompleteForm).as_error();
        assert_eq!(err.code, "INCOMPLETE_RESERVATION");
        assert!(err.backtrace.is_some());
    }
}
