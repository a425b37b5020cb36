//! [`Command`] for registering a new [`User`].

use common::Date;
use derive_more::{Display, Error};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{
        user::{self, ADULT_AGE},
        User,
    },
    Service,
};

use super::Command;

/// [`Command`] for registering a new [`User`].
#[derive(Clone, Debug)]
pub struct Register {
    /// [`user::Name`] of a new [`User`].
    pub name: user::Name,

    /// [`user::Email`] of a new [`User`].
    pub email: user::Email,

    /// [`user::Phone`] of a new [`User`].
    pub phone: user::Phone,

    /// [`user::BirthDate`] of a new [`User`].
    pub birth_date: user::BirthDate,

    /// [`user::Password`] of a new [`User`].
    pub password: user::Password,
}

impl<Cat> Command<Register> for Service<Cat> {
    type Ok = User;
    type Err = Traced<ExecutionError>;

    fn execute(&self, cmd: Register) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let Register {
            name,
            email,
            phone,
            birth_date,
            password,
        } = cmd;

        if user::age(birth_date, Date::today()) < ADULT_AGE {
            return Err(tracerr::new!(E::Underage));
        }
        if !password.is_strong() {
            return Err(tracerr::new!(E::WeakPassword));
        }

        log::info!(email = %email, "registered `User`");

        Ok(User {
            name,
            email,
            phone,
            birth_date,
        })
    }
}

/// Error of [`Register`] [`Command`] execution.
#[derive(Clone, Copy, Debug, Display, Error, Eq, PartialEq)]
pub enum ExecutionError {
    /// [`User`] is younger than [`ADULT_AGE`].
    #[display("`User` must be at least {} years old", ADULT_AGE)]
    Underage,

    /// [`user::Password`] is not strong enough.
    #[display(
        "`Password` must have at least {} characters, an uppercase letter \
         and a digit",
        user::Password::STRONG_MIN_LEN
    )]
    WeakPassword,
}
