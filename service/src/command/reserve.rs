//! [`Command`] for reserving a [`Listing`].

use std::convert::Infallible;

use common::operations::{By, Select};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{
        listing,
        reservation::{Guests, Quote},
        stay::{self, CheckIn, CheckOut},
        Listing, Reservation, Stay,
    },
    infra::Catalog,
    Service,
};

use super::Command;

/// [`Command`] for reserving a [`Listing`].
///
/// Mirrors a reservation form, so every field may be left unfilled.
#[derive(Clone, Copy, Debug)]
pub struct Reserve {
    /// ID of the [`Listing`] to reserve.
    pub listing_id: listing::Id,

    /// [`CheckIn`] date of the reservation.
    pub check_in: Option<CheckIn>,

    /// [`CheckOut`] date of the reservation.
    pub check_out: Option<CheckOut>,

    /// Number of [`Guests`] staying.
    pub guests: Option<Guests>,
}

impl<Cat> Command<Reserve> for Service<Cat>
where
    Cat: Catalog<
        Select<By<Option<Listing>, listing::Id>>,
        Ok = Option<Listing>,
        Err = Infallible,
    >,
{
    type Ok = Reservation;
    type Err = Traced<ExecutionError>;

    fn execute(&self, cmd: Reserve) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let Reserve {
            listing_id,
            check_in,
            check_out,
            guests,
        } = cmd;

        let (Some(check_in), Some(check_out), Some(guests)) =
            (check_in, check_out, guests)
        else {
            return Err(tracerr::new!(E::IncompleteForm));
        };

        let listing = self
            .catalog()
            .execute(Select(By::new(listing_id)))
            .unwrap_or_else(|e| match e {})
            .ok_or(E::ListingNotExists(listing_id))
            .map_err(tracerr::wrap!())?;

        if !listing.capacity.fits(guests.into()) {
            return Err(tracerr::new!(E::TooManyGuests(
                listing.capacity.guests
            )));
        }

        let stay = Stay::new(check_in, check_out);
        if let Some(e) = stay.error() {
            return Err(tracerr::new!(E::InvalidStay(e)));
        }
        let nights = stay
            .nights()
            .ok_or(E::QuoteOverflow)
            .map_err(tracerr::wrap!())?;

        let quote = Quote::new(listing.price, nights, self.config().service_fee)
            .ok_or(E::QuoteOverflow)
            .map_err(tracerr::wrap!())?;

        log::info!(
            listing = %listing_id,
            check_in = %check_in,
            check_out = %check_out,
            guests = %guests,
            total = %quote.total,
            "reserved `Listing`",
        );

        Ok(Reservation {
            listing_id,
            stay,
            guests,
            quote,
        })
    }
}

/// Error of [`Reserve`] [`Command`] execution.
#[derive(Clone, Copy, Debug, Display, Error, From, Eq, PartialEq)]
pub enum ExecutionError {
    /// Some of the reservation fields are not filled.
    #[display("reservation form is incomplete")]
    #[from(ignore)]
    IncompleteForm,

    /// [`Listing`] doesn't exist.
    #[display("`Listing(id: {_0})` does not exist")]
    #[from(ignore)]
    ListingNotExists(#[error(not(source))] listing::Id),

    /// [`Listing`] doesn't host that many [`Guests`].
    #[display("no more than {_0} guests are allowed")]
    #[from(ignore)]
    TooManyGuests(#[error(not(source))] u8),

    /// Chosen [`Stay`] is invalid.
    #[display("invalid stay: {_0}")]
    InvalidStay(stay::Error),

    /// [`Quote`] doesn't fit into the [`Money`] range.
    ///
    /// [`Money`]: common::Money
    #[display("reservation price overflows")]
    #[from(ignore)]
    QuoteOverflow,
}
