//! [`Reservation`] definitions.

use common::Money;
use derive_more::{Display, Into};

use crate::domain::{listing, Stay};
#[cfg(doc)]
use crate::domain::Listing;

/// Booked [`Stay`] in a [`Listing`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Reservation {
    /// ID of the reserved [`Listing`].
    pub listing_id: listing::Id,

    /// Reserved [`Stay`].
    pub stay: Stay,

    /// Number of [`Guests`] staying.
    pub guests: Guests,

    /// [`Quote`] to be paid.
    pub quote: Quote,
}

/// Number of guests in a [`Reservation`].
#[derive(Clone, Copy, Debug, Display, Eq, Hash, Into, Ord, PartialEq, PartialOrd)]
pub struct Guests(u8);

impl Guests {
    /// Creates new [`Guests`] if there is at least one guest.
    #[must_use]
    pub fn new(count: u8) -> Option<Self> {
        (count > 0).then_some(Self(count))
    }
}

/// Price breakdown of a [`Reservation`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Quote {
    /// Number of nights being paid.
    pub nights: u32,

    /// Price of a single night.
    pub price: Money,

    /// Price of all the nights.
    pub subtotal: Money,

    /// Fixed fee charged on top of the nights.
    pub service_fee: Money,

    /// Total amount to be paid.
    pub total: Money,
}

impl Quote {
    /// Calculates a new [`Quote`] for the provided number of `nights`.
    ///
    /// [`None`] is returned on overflow.
    #[must_use]
    pub fn new(price: Money, nights: u32, service_fee: Money) -> Option<Self> {
        let subtotal = price.checked_mul(u64::from(nights))?;
        Some(Self {
            nights,
            price,
            subtotal,
            service_fee,
            total: subtotal.checked_add(service_fee)?,
        })
    }
}

#[cfg(test)]
mod spec {
    use common::Money;

    use super::{Guests, Quote};

    #[test]
    fn quotes() {
        let quote =
            Quote::new(Money::new(180_000), 5, Money::new(65_000)).unwrap();
        assert_eq!(quote.subtotal, Money::new(900_000));
        assert_eq!(quote.total, Money::new(965_000));

        assert!(Quote::new(Money::new(u64::MAX), 2, Money::ZERO).is_none());
        assert!(Quote::new(Money::new(u64::MAX), 1, Money::new(1)).is_none());
    }

    #[test]
    fn guests_are_positive() {
        assert!(Guests::new(0).is_none());
        assert_eq!(Guests::new(3).map(u8::from), Some(3));
    }
}
