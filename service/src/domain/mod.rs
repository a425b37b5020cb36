//! Domain definitions.

pub mod filter;
pub mod listing;
pub mod price_range;
pub mod reservation;
pub mod stay;
pub mod user;

pub use self::{
    filter::{Filter, Filters},
    listing::Listing,
    price_range::PriceRange,
    reservation::Reservation,
    stay::Stay,
    user::User,
};
