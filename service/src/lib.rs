//! Service contains the business logic of the application.
//!
//! List of available Cargo features:
#![doc = document_features::document_features!()]
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod command;
pub mod domain;
pub mod home;
pub mod infra;
pub mod query;
pub mod read;

use std::num::NonZeroUsize;

use common::{Money, Rating};
use smart_default::SmartDefault;
// Used in `define_kind!` expansions.
use strum as _;

use self::domain::PriceRange;
#[cfg(doc)]
use self::{domain::Listing, infra::Catalog};

pub use self::{command::Command, home::Home, query::Query};

/// [`Service`] configuration.
#[derive(Clone, Copy, Debug, SmartDefault)]
pub struct Config {
    /// Number of [`Listing`]s on a single page.
    #[default(NonZeroUsize::MIN.saturating_add(7))]
    pub page_size: NonZeroUsize,

    /// Fee charged on top of every reservation.
    #[default(Money::new(65_000))]
    pub service_fee: Money,

    /// Lowest [`Rating`] of a popular [`Listing`].
    #[default(Rating::from_hundredths(480))]
    pub popular_rating: Rating,

    /// Bounds and initial selection of the searched prices.
    pub price: PriceRange,
}

/// Domain service.
#[derive(Clone, Debug)]
pub struct Service<Cat> {
    /// Configuration of this [`Service`].
    config: Config,

    /// [`Catalog`] of this [`Service`].
    catalog: Cat,
}

impl<Cat> Service<Cat> {
    /// Creates a new [`Service`] with the provided parameters.
    #[must_use]
    pub fn new(config: Config, catalog: Cat) -> Self {
        Self { config, catalog }
    }

    /// Returns [`Config`] of this [`Service`].
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns [`Catalog`] of this [`Service`].
    #[must_use]
    pub fn catalog(&self) -> &Cat {
        &self.catalog
    }
}
