//! [`Config`]-related definitions.

use std::num::NonZeroUsize;

use common::{Money, Rating};
use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use derive_more::{Display, Error, From};
use serde::Deserialize;
use service::{
    domain::{
        listing::{self, Description, Feature, Image, Location, Title},
        price_range, PriceRange,
    },
    infra::{catalog, Memory},
};
use smart_default::SmartDefault;

/// Application configuration.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    /// Service configuration.
    #[serde(default)]
    pub service: Service,

    /// Listings to search over, instead of the built-in ones.
    #[serde(default)]
    pub catalog: Option<Vec<Listing>>,

    /// Log configuration.
    #[serde(default)]
    pub log: Log,
}

impl Config {
    /// Creates a new [`Config`] by:
    /// - loading it from the provided `path` (if any);
    /// - merging it with the environment variables (if any);
    /// - using default values for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(path: impl AsRef<str>) -> Result<Self, ConfigError> {
        ConfigBuilder::<DefaultState>::default()
            .add_source(config::File::with_name(path.as_ref()).required(false))
            .add_source(config::Environment::with_prefix("CONF").separator("."))
            .build()?
            .try_deserialize()
    }
}

/// Service configuration.
#[derive(Clone, Copy, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Service {
    /// Number of listings on a single page.
    #[default(8)]
    pub page_size: usize,

    /// Fee charged on top of every reservation.
    #[default(65_000)]
    pub service_fee: u64,

    /// Lowest rating of a popular listing.
    #[default(4.8)]
    pub popular_rating: f64,

    /// Price slider configuration.
    pub price: Price,
}

impl TryFrom<Service> for service::Config {
    type Error = ServiceError;

    fn try_from(value: Service) -> Result<Self, Self::Error> {
        let Service {
            page_size,
            service_fee,
            popular_rating,
            price,
        } = value;

        Ok(Self {
            page_size: NonZeroUsize::new(page_size)
                .ok_or(ServiceError::ZeroPageSize)?,
            service_fee: Money::new(service_fee),
            popular_rating: Rating::try_from(popular_rating)
                .map_err(|_| ServiceError::InvalidRating)?,
            price: price.try_into()?,
        })
    }
}

/// Price slider configuration.
#[derive(Clone, Copy, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Price {
    /// Lowest selectable price.
    #[default(0)]
    pub lower: u64,

    /// Highest selectable price.
    #[default(1_000_000)]
    pub upper: u64,

    /// Initially selected minimum price.
    #[default(50_000)]
    pub min: u64,

    /// Initially selected maximum price.
    #[default(500_000)]
    pub max: u64,

    /// Minimal distance between the selected prices.
    #[default(10_000)]
    pub gap: u64,
}

impl TryFrom<Price> for PriceRange {
    type Error = price_range::Error;

    fn try_from(value: Price) -> Result<Self, Self::Error> {
        let Price {
            lower,
            upper,
            min,
            max,
            gap,
        } = value;

        Self::new(
            Money::new(lower),
            Money::new(upper),
            Money::new(min),
            Money::new(max),
            Money::new(gap),
        )
    }
}

/// Error of converting [`Service`] configuration.
#[derive(Clone, Copy, Debug, Display, Error, From)]
pub enum ServiceError {
    /// `page_size` is zero.
    #[display("`service.page_size` must be positive")]
    #[from(ignore)]
    ZeroPageSize,

    /// `popular_rating` is not within `0..=5`.
    #[display("`service.popular_rating` must be within `0..=5`")]
    #[from(ignore)]
    InvalidRating,

    /// Price slider configuration is inconsistent.
    #[display("`service.price` is inconsistent: {_0}")]
    Price(price_range::Error),
}

/// Listing of the catalog.
#[derive(Clone, Debug, Deserialize)]
pub struct Listing {
    /// ID of the listing.
    pub id: u32,

    /// Title of the listing.
    pub title: String,

    /// City and country of the listing.
    pub location: String,

    /// Description of the listing.
    #[serde(default)]
    pub description: String,

    /// Price of a single night.
    pub price: u64,

    /// Rating within `0..=5`.
    pub rating: f64,

    /// Image reference.
    pub image: String,

    /// Feature tags, like `wifi` or `pool`.
    #[serde(default)]
    pub features: Vec<String>,

    /// Capacity of the listing.
    #[serde(default)]
    pub capacity: Capacity,

    /// Guest reviews, newest first.
    #[serde(default)]
    pub reviews: Vec<Review>,

    /// Indicator whether the listing is available for booking.
    #[serde(default = "available")]
    pub available: bool,
}

/// Default value of [`Listing::available`].
const fn available() -> bool {
    true
}

/// Capacity of a [`Listing`].
#[derive(Clone, Copy, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Capacity {
    /// Maximum number of guests.
    #[default(2)]
    pub guests: u8,

    /// Number of bedrooms.
    #[default(1)]
    pub bedrooms: u8,

    /// Number of beds.
    #[default(1)]
    pub beds: u8,

    /// Number of bathrooms.
    #[default(1)]
    pub bathrooms: u8,
}

impl From<Capacity> for listing::Capacity {
    fn from(value: Capacity) -> Self {
        let Capacity {
            guests,
            bedrooms,
            beds,
            bathrooms,
        } = value;
        Self {
            guests,
            bedrooms,
            beds,
            bathrooms,
        }
    }
}

/// Guest review of a [`Listing`].
#[derive(Clone, Debug, Deserialize)]
pub struct Review {
    /// Name of the reviewing guest.
    pub author: String,

    /// Month of the stay, like `Agosto 2025`.
    pub date: String,

    /// Review text.
    pub comment: String,

    /// Avatar image reference.
    pub avatar: String,
}

impl TryFrom<Listing> for service::domain::Listing {
    type Error = ListingError;

    fn try_from(value: Listing) -> Result<Self, Self::Error> {
        use ListingError as E;

        let Listing {
            id,
            title,
            location,
            description,
            price,
            rating,
            image,
            features,
            capacity,
            reviews,
            available,
        } = value;
        let id = listing::Id::from(id);

        Ok(Self {
            id,
            title: Title::new(title).ok_or(E::InvalidTitle(id))?,
            location: Location::new(location)
                .ok_or(E::InvalidLocation(id))?,
            description: Description::new(description)
                .ok_or(E::InvalidDescription(id))?,
            price: Money::new(price),
            rating: Rating::try_from(rating)
                .map_err(|_| E::InvalidRating(id))?,
            image: Image::new(image).ok_or(E::InvalidImage(id))?,
            features: features
                .iter()
                .map(|tag| {
                    tag.parse::<Feature>()
                        .map_err(|_| E::UnknownFeature(id, tag.clone()))
                })
                .collect::<Result<_, _>>()?,
            capacity: capacity.into(),
            reviews: reviews
                .into_iter()
                .map(|r| -> Result<_, ListingError> {
                    Ok(listing::Review {
                        author: r.author,
                        date: r.date,
                        comment: r.comment,
                        avatar: Image::new(r.avatar)
                            .ok_or(E::InvalidImage(id))?,
                    })
                })
                .collect::<Result<_, _>>()?,
            available,
        })
    }
}

/// Error of converting a [`Listing`].
#[derive(Clone, Debug, Display, Error)]
pub enum ListingError {
    /// Title is empty or malformed.
    #[display("`Listing(id: {_0})` has invalid title")]
    InvalidTitle(#[error(not(source))] listing::Id),

    /// Location is empty or malformed.
    #[display("`Listing(id: {_0})` has invalid location")]
    InvalidLocation(#[error(not(source))] listing::Id),

    /// Description is malformed.
    #[display("`Listing(id: {_0})` has invalid description")]
    InvalidDescription(#[error(not(source))] listing::Id),

    /// Rating is not within `0..=5`.
    #[display("`Listing(id: {_0})` has rating outside of `0..=5`")]
    InvalidRating(#[error(not(source))] listing::Id),

    /// Image reference of the listing or of its review is empty.
    #[display("`Listing(id: {_0})` has empty image")]
    InvalidImage(#[error(not(source))] listing::Id),

    /// Feature tag is not known.
    #[display("`Listing(id: {_0})` has unknown feature `{_1}`")]
    UnknownFeature(
        #[error(not(source))] listing::Id,
        #[error(not(source))] String,
    ),
}

/// Error of building a [`Memory`] catalog out of the [`Config`].
#[derive(Clone, Debug, Display, Error, From)]
pub enum CatalogError {
    /// Some [`Listing`] is invalid.
    #[display("invalid catalog: {_0}")]
    Listing(ListingError),

    /// [`Listing`]s are inconsistent.
    #[display("invalid catalog: {_0}")]
    Catalog(catalog::Error),
}

/// Builds a [`Memory`] catalog out of the configured [`Listing`]s, or the
/// built-in one if there are none.
///
/// # Errors
///
/// Errors if any of the [`Listing`]s is invalid, or their IDs repeat.
pub fn build_catalog(
    listings: Option<Vec<Listing>>,
) -> Result<Memory, CatalogError> {
    let Some(listings) = listings else {
        return Ok(Memory::default());
    };
    let listings = listings
        .into_iter()
        .map(TryInto::try_into)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Memory::new(listings)?)
}

/// Log configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Log {
    /// Log level.
    pub level: LogLevel,
}

/// Log level.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    /// Designates very low priority, often extremely verbose, information.
    Trace,

    /// Designates lower priority information.
    Debug,

    /// Designates useful information.
    #[default]
    Info,

    /// Designates hazardous situations.
    Warn,

    /// Designates very serious errors.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}
