//! [`Filter`] definitions.

use std::{collections::HashSet, fmt, str::FromStr};

use derive_more::{Display, Error as StdError};

use crate::domain::listing::{Feature, Features};
#[cfg(doc)]
use crate::domain::Listing;

/// User-togglable predicate over [`Listing`]s.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Filter {
    /// Human-readable name of this [`Filter`].
    pub name: String,

    /// Icon reference of this [`Filter`].
    pub icon: String,

    /// Indicator whether this [`Filter`] is currently applied.
    pub active: bool,

    /// [`Kind`] of this [`Filter`].
    pub kind: Kind,
}

impl Filter {
    /// Creates a new inactive [`Filter`].
    #[must_use]
    pub fn new(name: impl Into<String>, icon: impl Into<String>, kind: Kind) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
            active: false,
            kind,
        }
    }

    /// Makes this [`Filter`] active.
    #[must_use]
    pub fn activated(mut self) -> Self {
        self.active = true;
        self
    }
}

/// Kind of a [`Filter`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Kind {
    /// Keeps only highly rated [`Listing`]s.
    Popular,

    /// Keeps only [`Listing`]s offering the [`Feature`].
    Feature(Feature),
}

impl Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Popular => f.write_str("popular"),
            Self::Feature(feature) => write!(f, "{feature}"),
        }
    }
}

impl FromStr for Kind {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "popular" {
            return Ok(Self::Popular);
        }
        s.parse()
            .map(Self::Feature)
            .map_err(|_| "unknown `Filter` kind")
    }
}

impl From<Feature> for Kind {
    fn from(feature: Feature) -> Self {
        Self::Feature(feature)
    }
}

/// Ordered registry of [`Filter`]s.
///
/// Contains exactly one [`Kind::Popular`] [`Filter`] and no duplicated
/// [`Kind`]s.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Filters(Vec<Filter>);

impl Filters {
    /// Creates new [`Filters`] out of the provided ones.
    ///
    /// # Errors
    ///
    /// Errors if any [`Kind`] repeats or the [`Kind::Popular`] one is absent.
    pub fn new(filters: Vec<Filter>) -> Result<Self, Error> {
        let mut seen = HashSet::with_capacity(filters.len());
        for f in &filters {
            if !seen.insert(f.kind) {
                return Err(Error::Duplicate(f.kind));
            }
        }
        if !seen.contains(&Kind::Popular) {
            return Err(Error::NoPopular);
        }
        Ok(Self(filters))
    }

    /// Iterates over these [`Filters`] in their order.
    pub fn iter(&self) -> impl Iterator<Item = &Filter> {
        self.0.iter()
    }

    /// Flips the [`Filter`] of the provided [`Kind`].
    ///
    /// Returns the new state of the [`Filter`], or [`None`] if there is no
    /// such [`Filter`].
    pub fn toggle(&mut self, kind: Kind) -> Option<bool> {
        let filter = self.0.iter_mut().find(|f| f.kind == kind)?;
        filter.active = !filter.active;
        Some(filter.active)
    }

    /// Indicates whether the [`Filter`] of the provided [`Kind`] is active.
    #[must_use]
    pub fn is_active(&self, kind: Kind) -> bool {
        self.0.iter().any(|f| f.kind == kind && f.active)
    }

    /// Indicates whether the [`Kind::Popular`] [`Filter`] is active.
    #[must_use]
    pub fn popular(&self) -> bool {
        self.is_active(Kind::Popular)
    }

    /// Returns all the active [`Feature`]s, ignoring [`Kind::Popular`].
    #[must_use]
    pub fn active_features(&self) -> Features {
        self.0
            .iter()
            .filter(|f| f.active)
            .filter_map(|f| match f.kind {
                Kind::Feature(feature) => Some(feature),
                Kind::Popular => None,
            })
            .collect()
    }
}

impl Default for Filters {
    fn default() -> Self {
        use Feature as F;

        Self(vec![
            Filter::new("Populares", "fas fa-star", Kind::Popular).activated(),
            Filter::new("WiFi", "fas fa-wifi", F::Wifi.into()),
            Filter::new("Piscina", "fas fa-swimming-pool", F::Pool.into()),
            Filter::new("Mascotas", "fas fa-dog", F::Pets.into()),
            Filter::new("Aire Acon.", "fas fa-snowflake", F::Ac.into()),
            Filter::new("Cocina", "fas fa-utensils", F::Kitchen.into()),
            Filter::new("Parking", "fas fa-parking", F::Parking.into()),
        ])
    }
}

/// Error of creating [`Filters`].
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, StdError)]
pub enum Error {
    /// Several [`Filter`]s share the same [`Kind`].
    #[display("`Filter` of `{_0}` kind is declared more than once")]
    Duplicate(#[error(not(source))] Kind),

    /// There is no [`Kind::Popular`] [`Filter`].
    #[display("`popular` `Filter` is missing")]
    NoPopular,
}
