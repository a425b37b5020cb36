//! [`Listing`]-related read definitions.

use common::Money;

use crate::domain::listing::Features;
#[cfg(doc)]
use crate::domain::Listing;

/// Everything a search over [`Listing`]s is narrowed by.
///
/// Rebuilt from the current UI state before every search.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SearchCriteria {
    /// [`Destination`] to look for.
    pub destination: Destination,

    /// Minimum nightly price, inclusive.
    pub min_price: Money,

    /// Maximum nightly price, inclusive.
    ///
    /// Expected to be not less than the [`SearchCriteria::min_price`].
    pub max_price: Money,

    /// [`Features`] every found [`Listing`] must offer.
    pub features: Features,

    /// Indicator whether only popular [`Listing`]s should be found.
    pub popular: bool,

    /// Indicator whether the chosen stay dates are valid.
    ///
    /// Nothing is found for invalid dates.
    pub dates_valid: bool,
}

/// Free-text destination split into lowercase search terms.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Destination(Vec<String>);

impl Destination {
    /// Creates a new [`Destination`] out of the provided free `text`.
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self(text.split_whitespace().map(str::to_lowercase).collect())
    }

    /// Returns lowercase terms of this [`Destination`].
    #[must_use]
    pub fn terms(&self) -> &[String] {
        &self.0
    }

    /// Indicates whether this [`Destination`] has no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
