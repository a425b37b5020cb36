//! [`Listing`] definitions.

use std::collections::{btree_set, BTreeSet};

use common::{define_kind, Money, Rating};
use derive_more::{AsRef, Display, From, FromStr, Into};

/// Property offered for rent.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Listing {
    /// ID of this [`Listing`].
    pub id: Id,

    /// [`Title`] of this [`Listing`].
    pub title: Title,

    /// [`Location`] of this [`Listing`].
    pub location: Location,

    /// [`Description`] of this [`Listing`].
    pub description: Description,

    /// Price of a single night in this [`Listing`].
    pub price: Money,

    /// [`Rating`] of this [`Listing`] given by its guests.
    pub rating: Rating,

    /// [`Image`] representing this [`Listing`].
    pub image: Image,

    /// [`Features`] this [`Listing`] offers.
    pub features: Features,

    /// [`Capacity`] of this [`Listing`].
    pub capacity: Capacity,

    /// [`Review`]s left by former guests, newest first.
    pub reviews: Vec<Review>,

    /// Indicator whether this [`Listing`] is available for booking.
    pub available: bool,
}

impl Listing {
    /// Indicates whether any of the provided lowercase `terms` is a part of
    /// this [`Listing`]'s [`Title`] or [`Description`].
    #[must_use]
    pub fn mentions_any<T: AsRef<str>>(&self, terms: &[T]) -> bool {
        let title = self.title.as_ref().to_lowercase();
        let description = self.description.as_ref().to_lowercase();
        terms.iter().any(|term| {
            let term = term.as_ref();
            title.contains(term) || description.contains(term)
        })
    }

    /// Indicates whether this [`Listing`] is rated at least `threshold`.
    #[must_use]
    pub fn is_rated_at_least(&self, threshold: Rating) -> bool {
        self.rating >= threshold
    }
}

/// ID of a [`Listing`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
)]
pub struct Id(u32);

/// Title of a [`Listing`].
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(str)]
pub struct Title(String);

impl Title {
    /// Creates a new [`Title`] if the given `title` is valid.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Option<Self> {
        let title = title.into();
        Self::check(&title).then_some(Self(title))
    }

    /// Checks whether the given `title` is a valid [`Title`].
    fn check(title: impl AsRef<str>) -> bool {
        let title = title.as_ref();
        title.trim() == title && !title.is_empty() && title.len() <= 256
    }
}

impl FromStr for Title {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Title`")
    }
}

/// Description of a [`Listing`].
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(str)]
pub struct Description(String);

impl Description {
    /// Creates a new [`Description`] if the given `description` is valid.
    #[must_use]
    pub fn new(description: impl Into<String>) -> Option<Self> {
        let description = description.into();
        Self::check(&description).then_some(Self(description))
    }

    /// Checks whether the given `description` is a valid [`Description`].
    fn check(description: impl AsRef<str>) -> bool {
        let description = description.as_ref();
        description.trim() == description && description.len() <= 4096
    }
}

impl FromStr for Description {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Description`")
    }
}

/// City and country a [`Listing`] is located in.
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(str)]
pub struct Location(String);

impl Location {
    /// Creates a new [`Location`] if the given `location` is valid.
    #[must_use]
    pub fn new(location: impl Into<String>) -> Option<Self> {
        let location = location.into();
        Self::check(&location).then_some(Self(location))
    }

    /// Checks whether the given `location` is a valid [`Location`].
    fn check(location: impl AsRef<str>) -> bool {
        let location = location.as_ref();
        location.trim() == location
            && !location.is_empty()
            && location.len() <= 256
    }
}

impl FromStr for Location {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Location`")
    }
}

/// Opaque reference to an image of a [`Listing`].
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(str)]
pub struct Image(String);

impl Image {
    /// Creates a new [`Image`] if the given `image` reference is not empty.
    #[must_use]
    pub fn new(image: impl Into<String>) -> Option<Self> {
        let image = image.into();
        (!image.trim().is_empty()).then_some(Self(image))
    }
}

define_kind! {
    #[doc = "Amenity a [`Listing`] may offer."]
    enum Feature {
        #[doc = "Wireless internet access."]
        Wifi = 1,

        #[doc = "Swimming pool."]
        Pool = 2,

        #[doc = "Pets are allowed."]
        Pets = 3,

        #[doc = "Air conditioning."]
        Ac = 4,

        #[doc = "Equipped kitchen."]
        Kitchen = 5,

        #[doc = "Parking place."]
        Parking = 6,
    }
}

/// How many people a [`Listing`] hosts and how.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Capacity {
    /// Maximum number of guests.
    pub guests: u8,

    /// Number of bedrooms.
    pub bedrooms: u8,

    /// Number of beds.
    pub beds: u8,

    /// Number of bathrooms.
    pub bathrooms: u8,
}

impl Capacity {
    /// Indicates whether the provided number of `guests` fits.
    #[must_use]
    pub fn fits(&self, guests: u8) -> bool {
        guests <= self.guests
    }
}

/// Guest review of a [`Listing`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Review {
    /// Name of the reviewing guest.
    pub author: String,

    /// Month of the stay, as shown to guests (`Agosto 2025`).
    pub date: String,

    /// Review text.
    pub comment: String,

    /// Avatar [`Image`] of the reviewing guest.
    pub avatar: Image,
}

/// Set of [`Feature`]s.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Features(BTreeSet<Feature>);

impl Features {
    /// Indicates whether these [`Features`] are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Indicates whether the provided [`Feature`] is a part of these
    /// [`Features`].
    #[must_use]
    pub fn contains(&self, feature: Feature) -> bool {
        self.0.contains(&feature)
    }

    /// Indicates whether every one of the `other` [`Features`] is a part of
    /// these [`Features`].
    #[must_use]
    pub fn includes_all(&self, other: &Self) -> bool {
        self.0.is_superset(&other.0)
    }

    /// Iterates over these [`Features`] in their declaration order.
    pub fn iter(&self) -> impl Iterator<Item = Feature> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Feature> for Features {
    fn from_iter<I: IntoIterator<Item = Feature>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[Feature; N]> for Features {
    fn from(features: [Feature; N]) -> Self {
        features.into_iter().collect()
    }
}

impl IntoIterator for Features {
    type Item = Feature;
    type IntoIter = btree_set::IntoIter<Feature>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
