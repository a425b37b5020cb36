//! [`Memory`] [`Catalog`] implementation.

use std::{collections::HashSet, convert::Infallible, sync::Arc};

use common::operations::{By, Select};

use crate::domain::{listing, Listing};

use super::{Catalog, Error};

/// In-memory [`Catalog`] of immutable [`Listing`]s.
///
/// Cloning is cheap and shares the same [`Listing`]s.
#[derive(Clone, Debug)]
pub struct Memory {
    /// [`Listing`]s in their catalog order.
    listings: Arc<[Listing]>,
}

impl Memory {
    /// Creates a new [`Memory`] [`Catalog`] out of the provided [`Listing`]s,
    /// preserving their order.
    ///
    /// # Errors
    ///
    /// Errors if any [`listing::Id`] repeats.
    pub fn new(listings: Vec<Listing>) -> Result<Self, Error> {
        let mut ids = HashSet::with_capacity(listings.len());
        if let Some(dup) = listings.iter().find(|l| !ids.insert(l.id)) {
            return Err(Error::DuplicateId(dup.id));
        }
        Ok(Self {
            listings: listings.into(),
        })
    }

    /// Returns the number of [`Listing`]s in this [`Memory`] [`Catalog`].
    #[must_use]
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    /// Indicates whether this [`Memory`] [`Catalog`] has no [`Listing`]s.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

impl Catalog<Select<By<Arc<[Listing]>, ()>>> for Memory {
    type Ok = Arc<[Listing]>;
    type Err = Infallible;

    fn execute(
        &self,
        _: Select<By<Arc<[Listing]>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(Arc::clone(&self.listings))
    }
}

impl Catalog<Select<By<Option<Listing>, listing::Id>>> for Memory {
    type Ok = Option<Listing>;
    type Err = Infallible;

    fn execute(
        &self,
        Select(by): Select<By<Option<Listing>, listing::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        Ok(self.listings.iter().find(|l| l.id == id).cloned())
    }
}

#[cfg(test)]
mod spec {
    use std::sync::Arc;

    use common::{
        operations::{By, Select},
        Money, Rating,
    };

    use crate::domain::{
        listing::{Capacity, Description, Features, Id, Image, Location, Title},
        Listing,
    };

    use super::{Catalog as _, Error, Memory};

    fn listing(id: u32, title: &str) -> Listing {
        Listing {
            id: Id::from(id),
            title: Title::new(title).unwrap(),
            location: Location::new("Colombia").unwrap(),
            description: Description::new("").unwrap(),
            price: Money::new(100_000),
            rating: Rating::MAX,
            image: Image::new("image.jpg").unwrap(),
            features: Features::default(),
            capacity: Capacity {
                guests: 2,
                bedrooms: 1,
                beds: 1,
                bathrooms: 1,
            },
            reviews: Vec::new(),
            available: true,
        }
    }

    #[test]
    fn rejects_duplicated_ids() {
        assert_eq!(
            Memory::new(vec![listing(1, "A"), listing(2, "B"), listing(1, "C")])
                .unwrap_err(),
            Error::DuplicateId(Id::from(1)),
        );
    }

    #[test]
    fn selects_in_catalog_order() {
        let catalog =
            Memory::new(vec![listing(3, "C"), listing(1, "A"), listing(2, "B")])
                .unwrap();
        let all = catalog
            .execute(Select(By::<Arc<[Listing]>, _>::new(())))
            .unwrap();
        assert_eq!(
            all.iter().map(|l| u32::from(l.id)).collect::<Vec<_>>(),
            [3, 1, 2],
        );
    }

    #[test]
    fn selects_by_id() {
        let catalog = Memory::new(vec![listing(1, "A"), listing(2, "B")]).unwrap();

        let found = catalog
            .execute(Select(By::<Option<Listing>, _>::new(Id::from(2))))
            .unwrap();
        assert_eq!(found.map(|l| l.title.to_string()), Some("B".to_owned()));

        let missing = catalog
            .execute(Select(By::<Option<Listing>, _>::new(Id::from(9))))
            .unwrap();
        assert!(missing.is_none());
    }
}
