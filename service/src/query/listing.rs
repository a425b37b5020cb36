//! [`Query`] collection related to a single [`Listing`].

use common::operations::By;

use crate::domain::{listing, Listing};
#[cfg(doc)]
use crate::Query;

use super::CatalogQuery;

/// Queries a [`Listing`] by its [`listing::Id`].
pub type ById = CatalogQuery<By<Option<Listing>, listing::Id>>;

#[cfg(all(test, feature = "seed"))]
mod spec {
    use crate::{
        domain::listing,
        infra::Memory,
        Config, Query as _, Service,
    };

    use super::ById;

    #[test]
    fn finds_listing_by_id() {
        let service = Service::new(Config::default(), Memory::default());

        let found = service.execute(ById::by(listing::Id::from(3))).unwrap();
        assert_eq!(
            found.map(|l| l.title.to_string()),
            Some("Medellín, Antioquia".to_owned()),
        );

        let missing = service.execute(ById::by(listing::Id::from(42))).unwrap();
        assert!(missing.is_none());
    }
}
