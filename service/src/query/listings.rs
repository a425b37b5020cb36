//! [`Query`] collection related to multiple [`Listing`]s.

use std::{convert::Infallible, sync::Arc};

use common::{
    operations::{By, Select},
    Rating,
};
use itertools::Itertools as _;
use tracing as log;

use crate::{domain::Listing, infra::Catalog, read::SearchCriteria, Service};

use super::{CatalogQuery, Query};

/// Queries all the [`Listing`]s in their catalog order.
pub type All = CatalogQuery<By<Arc<[Listing]>, ()>>;

/// [`Query`] searching [`Listing`]s matching the [`SearchCriteria`].
///
/// Found [`Listing`]s keep their catalog order.
#[derive(Clone, Debug)]
pub struct Search(pub SearchCriteria);

impl<Cat> Query<Search> for Service<Cat>
where
    Cat: Catalog<
        Select<By<Arc<[Listing]>, ()>>,
        Ok = Arc<[Listing]>,
        Err = Infallible,
    >,
{
    type Ok = Vec<Listing>;
    type Err = Infallible;

    fn execute(
        &self,
        Search(criteria): Search,
    ) -> Result<Self::Ok, Self::Err> {
        let catalog = self.catalog().execute(Select(By::new(())))?;
        Ok(search(&catalog, &criteria, self.config().popular_rating))
    }
}

/// Narrows the `catalog` down to the [`Listing`]s matching the `criteria`.
///
/// Every stage narrows the output of the previous one, so all the stages
/// are combined with a logical AND:
/// 1. nothing is found while the stay dates are invalid;
/// 2. any of the destination terms must be a part of the title or the
///    description;
/// 3. the price must be within the inclusive bounds;
/// 4. every selected feature must be offered;
/// 5. only listings rated at least `popular_rating` pass, if requested.
#[must_use]
pub fn search(
    catalog: &[Listing],
    criteria: &SearchCriteria,
    popular_rating: Rating,
) -> Vec<Listing> {
    if !criteria.dates_valid {
        log::warn!("skipping search over invalid stay dates");
        return Vec::new();
    }

    let mut found = catalog.to_vec();
    by_destination(&mut found, criteria);
    by_price(&mut found, criteria);
    by_features(&mut found, criteria);
    by_popularity(&mut found, criteria, popular_rating);

    log::debug!(
        destination = %criteria.destination.terms().join(" "),
        min_price = %criteria.min_price,
        max_price = %criteria.max_price,
        features = %criteria.features.iter().join(","),
        popular = criteria.popular,
        found = found.len(),
        "searched {} listings",
        catalog.len(),
    );

    found
}

fn by_destination(found: &mut Vec<Listing>, criteria: &SearchCriteria) {
    if criteria.destination.is_empty() {
        return;
    }
    found.retain(|l| l.mentions_any(criteria.destination.terms()));
}

fn by_price(found: &mut Vec<Listing>, criteria: &SearchCriteria) {
    let bounds = criteria.min_price..=criteria.max_price;
    found.retain(|l| bounds.contains(&l.price));
}

fn by_features(found: &mut Vec<Listing>, criteria: &SearchCriteria) {
    if criteria.features.is_empty() {
        return;
    }
    found.retain(|l| l.features.includes_all(&criteria.features));
}

fn by_popularity(
    found: &mut Vec<Listing>,
    criteria: &SearchCriteria,
    popular_rating: Rating,
) {
    if !criteria.popular {
        return;
    }
    found.retain(|l| l.is_rated_at_least(popular_rating));
}
