//! [`Home`] page controller.

use std::{convert::Infallible, sync::Arc};

use common::{
    operations::{By, Select},
    Date, Money, Pagination,
};
use tracing as log;

use crate::{
    domain::{
        filter,
        price_range::Handle,
        stay::{self, CheckIn, CheckOut},
        Filters, Listing, PriceRange, Stay,
    },
    infra::Catalog,
    query::Search,
    read::{listing::Destination, SearchCriteria},
    Service,
};

/// State of the home page, where [`Listing`]s are searched.
///
/// Every input change reruns the search, rewinding to the first page.
#[derive(Debug)]
pub struct Home<Cat>
where
    Cat: Catalog<
        Select<By<Arc<[Listing]>, ()>>,
        Ok = Arc<[Listing]>,
        Err = Infallible,
    >,
{
    /// [`Service`] performing the search.
    service: Service<Cat>,

    /// Date the [`Home`] page was opened on.
    today: Date,

    /// Destination text as typed.
    destination: String,

    /// Selected [`PriceRange`].
    price: PriceRange,

    /// Registry of [`Filters`].
    filters: Filters,

    /// Chosen [`Stay`].
    stay: Stay,

    /// [`Pagination`] over the found [`Listing`]s.
    pagination: Pagination,

    /// Found [`Listing`]s.
    found: Vec<Listing>,

    /// Indicator whether the navigation dropdown is open.
    dropdown_open: bool,

    /// [`Handle`] being dragged, if any.
    dragging: Option<Handle>,
}

impl<Cat> Home<Cat>
where
    Cat: Catalog<
        Select<By<Arc<[Listing]>, ()>>,
        Ok = Arc<[Listing]>,
        Err = Infallible,
    >,
{
    /// Creates a new [`Home`] page for a single-night [`Stay`] starting
    /// `today`, and runs the initial search.
    #[must_use]
    pub fn new(service: Service<Cat>, today: Date) -> Self {
        let config = *service.config();
        let mut home = Self {
            service,
            today,
            destination: String::new(),
            price: config.price,
            filters: Filters::default(),
            stay: Stay::starting(today),
            pagination: Pagination::new(config.page_size),
            found: Vec::new(),
            dropdown_open: false,
            dragging: None,
        };
        home.search();
        home
    }

    /// Builds [`SearchCriteria`] out of the current state.
    #[must_use]
    pub fn criteria(&self) -> SearchCriteria {
        SearchCriteria {
            destination: Destination::new(&self.destination),
            min_price: self.price.min(),
            max_price: self.price.max(),
            features: self.filters.active_features(),
            popular: self.filters.popular(),
            dates_valid: self.stay.is_valid(),
        }
    }

    /// Reruns the search and rewinds to the first page.
    pub fn search(&mut self) {
        self.found = self
            .service
            .execute(Search(self.criteria()))
            .unwrap_or_else(|e| match e {});
        self.pagination.reset(self.found.len());
    }

    /// Changes the destination text.
    pub fn set_destination(&mut self, text: impl Into<String>) {
        self.destination = text.into();
        self.search();
    }

    /// Flips the [`Filter`] of the provided [`filter::Kind`].
    ///
    /// Returns the new state of the [`Filter`], or [`None`] if there is no
    /// such [`Filter`].
    ///
    /// [`Filter`]: crate::domain::Filter
    pub fn toggle_filter(&mut self, kind: filter::Kind) -> Option<bool> {
        let active = self.filters.toggle(kind)?;
        log::debug!(filter = %kind, active, "toggled `Filter`");
        self.search();
        Some(active)
    }

    /// Changes the [`CheckIn`] date.
    ///
    /// Dates before [`Home::min_check_in()`] are raised to it.
    pub fn set_check_in(&mut self, date: CheckIn) {
        self.stay.set_check_in(date.max(self.min_check_in()));
        self.search();
    }

    /// Changes the [`CheckOut`] date.
    pub fn set_check_out(&mut self, date: CheckOut) {
        self.stay.set_check_out(date);
        self.search();
    }

    /// Changes the minimum price, keeping the [`PriceRange`] invariants.
    pub fn set_min_price(&mut self, value: Money) {
        self.price.set_min(value);
        self.search();
    }

    /// Changes the maximum price, keeping the [`PriceRange`] invariants.
    pub fn set_max_price(&mut self, value: Money) {
        self.price.set_max(value);
        self.search();
    }

    /// Handles a click at the `fraction` of the price slider track.
    pub fn click_track(&mut self, fraction: f64) -> Handle {
        let handle = self.price.click(fraction);
        self.search();
        handle
    }

    /// Starts dragging the provided [`Handle`] of the price slider.
    ///
    /// Pointer input stays captured until the returned [`Drag`] is dropped.
    pub fn start_drag(&mut self, handle: Handle) -> Drag<'_, Cat> {
        self.dragging = Some(handle);
        Drag { home: self, handle }
    }

    /// Switches to the provided `page`, ignoring non-existent pages.
    pub fn change_page(&mut self, page: usize) -> bool {
        self.pagination.change_page(page)
    }

    /// Flips the navigation dropdown.
    pub fn toggle_dropdown(&mut self) {
        self.dropdown_open = !self.dropdown_open;
    }

    /// Closes the navigation dropdown.
    pub fn close_dropdown(&mut self) {
        self.dropdown_open = false;
    }

    /// Indicates whether the navigation dropdown is open.
    #[must_use]
    pub fn is_dropdown_open(&self) -> bool {
        self.dropdown_open
    }

    /// Returns the [`Handle`] being dragged, if any.
    #[must_use]
    pub fn dragging(&self) -> Option<Handle> {
        self.dragging
    }

    /// Returns the destination text as typed.
    #[must_use]
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Returns the selected [`PriceRange`].
    #[must_use]
    pub fn price(&self) -> &PriceRange {
        &self.price
    }

    /// Returns the registry of [`Filters`].
    #[must_use]
    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    /// Returns the chosen [`Stay`].
    #[must_use]
    pub fn stay(&self) -> &Stay {
        &self.stay
    }

    /// Returns the earliest selectable [`CheckIn`] date.
    #[must_use]
    pub fn min_check_in(&self) -> CheckIn {
        self.today.coerce()
    }

    /// Returns the error of the chosen [`Stay`], if any.
    #[must_use]
    pub fn date_error(&self) -> Option<stay::Error> {
        self.stay.error()
    }

    /// Returns all the found [`Listing`]s.
    #[must_use]
    pub fn found(&self) -> &[Listing] {
        &self.found
    }

    /// Returns the found [`Listing`]s on the current page.
    #[must_use]
    pub fn page(&self) -> &[Listing] {
        self.pagination.slice(&self.found)
    }

    /// Returns the [`Pagination`] over the found [`Listing`]s.
    #[must_use]
    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }
}

/// Captured pointer input dragging a price slider [`Handle`].
///
/// Dropping releases the capture and reruns the search.
#[derive(Debug)]
pub struct Drag<'h, Cat>
where
    Cat: Catalog<
        Select<By<Arc<[Listing]>, ()>>,
        Ok = Arc<[Listing]>,
        Err = Infallible,
    >,
{
    /// [`Home`] page being dragged on.
    home: &'h mut Home<Cat>,

    /// Dragged [`Handle`].
    handle: Handle,
}

impl<Cat> Drag<'_, Cat>
where
    Cat: Catalog<
        Select<By<Arc<[Listing]>, ()>>,
        Ok = Arc<[Listing]>,
        Err = Infallible,
    >,
{
    /// Moves the dragged [`Handle`] to the `fraction` of the slider track.
    pub fn move_to(&mut self, fraction: f64) {
        self.home.price.drag(self.handle, fraction);
    }

    /// Returns the dragged [`Handle`].
    #[must_use]
    pub fn handle(&self) -> Handle {
        self.handle
    }

    /// Returns the current price of the dragged [`Handle`].
    #[must_use]
    pub fn value(&self) -> Money {
        self.home.price.get(self.handle)
    }
}

impl<Cat> Drop for Drag<'_, Cat>
where
    Cat: Catalog<
        Select<By<Arc<[Listing]>, ()>>,
        Ok = Arc<[Listing]>,
        Err = Infallible,
    >,
{
    fn drop(&mut self) {
        self.home.dragging = None;
        self.home.search();
    }
}

#[cfg(all(test, feature = "seed"))]
mod spec {
    use common::{Date, Money};
    use time::macros::date;

    use crate::{
        domain::{filter::Kind, listing::Feature, price_range::Handle, stay},
        infra::Memory,
        Config, Service,
    };

    use super::Home;

    fn home() -> Home<Memory> {
        Home::new(
            Service::new(Config::default(), Memory::default()),
            Date::from(date!(2025 - 08 - 10)),
        )
    }

    fn ids(home: &Home<Memory>) -> Vec<u32> {
        home.found().iter().map(|l| u32::from(l.id)).collect()
    }

    #[test]
    fn starts_with_popular_filter() {
        let home = home();
        assert_eq!(ids(&home), [1, 2, 3, 5]);
        assert_eq!(home.stay().check_out().to_string(), "2025-08-11");
        assert_eq!(home.min_check_in().to_string(), "2025-08-10");
        assert_eq!(home.pagination().total_pages(), 1);
        assert_eq!(home.page().len(), 4);
    }

    #[test]
    fn reruns_search_on_filter_toggle() {
        let mut home = home();
        assert_eq!(home.toggle_filter(Kind::Popular), Some(false));
        assert_eq!(ids(&home), [1, 2, 3, 4, 5]);

        assert_eq!(home.toggle_filter(Feature::Kitchen.into()), Some(true));
        assert_eq!(ids(&home), [2, 4, 5]);
    }

    #[test]
    fn reruns_search_on_destination_change() {
        let mut home = home();
        home.set_destination("Medellin Antioquia");
        assert_eq!(ids(&home), [3]);

        home.set_destination("");
        assert_eq!(ids(&home), [1, 2, 3, 5]);
    }

    #[test]
    fn invalid_stay_empties_result() {
        let mut home = home();
        home.set_check_out(date!(2025 - 08 - 10).into());
        assert_eq!(home.date_error(), Some(stay::Error::ZeroNightStay));
        assert!(home.found().is_empty());
        assert_eq!(home.pagination().total_pages(), 0);
        assert!(!home.change_page(1));

        home.set_check_out(date!(2025 - 08 - 12).into());
        assert_eq!(home.date_error(), None);
        assert_eq!(ids(&home), [1, 2, 3, 5]);
    }

    #[test]
    fn check_in_change_advances_check_out() {
        let mut home = home();
        home.set_check_in(date!(2025 - 09 - 01).into());
        assert_eq!(home.stay().check_out().to_string(), "2025-09-02");
        assert_eq!(home.date_error(), None);
        assert_eq!(ids(&home), [1, 2, 3, 5]);
    }

    #[test]
    fn raises_past_check_in_to_today() {
        let mut home = home();
        home.set_check_in(date!(2025 - 08 - 01).into());
        assert_eq!(home.stay().check_in().to_string(), "2025-08-10");
        assert_eq!(home.stay().check_out().to_string(), "2025-08-11");
        assert_eq!(home.date_error(), None);
    }

    #[test]
    fn drag_reruns_search_once_released() {
        let mut home = home();
        {
            let mut drag = home.start_drag(Handle::Max);
            drag.move_to(0.2);
            assert_eq!(drag.value(), Money::new(200_000));
            drag.move_to(0.17);
            assert_eq!(drag.handle(), Handle::Max);
        }
        assert_eq!(home.dragging(), None);
        assert_eq!(home.price().max(), Money::new(170_000));
        assert_eq!(ids(&home), [1]);
    }

    #[test]
    fn drag_keeps_gap() {
        let mut home = home();
        {
            let mut drag = home.start_drag(Handle::Min);
            drag.move_to(0.9);
        }
        assert_eq!(home.price().min(), Money::new(490_000));
        assert!(home.found().is_empty());
    }

    #[test]
    fn track_click_moves_nearest_handle() {
        let mut home = home();
        assert_eq!(home.click_track(0.16), Handle::Min);
        assert_eq!(home.price().min(), Money::new(160_000));
        assert_eq!(ids(&home), [2, 3, 5]);
    }

    #[test]
    fn price_bounds_keep_gap() {
        let mut home = home();
        home.set_min_price(Money::new(170_000));
        home.set_max_price(Money::new(100_000));
        assert_eq!(home.price().max(), Money::new(180_000));
        assert_eq!(ids(&home), [3]);
    }

    #[test]
    fn toggles_dropdown() {
        let mut home = home();
        assert!(!home.is_dropdown_open());
        home.toggle_dropdown();
        assert!(home.is_dropdown_open());
        home.close_dropdown();
        assert!(!home.is_dropdown_open());
    }
}
