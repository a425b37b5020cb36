//! [`PriceRange`] definitions.

use common::Money;
use derive_more::{Display, Error as StdError};
#[cfg(doc)]
use crate::domain::Listing;

/// Range of nightly [`Listing`] prices chosen with a two-handle slider.
///
/// Keeps `lower <= min`, `min + gap <= max` and `max <= upper`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PriceRange {
    /// Lowest selectable price.
    lower: Money,

    /// Highest selectable price.
    upper: Money,

    /// Currently selected minimum price.
    min: Money,

    /// Currently selected maximum price.
    max: Money,

    /// Minimal distance between the selected minimum and maximum prices.
    gap: Money,
}

impl PriceRange {
    /// Creates a new [`PriceRange`].
    ///
    /// # Errors
    ///
    /// Errors if the provided values violate the [`PriceRange`] invariants.
    pub fn new(
        lower: Money,
        upper: Money,
        min: Money,
        max: Money,
        gap: Money,
    ) -> Result<Self, Error> {
        if lower.checked_add(gap).map_or(true, |l| l > upper) {
            return Err(Error::BoundsTooNarrow);
        }
        if min < lower
            || max > upper
            || min.checked_add(gap).map_or(true, |m| m > max)
        {
            return Err(Error::SelectionOutOfBounds);
        }
        Ok(Self {
            lower,
            upper,
            min,
            max,
            gap,
        })
    }

    /// Returns the lowest selectable price.
    #[must_use]
    pub fn lower(&self) -> Money {
        self.lower
    }

    /// Returns the highest selectable price.
    #[must_use]
    pub fn upper(&self) -> Money {
        self.upper
    }

    /// Returns the currently selected minimum price.
    #[must_use]
    pub fn min(&self) -> Money {
        self.min
    }

    /// Returns the currently selected maximum price.
    #[must_use]
    pub fn max(&self) -> Money {
        self.max
    }

    /// Returns the selected [`Handle`]'s price.
    #[must_use]
    pub fn get(&self, handle: Handle) -> Money {
        match handle {
            Handle::Min => self.min,
            Handle::Max => self.max,
        }
    }

    /// Sets the minimum price, clamping it between the lowest selectable
    /// price and the maximum price minus the gap.
    pub fn set_min(&mut self, value: Money) {
        let ceiling = self.max.amount() - self.gap.amount();
        self.min = Money::new(value.amount().clamp(self.lower.amount(), ceiling));
    }

    /// Sets the maximum price, clamping it between the minimum price plus the
    /// gap and the highest selectable price.
    pub fn set_max(&mut self, value: Money) {
        let floor = self.min.amount() + self.gap.amount();
        self.max = Money::new(value.amount().clamp(floor, self.upper.amount()));
    }

    /// Sets the price of the provided [`Handle`].
    pub fn set(&mut self, handle: Handle, value: Money) {
        match handle {
            Handle::Min => self.set_min(value),
            Handle::Max => self.set_max(value),
        }
    }

    /// Moves the provided [`Handle`] to the `fraction` of the slider track.
    pub fn drag(&mut self, handle: Handle, fraction: f64) {
        self.set(handle, self.value_at(fraction));
    }

    /// Handles a click at the `fraction` of the slider track by moving the
    /// nearest [`Handle`] there.
    ///
    /// Returns the moved [`Handle`].
    pub fn click(&mut self, fraction: f64) -> Handle {
        let value = self.value_at(fraction).amount();
        let to_min = value.abs_diff(self.min.amount());
        let to_max = value.abs_diff(self.max.amount());
        let handle = if to_min < to_max { Handle::Min } else { Handle::Max };
        self.set(handle, Money::new(value));
        handle
    }

    /// Converts the `fraction` of the slider track into a price.
    ///
    /// The `fraction` is clamped into `0.0..=1.0`.
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss,
        reason = "result is within `lower..=upper`"
    )]
    #[must_use]
    pub fn value_at(&self, fraction: f64) -> Money {
        let fraction = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };
        let span = self.span();
        let offset = (fraction * span as f64).round() as u64;
        Money::new(self.lower.amount() + offset.min(span))
    }

    /// Returns the offset of the selected range from the track start, in
    /// percent.
    #[must_use]
    pub fn left(&self) -> f64 {
        self.percent(self.min.amount() - self.lower.amount())
    }

    /// Returns the width of the selected range, in percent of the track.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.percent(self.max.amount() - self.min.amount())
    }

    /// Returns the position of the provided [`Handle`], in percent of the
    /// track.
    #[must_use]
    pub fn position(&self, handle: Handle) -> f64 {
        self.percent(self.get(handle).amount() - self.lower.amount())
    }

    /// Returns the width of the whole track in money.
    fn span(&self) -> u64 {
        self.upper.amount() - self.lower.amount()
    }

    #[expect(clippy::cast_precision_loss, reason = "percentages are approximate")]
    fn percent(&self, amount: u64) -> f64 {
        amount as f64 / self.span() as f64 * 100.0
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            lower: Money::ZERO,
            upper: Money::new(1_000_000),
            min: Money::new(50_000),
            max: Money::new(500_000),
            gap: Money::new(10_000),
        }
    }
}

/// Handle of a [`PriceRange`] slider.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum Handle {
    /// Handle selecting the minimum price.
    #[display("min")]
    Min,

    /// Handle selecting the maximum price.
    #[display("max")]
    Max,
}

/// Error of creating a [`PriceRange`].
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, StdError)]
pub enum Error {
    /// Selectable prices don't fit the gap.
    #[display("price bounds are narrower than the gap")]
    BoundsTooNarrow,

    /// Selected prices are outside of the bounds or closer than the gap.
    #[display("selected prices are out of bounds")]
    SelectionOutOfBounds,
}

#[cfg(test)]
mod spec {
    use common::Money;

    use super::{Error, Handle, PriceRange};

    #[test]
    fn default_selection() {
        let range = PriceRange::default();
        assert_eq!(range.min(), Money::new(50_000));
        assert_eq!(range.max(), Money::new(500_000));
        assert!((range.left() - 5.0).abs() < 1e-9);
        assert!((range.width() - 45.0).abs() < 1e-9);
        assert!((range.position(Handle::Max) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn keeps_gap_between_handles() {
        let mut range = PriceRange::default();

        range.set_min(Money::new(600_000));
        assert_eq!(range.min(), Money::new(490_000));

        range.set_max(Money::new(100_000));
        assert_eq!(range.max(), Money::new(500_000));

        range.set_min(Money::new(200_000));
        range.set_max(Money::new(160_000));
        assert_eq!(range.max(), Money::new(210_000));
    }

    #[test]
    fn clamps_to_bounds() {
        let mut range = PriceRange::default();
        range.drag(Handle::Max, 1.7);
        assert_eq!(range.max(), Money::new(1_000_000));
        range.drag(Handle::Min, -0.3);
        assert_eq!(range.min(), Money::ZERO);
        range.drag(Handle::Min, f64::NAN);
        assert_eq!(range.min(), Money::ZERO);
    }

    #[test]
    fn maps_fraction_to_value() {
        let range = PriceRange::default();
        assert_eq!(range.value_at(0.0), Money::ZERO);
        assert_eq!(range.value_at(0.25), Money::new(250_000));
        assert_eq!(range.value_at(0.123_456_7), Money::new(123_457));
        assert_eq!(range.value_at(1.0), Money::new(1_000_000));
    }

    #[test]
    fn click_moves_nearest_handle() {
        let mut range = PriceRange::default();
        assert_eq!(range.click(0.1), Handle::Min);
        assert_eq!(range.min(), Money::new(100_000));

        assert_eq!(range.click(0.8), Handle::Max);
        assert_eq!(range.max(), Money::new(800_000));

        // Equally distant from both handles.
        assert_eq!(range.click(0.45), Handle::Max);
        assert_eq!(range.max(), Money::new(450_000));
    }

    #[test]
    fn validates_construction() {
        let m = Money::new;
        assert_eq!(
            PriceRange::new(m(0), m(5_000), m(0), m(5_000), m(10_000)),
            Err(Error::BoundsTooNarrow),
        );
        assert_eq!(
            PriceRange::new(m(0), m(100_000), m(50_000), m(55_000), m(10_000)),
            Err(Error::SelectionOutOfBounds),
        );
        assert_eq!(
            PriceRange::new(m(10), m(100_000), m(0), m(50_000), m(10_000)),
            Err(Error::SelectionOutOfBounds),
        );
        assert!(
            PriceRange::new(m(0), m(100_000), m(0), m(10_000), m(10_000)).is_ok()
        );
    }

    #[test]
    fn stays_within_widest_track() {
        let m = Money::new;
        let mut range =
            PriceRange::new(m(10), m(u64::MAX), m(10), m(u64::MAX), m(1))
                .unwrap();

        assert_eq!(range.value_at(0.0), m(10));
        assert_eq!(range.value_at(1.0), m(u64::MAX));

        range.drag(Handle::Max, 1.0);
        assert_eq!(range.max(), m(u64::MAX));
    }
}
