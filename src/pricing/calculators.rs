//! Core pricing calculation functions.
//!
//! Pure functions for pricing math - no catalog ownership, no I/O.
//! Both estimators are built from these helpers.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::pricing::catalog::{SqftTier, TravelBand};

/// Two-sided clamp.
///
/// Applied as `max(lo, min(hi, value))`, so an inverted range never panics;
/// every call site keeps `lo <= hi`.
pub fn clamp(value: Decimal, lo: Decimal, hi: Decimal) -> Decimal {
    lo.max(hi.min(value))
}

/// Round to the nearest integer, halves toward positive infinity.
///
/// This is `floor(v + 0.5)`: `2.5 -> 3`, `1.5 -> 2`, `-2.5 -> -2`. For
/// non-negative values it agrees with half-away-from-zero rounding.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use cleanquote_web::pricing::round_half_up;
///
/// assert_eq!(round_half_up(dec!(2.5)), dec!(3));
/// assert_eq!(round_half_up(dec!(2.49)), dec!(2));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    (value + dec!(0.5)).floor()
}

/// Round a price to the nearest $5.
///
/// The quotient `value / 5` is rounded half-up, so the result is always a
/// whole-dollar amount divisible by 5.
pub fn round_to_nearest_5(value: Decimal) -> Decimal {
    round_half_up(value / dec!(5)) * dec!(5)
}

/// Round labor hours to one decimal place, halves away from zero.
///
/// Trailing zeros are stripped, so `3.0` becomes `3` and `0.20` becomes
/// `0.2` when serialized. Hours are never negative, where this agrees with
/// [`round_half_up`].
pub fn round_to_tenth(value: Decimal) -> Decimal {
    value
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
}

/// Resolve the flat base price for a square footage.
///
/// Scans `tiers` in ascending order and returns the `base` of the first tier
/// whose `max_sqft` covers `sqft`. An unbounded tier (`max_sqft = None`)
/// covers everything. Returns `None` when the matched tier is the sentinel
/// (no base) or nothing matches, meaning the job needs a custom quote.
pub fn resolve_tier(sqft: u32, tiers: &[SqftTier]) -> Option<Decimal> {
    tiers
        .iter()
        .find(|tier| tier.max_sqft.map_or(true, |max| sqft <= max))
        .and_then(|tier| tier.base)
}

/// Resolve the travel fee for a distance in miles.
///
/// First band whose `max_miles >= miles` wins. Returns `None` when the
/// distance exceeds every band (outside the service area).
pub fn resolve_travel_fee(miles: Decimal, bands: &[TravelBand]) -> Option<Decimal> {
    bands
        .iter()
        .find(|band| miles <= Decimal::from(band.max_miles))
        .map(|band| band.fee)
}
