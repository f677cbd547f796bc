//! Residential and commercial estimators.
//!
//! Both are pure functions of a request and the catalog: no I/O, no shared
//! mutable state, bounded work per call. Out-of-policy requests come back as
//! `EstimateResult::Declined`, never as an error.

use rust_decimal::prelude::*;
use tracing::debug;

use crate::pricing::calculators::{
    clamp, resolve_tier, resolve_travel_fee, round_half_up, round_to_nearest_5, round_to_tenth,
};
use crate::pricing::catalog::{PricingCatalog, RoomAdjustment};
use crate::pricing::models::{
    CommercialRequest, DeclineReason, Estimate, EstimateMeta, EstimateRequest, EstimateResult,
    ResidentialMeta, ResidentialRequest,
};

/// Price any request variant.
pub fn estimate(catalog: &PricingCatalog, request: &EstimateRequest) -> EstimateResult {
    match request {
        EstimateRequest::Residential(request) => estimate_residential(catalog, request),
        EstimateRequest::Commercial(request) => estimate_commercial(catalog, request),
    }
}

/// Price a home or apartment cleaning.
///
/// Steps, in order:
/// 1. travel fee (decline `OUT_OF_RANGE` beyond the last band)
/// 2. tier base for the service kind (decline `CUSTOM_QUOTE` on the sentinel)
/// 3. move-out floor and multiplier
/// 4. clamped room-count adjustment
/// 5. clean-level multiplier, then add-ons and travel fee on top
/// 6. after-hours surcharge
/// 7. labor-hour guardrail, which bounds the price regardless of 1-6
/// 8. rounding to the nearest $5
pub fn estimate_residential(catalog: &PricingCatalog, request: &ResidentialRequest) -> EstimateResult {
    let Some(travel_fee) = resolve_travel_fee(request.miles, &catalog.travel_fee_bands) else {
        debug!(miles = %request.miles, "Residential estimate declined: out of range");
        return EstimateResult::Declined(DeclineReason::OutOfRange);
    };

    let tiers = catalog.residential_tiers.get(request.kind);
    let Some(mut base) = resolve_tier(request.sqft, tiers) else {
        debug!(sqft = request.sqft, kind = ?request.kind, "Residential estimate declined: custom quote");
        return EstimateResult::Declined(DeclineReason::CustomQuote);
    };

    if request.is_move_out {
        base = catalog.move_out.apply(request.kind, base);
    }

    let rooms = room_adjustment(&catalog.room_adjustment, request.sqft, request.beds, request.baths);

    let mut price = base + rooms.adj;
    price *= *catalog.clean_level_multipliers.get(request.clean_level);

    // Add-ons and travel are not subject to the clean-level multiplier
    price += request.add_ons_total + travel_fee;

    if request.after_hours {
        price *= catalog.after_hours_multiplier;
    }

    let hours = catalog
        .labor
        .hours(request.sqft, request.kind, request.clean_level);
    let labor = hours * catalog.hourly.default;
    let unbounded = price;
    price = clamp(
        price,
        labor * catalog.labor.floor_factor,
        labor * catalog.labor.ceiling_factor,
    );

    if price != unbounded {
        debug!(%unbounded, bounded = %price, %labor, "Labor guardrail applied");
    }

    let estimate = finish(
        catalog,
        price,
        EstimateMeta::Residential(ResidentialMeta {
            expected_beds: rooms.expected_beds,
            expected_baths: rooms.expected_baths,
            adj: rooms.adj,
            travel_fee,
            hours: round_to_tenth(hours),
        }),
    );

    debug!(shown = %estimate.shown, sqft = request.sqft, "Residential estimate accepted");
    EstimateResult::Accepted(estimate)
}

/// Price a recurring business cleaning.
///
/// Square-footage rate scaled by business type, plus restroom fees, less the
/// frequency discount, plus add-ons and travel, with the after-hours
/// surcharge on top. There is no tier or guardrail on this path.
pub fn estimate_commercial(catalog: &PricingCatalog, request: &CommercialRequest) -> EstimateResult {
    let Some(travel_fee) = resolve_travel_fee(request.miles, &catalog.travel_fee_bands) else {
        debug!(miles = %request.miles, "Commercial estimate declined: out of range");
        return EstimateResult::Declined(DeclineReason::OutOfRange);
    };

    let rates = &catalog.commercial;

    let mut price = Decimal::from(request.sqft)
        * rates.rate_per_sqft
        * *rates.type_multiplier.get(request.business_type);
    price += Decimal::from(request.restrooms) * rates.restroom_fee;
    price *= Decimal::ONE - *rates.frequency_discount.get(request.frequency);
    price += request.add_ons_total + travel_fee;

    if request.after_hours {
        price *= catalog.after_hours_multiplier;
    }

    let estimate = finish(catalog, price, EstimateMeta::Commercial);

    debug!(
        shown = %estimate.shown,
        business_type = ?request.business_type,
        "Commercial estimate accepted"
    );
    EstimateResult::Accepted(estimate)
}

/// Round the final price and derive the internal review band.
fn finish(catalog: &PricingCatalog, price: Decimal, meta: EstimateMeta) -> Estimate {
    let shown = round_to_nearest_5(price);
    let band = catalog.internal_band_fraction;

    Estimate {
        shown,
        internal_low: round_to_nearest_5(shown * (Decimal::ONE - band)),
        internal_high: round_to_nearest_5(shown * (Decimal::ONE + band)),
        meta,
    }
}

struct RoomCounts {
    expected_beds: u32,
    expected_baths: u32,
    adj: Decimal,
}

/// Compare declared rooms with what the square footage implies.
fn room_adjustment(rules: &RoomAdjustment, sqft: u32, beds: u32, baths: u32) -> RoomCounts {
    // Validation keeps sqft_per_bedroom >= 1 and baths_per_bedroom <= 1, so
    // neither quotient exceeds sqft and both fit a u32.
    let expected_beds = round_half_up(Decimal::from(sqft) / rules.sqft_per_bedroom)
        .to_u32()
        .unwrap_or(sqft)
        .max(1);
    let expected_baths = round_half_up(Decimal::from(expected_beds) * rules.baths_per_bedroom)
        .to_u32()
        .unwrap_or(expected_beds)
        .max(1);

    let bed_diff = i64::from(beds) - i64::from(expected_beds);
    let bath_diff = i64::from(baths) - i64::from(expected_baths);

    let bed_adj = Decimal::from(bed_diff)
        * if bed_diff >= 0 {
            rules.extra_bed
        } else {
            rules.missing_bed
        };
    let bath_adj = Decimal::from(bath_diff)
        * if bath_diff >= 0 {
            rules.extra_bath
        } else {
            rules.missing_bath
        };

    RoomCounts {
        expected_beds,
        expected_baths,
        adj: clamp(bed_adj + bath_adj, rules.min, rules.max),
    }
}
