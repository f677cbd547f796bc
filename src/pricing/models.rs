//! Domain types for the estimation engine.
//!
//! Requests are built once per call at the boundary and never mutated.
//! Results are plain values; nothing here is persisted.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How thoroughly a residence is cleaned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CleanLevel {
    Light,
    Standard,
    Heavy,
    DeepReset,
}

/// Residential service kind. Selects the tier table and labor pace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceKind {
    Standard,
    Deep,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusinessType {
    Office,
    Retail,
    Clinic,
    Restaurant,
}

/// Recurring commercial visit cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    Weekly,
    Biweekly,
    Monthly,
}

/// Which add-on menu a selection is priced against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceCategory {
    Residential,
    Commercial,
}

/// Home or apartment booking.
#[derive(Debug, Clone, PartialEq)]
pub struct ResidentialRequest {
    pub sqft: u32,
    pub beds: u32,
    pub baths: u32,
    pub clean_level: CleanLevel,
    pub kind: ServiceKind,
    pub is_move_out: bool,
    /// Pre-summed add-on selections, always >= 0.
    pub add_ons_total: Decimal,
    /// Resolved distance to the nearest home base, always >= 0.
    pub miles: Decimal,
    pub after_hours: bool,
}

/// Business booking.
#[derive(Debug, Clone, PartialEq)]
pub struct CommercialRequest {
    pub sqft: u32,
    pub restrooms: u32,
    pub business_type: BusinessType,
    pub frequency: Frequency,
    pub add_ons_total: Decimal,
    pub miles: Decimal,
    pub after_hours: bool,
}

/// One of the two booking variants.
#[derive(Debug, Clone, PartialEq)]
pub enum EstimateRequest {
    Residential(ResidentialRequest),
    Commercial(CommercialRequest),
}

/// Why a request cannot be priced automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeclineReason {
    /// Distance exceeds the last travel band.
    OutOfRange,
    /// Square footage falls on the sentinel tier.
    CustomQuote,
}

impl DeclineReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeclineReason::OutOfRange => "OUT_OF_RANGE",
            DeclineReason::CustomQuote => "CUSTOM_QUOTE",
        }
    }
}

impl std::fmt::Display for DeclineReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Diagnostics produced by the residential estimator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResidentialMeta {
    pub expected_beds: u32,
    pub expected_baths: u32,
    /// Room-count adjustment after clamping.
    #[serde(with = "rust_decimal::serde::str")]
    pub adj: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub travel_fee: Decimal,
    /// Estimated labor hours, one decimal place.
    #[serde(with = "rust_decimal::serde::str")]
    pub hours: Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EstimateMeta {
    Residential(ResidentialMeta),
    Commercial,
}

/// A bounded price estimate.
#[derive(Debug, Clone, PartialEq)]
pub struct Estimate {
    /// Customer-facing price, always a multiple of 5.
    pub shown: Decimal,
    pub internal_low: Decimal,
    pub internal_high: Decimal,
    pub meta: EstimateMeta,
}

/// Outcome of a single estimator call.
#[derive(Debug, Clone, PartialEq)]
pub enum EstimateResult {
    Accepted(Estimate),
    Declined(DeclineReason),
}

impl EstimateResult {
    pub fn is_accepted(&self) -> bool {
        matches!(self, EstimateResult::Accepted(_))
    }

    pub fn estimate(&self) -> Option<&Estimate> {
        match self {
            EstimateResult::Accepted(estimate) => Some(estimate),
            EstimateResult::Declined(_) => None,
        }
    }

    pub fn decline_reason(&self) -> Option<DeclineReason> {
        match self {
            EstimateResult::Accepted(_) => None,
            EstimateResult::Declined(reason) => Some(*reason),
        }
    }
}
