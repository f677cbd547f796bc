//! Request DTOs for pricing API endpoints.
//!
//! Conversion into engine requests is where validation happens: the
//! estimators trust what they are given.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::pricing::catalog::PricingCatalog;
use crate::pricing::error::RequestError;
use crate::pricing::models::{
    BusinessType, CleanLevel, CommercialRequest, Frequency, ResidentialRequest, ServiceCategory,
    ServiceKind,
};

/// Request to estimate a residential cleaning
#[derive(Debug, Deserialize)]
pub struct ResidentialEstimateRequest {
    pub sqft: u32,
    pub beds: u32,
    pub baths: u32,
    pub clean_level: CleanLevel,
    pub kind: ServiceKind,
    #[serde(default)]
    pub is_move_out: bool,
    /// Selected add-on keys from the residential menu
    #[serde(default)]
    pub add_ons: Vec<String>,
    /// Distance to the nearest home base; missing means 0
    #[serde(default)]
    pub miles: Option<Decimal>,
    #[serde(default)]
    pub after_hours: bool,
}

impl ResidentialEstimateRequest {
    pub fn into_request(self, catalog: &PricingCatalog) -> Result<ResidentialRequest, RequestError> {
        require_positive("sqft", self.sqft)?;
        let miles = resolve_miles(self.miles)?;
        let add_ons_total = catalog
            .add_ons
            .price_selection(ServiceCategory::Residential, self.add_ons.as_slice())?;

        Ok(ResidentialRequest {
            sqft: self.sqft,
            beds: self.beds,
            baths: self.baths,
            clean_level: self.clean_level,
            kind: self.kind,
            is_move_out: self.is_move_out,
            add_ons_total,
            miles,
            after_hours: self.after_hours,
        })
    }
}

/// Request to estimate a commercial cleaning
#[derive(Debug, Deserialize)]
pub struct CommercialEstimateRequest {
    pub sqft: u32,
    pub restrooms: u32,
    pub business_type: BusinessType,
    pub frequency: Frequency,
    #[serde(default)]
    pub add_ons: Vec<String>,
    #[serde(default)]
    pub miles: Option<Decimal>,
    #[serde(default)]
    pub after_hours: bool,
}

impl CommercialEstimateRequest {
    pub fn into_request(self, catalog: &PricingCatalog) -> Result<CommercialRequest, RequestError> {
        require_positive("sqft", self.sqft)?;
        let miles = resolve_miles(self.miles)?;
        let add_ons_total = catalog
            .add_ons
            .price_selection(ServiceCategory::Commercial, self.add_ons.as_slice())?;

        Ok(CommercialRequest {
            sqft: self.sqft,
            restrooms: self.restrooms,
            business_type: self.business_type,
            frequency: self.frequency,
            add_ons_total,
            miles,
            after_hours: self.after_hours,
        })
    }
}

fn require_positive(field: &'static str, value: u32) -> Result<(), RequestError> {
    if value == 0 {
        return Err(RequestError::Zero { field });
    }
    Ok(())
}

fn resolve_miles(miles: Option<Decimal>) -> Result<Decimal, RequestError> {
    let miles = miles.unwrap_or(Decimal::ZERO);
    if miles < Decimal::ZERO {
        return Err(RequestError::Negative { field: "miles" });
    }
    Ok(miles)
}
