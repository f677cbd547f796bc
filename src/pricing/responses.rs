//! Response DTOs for pricing API endpoints.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::pricing::catalog::AddOn;
use crate::pricing::models::{
    DeclineReason, EstimateMeta, EstimateResult, ResidentialMeta, ServiceCategory,
};

/// Money value for JSON responses
#[derive(Debug, Clone, Serialize)]
pub struct MoneyResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: String,
}

impl MoneyResponse {
    pub fn new(amount: Decimal, currency: &str) -> Self {
        Self {
            amount,
            currency: currency.to_string(),
        }
    }
}

/// Response for an estimate request
#[derive(Debug, Serialize)]
pub struct EstimateResponse {
    pub quote_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub ok: bool,
    #[serde(flatten)]
    pub outcome: EstimateOutcome,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum EstimateOutcome {
    Accepted {
        shown: MoneyResponse,
        internal_low: MoneyResponse,
        internal_high: MoneyResponse,
        #[serde(skip_serializing_if = "Option::is_none")]
        meta: Option<ResidentialMeta>,
    },
    Declined {
        reason: DeclineReason,
    },
}

impl EstimateResponse {
    pub fn from_result(result: EstimateResult, currency: &str) -> Self {
        let outcome = match result {
            EstimateResult::Accepted(estimate) => EstimateOutcome::Accepted {
                shown: MoneyResponse::new(estimate.shown, currency),
                internal_low: MoneyResponse::new(estimate.internal_low, currency),
                internal_high: MoneyResponse::new(estimate.internal_high, currency),
                meta: match estimate.meta {
                    EstimateMeta::Residential(meta) => Some(meta),
                    EstimateMeta::Commercial => None,
                },
            },
            EstimateResult::Declined(reason) => EstimateOutcome::Declined { reason },
        };

        Self {
            quote_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            ok: matches!(outcome, EstimateOutcome::Accepted { .. }),
            outcome,
        }
    }
}

/// Response listing an add-on menu
#[derive(Debug, Serialize)]
pub struct AddOnMenuResponse {
    pub category: ServiceCategory,
    pub currency: String,
    pub add_ons: Vec<AddOn>,
}

/// Generic pricing error response
#[derive(Debug, Serialize)]
pub struct PricingErrorResponse {
    pub error_type: String,
    pub message: String,
}
