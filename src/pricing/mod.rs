//! Pricing engine module.
//!
//! Instant estimates for residential and commercial cleaning jobs, computed
//! from a fixed pricing catalog. Served over HTTP/JSON by the booking form.

pub mod calculators;
pub mod catalog;
pub mod error;
pub mod estimators;
pub mod models;
pub mod requests;
pub mod responses;
pub mod routes;

// Re-export commonly used items
pub use calculators::{round_half_up, round_to_nearest_5};
pub use catalog::PricingCatalog;
pub use error::{CatalogError, RequestError};
pub use estimators::{estimate, estimate_commercial, estimate_residential};
pub use models::{DeclineReason, Estimate, EstimateRequest, EstimateResult};
pub use routes::router;
