//! Pricing-specific error types.
//!
//! Declines are not errors; these cover configuration faults detected at
//! load time and malformed requests rejected at the boundary.

use crate::pricing::models::ServiceCategory;

/// Pricing catalog failed to load or is internally inconsistent.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read pricing catalog {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse pricing catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{table} thresholds must be strictly ascending (at index {index})")]
    Unsorted { table: &'static str, index: usize },

    #[error("{table} must end with exactly one unbounded tier without a base price")]
    MissingSentinel { table: &'static str },

    #[error("{0} must not be empty")]
    Empty(&'static str),

    #[error("{name} must be strictly positive")]
    NonPositive { name: String },

    #[error("{name} must lie in [0, 1)")]
    DiscountOutOfRange { name: String },

    #[error("Invalid catalog: {0}")]
    Inconsistent(String),

    #[error("Duplicate add-on key '{key}' in {category:?} menu")]
    DuplicateAddOn { category: ServiceCategory, key: String },
}

/// Request could not be turned into an estimate request.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RequestError {
    #[error("{field} must not be negative")]
    Negative { field: &'static str },

    #[error("{field} must be greater than zero")]
    Zero { field: &'static str },

    #[error("Unknown {category:?} add-on '{key}'")]
    UnknownAddOn { category: ServiceCategory, key: String },
}
