//! Instant estimate service for residential and commercial cleaning.
//!
//! The pricing engine in [`pricing`] is pure and synchronous; this crate
//! wraps it in an Axum router for the booking form.

pub mod config;
pub mod error;
pub mod pricing;

use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::Config;
use crate::pricing::PricingCatalog;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Validated at startup, read-only afterwards
    pub catalog: Arc<PricingCatalog>,
}

impl AppState {
    pub fn new(catalog: PricingCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    /// Build state from configuration, failing fast on a bad catalog
    pub fn from_config(config: &Config) -> error::Result<Self> {
        Ok(Self::new(config.load_catalog()?))
    }
}

/// Build the application router
pub fn app(state: AppState, config: &Config) -> Router {
    let router = Router::new()
        .route("/health", get(health))
        .nest("/api/pricing", pricing::router())
        .layer(TraceLayer::new_for_http());

    let router = if config.cors_allow_any {
        router.layer(CorsLayer::permissive())
    } else {
        router
    };

    router.with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
