//! Pricing API route handlers

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    routing::{get, post},
    Json, Router,
};
use tracing::info;

use crate::error::{AppError, Result};
use crate::AppState;

use super::catalog::PricingCatalog;
use super::estimators::{estimate_commercial, estimate_residential};
use super::models::ServiceCategory;
use super::requests::{CommercialEstimateRequest, ResidentialEstimateRequest};
use super::responses::{AddOnMenuResponse, EstimateResponse};

/// Pricing routes, mounted under `/api/pricing`
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/catalog", get(catalog))
        .route("/add-ons/:category", get(add_ons))
        .route("/estimate/residential", post(residential))
        .route("/estimate/commercial", post(commercial))
}

/// Active pricing catalog
async fn catalog(State(state): State<AppState>) -> Json<PricingCatalog> {
    Json(state.catalog.as_ref().clone())
}

/// Add-on menu for one service category
async fn add_ons(
    State(state): State<AppState>,
    category: std::result::Result<Path<ServiceCategory>, PathRejection>,
) -> Result<Json<AddOnMenuResponse>> {
    let Path(category) = category.map_err(|_| AppError::NotFound)?;

    Ok(Json(AddOnMenuResponse {
        category,
        currency: state.catalog.currency.clone(),
        add_ons: state.catalog.add_ons.menu(category).to_vec(),
    }))
}

async fn residential(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ResidentialEstimateRequest>, JsonRejection>,
) -> Result<Json<EstimateResponse>> {
    let Json(body) = payload?;
    let request = body.into_request(&state.catalog)?;

    let result = estimate_residential(&state.catalog, &request);
    let response = EstimateResponse::from_result(result, &state.catalog.currency);
    info!(quote_id = %response.quote_id, ok = response.ok, "Residential estimate served");

    Ok(Json(response))
}

async fn commercial(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CommercialEstimateRequest>, JsonRejection>,
) -> Result<Json<EstimateResponse>> {
    let Json(body) = payload?;
    let request = body.into_request(&state.catalog)?;

    let result = estimate_commercial(&state.catalog, &request);
    let response = EstimateResponse::from_result(result, &state.catalog.currency);
    info!(quote_id = %response.quote_id, ok = response.ok, "Commercial estimate served");

    Ok(Json(response))
}
