//! Error handling for the application

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::pricing::error::{CatalogError, RequestError};
use crate::pricing::responses::PricingErrorResponse;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found")]
    NotFound,

    #[error("Invalid request: {0}")]
    InvalidRequest(#[from] RequestError),

    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::MalformedBody(rejection.body_text())
    }
}

impl AppError {
    fn error_type(&self) -> &'static str {
        match self {
            AppError::NotFound => "not_found",
            AppError::InvalidRequest(_) => "invalid_request",
            AppError::MalformedBody(_) => "malformed_body",
            AppError::Catalog(_) => "catalog_error",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::InvalidRequest(e) => {
                tracing::debug!("Rejected estimate request: {}", e);
                (StatusCode::BAD_REQUEST, e.to_string())
            }
            AppError::MalformedBody(msg) => {
                tracing::debug!("Malformed request body: {}", msg);
                (StatusCode::BAD_REQUEST, msg.clone())
            }
            AppError::Catalog(e) => {
                tracing::error!("Catalog error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Pricing unavailable".to_string())
            }
        };

        let body = PricingErrorResponse {
            error_type: self.error_type().to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
