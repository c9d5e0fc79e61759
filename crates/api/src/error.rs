//! API error types with HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use catalog::CatalogError;
use domain::CartError;
use serde::Serialize;

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// Malformed request: bad path parameter or undecodable body.
    BadRequest { message: String, details: String },
    /// Cart workflow error.
    Cart(CartError),
    /// Catalog error.
    Catalog(CatalogError),
}

impl ApiError {
    /// Creates a bad request error.
    pub fn bad_request(message: impl Into<String>, details: impl Into<String>) -> Self {
        ApiError::BadRequest {
            message: message.into(),
            details: details.into(),
        }
    }
}

/// JSON body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::BadRequest { message, details } => (
                StatusCode::BAD_REQUEST,
                body("INVALID_INPUT", message, details),
            ),
            ApiError::Cart(err) => cart_error_to_response(err),
            ApiError::Catalog(err) => catalog_error_to_response(err),
        };

        metrics::counter!("http_errors_total", "code" => body.error).increment(1);
        (status, axum::Json(body)).into_response()
    }
}

fn body(code: &'static str, message: impl Into<String>, details: impl Into<String>) -> ErrorBody {
    ErrorBody {
        error: code,
        message: message.into(),
        details: Some(details.into()),
    }
}

fn cart_error_to_response(err: CartError) -> (StatusCode, ErrorBody) {
    match err {
        CartError::InvalidInput(details) => (
            StatusCode::BAD_REQUEST,
            body("INVALID_INPUT", "Invalid input data", details),
        ),
        CartError::NotFound(_) => (
            StatusCode::NOT_FOUND,
            body(
                "NOT_FOUND",
                "Cart not found",
                "No cart exists with the specified ID",
            ),
        ),
        CartError::ProductNotFound(_) => (
            StatusCode::NOT_FOUND,
            body(
                "NOT_FOUND",
                "Product not found",
                "No product exists with the specified ID",
            ),
        ),
        CartError::EmptyCart(_) => (
            StatusCode::BAD_REQUEST,
            body(
                "INVALID_STATE",
                "Cart is empty",
                "Cannot checkout an empty cart",
            ),
        ),
        CartError::Internal(details) => {
            tracing::error!(error = %details, "internal server error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                body("INTERNAL_ERROR", "Internal server error", details),
            )
        }
    }
}

fn catalog_error_to_response(err: CatalogError) -> (StatusCode, ErrorBody) {
    match &err {
        CatalogError::ProductNotFound(_) => (
            StatusCode::NOT_FOUND,
            body(
                "NOT_FOUND",
                "Product not found",
                "No product exists with the specified ID",
            ),
        ),
        CatalogError::InvalidProduct(_) | CatalogError::IdMismatch { .. } => (
            StatusCode::BAD_REQUEST,
            body("INVALID_INPUT", "Invalid input data", err.to_string()),
        ),
    }
}

impl From<CartError> for ApiError {
    fn from(err: CartError) -> Self {
        ApiError::Cart(err)
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        ApiError::Catalog(err)
    }
}
