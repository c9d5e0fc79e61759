//! Health check endpoint.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use cart_store::CartStore;
use serde::Serialize;

use super::SharedState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_carts: Option<usize>,
    pub products: usize,
}

/// GET /health — reports liveness and the size of the in-memory stores.
///
/// Answers 503 with status `degraded` when the cart store cannot be counted.
pub async fn check<S: CartStore + 'static>(
    State(state): State<SharedState<S>>,
) -> (StatusCode, Json<HealthResponse>) {
    let products = state.catalog_service.catalog().len().await;

    match state.cart_service.store().count().await {
        Ok(active_carts) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok",
                active_carts: Some(active_carts),
                products,
            }),
        ),
        Err(err) => {
            tracing::error!(error = %err, "cart store health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "degraded",
                    active_carts: None,
                    products,
                }),
            )
        }
    }
}
