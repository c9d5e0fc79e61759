//! Product catalog endpoints.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use cart_store::CartStore;
use catalog::Product;
use common::ProductId;

use super::carts::invalid_body;
use super::{SharedState, parse_id};
use crate::error::ApiError;

/// GET /v1/product/{id} — load a product by ID.
#[tracing::instrument(skip(state))]
pub async fn get<S: CartStore + 'static>(
    State(state): State<SharedState<S>>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    let product_id = parse_id(&id, "Product")?;
    let product = state
        .catalog_service
        .get_product(ProductId::new(product_id))
        .await?;
    Ok(Json(product))
}

/// POST /v1/product/{id}/details — create or update a product.
#[tracing::instrument(skip(state, body))]
pub async fn add_details<S: CartStore + 'static>(
    State(state): State<SharedState<S>>,
    Path(id): Path<String>,
    body: Result<Json<Product>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let product_id = parse_id(&id, "Product")?;
    let Json(product) = body.map_err(invalid_body)?;

    state
        .catalog_service
        .add_product_details(ProductId::new(product_id), product)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
