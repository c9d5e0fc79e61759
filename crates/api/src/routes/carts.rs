//! Shopping cart endpoints.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use cart_store::{Cart, CartStore};
use common::{CartId, OrderId};
use domain::{AddItem, Checkout, CreateCart};
use serde::{Deserialize, Serialize};

use super::{SharedState, parse_id};
use crate::error::ApiError;

// -- Request types --

#[derive(Debug, Deserialize)]
pub struct CreateCartRequest {
    pub customer_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct AddItemRequest {
    pub product_id: i64,
    pub quantity: i64,
}

// -- Response types --

#[derive(Debug, Serialize)]
pub struct CartCreatedResponse {
    pub cart_id: CartId,
}

#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    pub order_id: OrderId,
}

// -- Handlers --

/// POST /v1/shopping-cart — create an empty cart for a customer.
#[tracing::instrument(skip(state, body))]
pub async fn create<S: CartStore + 'static>(
    State(state): State<SharedState<S>>,
    body: Result<Json<CreateCartRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CartCreatedResponse>), ApiError> {
    let Json(req) = body.map_err(invalid_body)?;

    let cart_id = state
        .cart_service
        .create_cart(CreateCart::new(req.customer_id))
        .await?;

    Ok((StatusCode::CREATED, Json(CartCreatedResponse { cart_id })))
}

/// GET /v1/shopping-cart/{id} — return a snapshot of a cart.
#[tracing::instrument(skip(state))]
pub async fn get<S: CartStore + 'static>(
    State(state): State<SharedState<S>>,
    Path(id): Path<String>,
) -> Result<Json<Cart>, ApiError> {
    let cart_id = parse_id(&id, "Cart")?;
    let cart = state.cart_service.get_cart(CartId::new(cart_id)).await?;
    Ok(Json(cart))
}

/// POST /v1/shopping-cart/{id}/items — add a product quantity to a cart.
#[tracing::instrument(skip(state, body))]
pub async fn add_item<S: CartStore + 'static>(
    State(state): State<SharedState<S>>,
    Path(id): Path<String>,
    body: Result<Json<AddItemRequest>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let cart_id = parse_id(&id, "Cart")?;
    let Json(req) = body.map_err(invalid_body)?;

    state
        .cart_service
        .add_item(AddItem::new(cart_id, req.product_id, req.quantity))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /v1/shopping-cart/{id}/checkout — convert a cart into an order.
#[tracing::instrument(skip(state))]
pub async fn checkout<S: CartStore + 'static>(
    State(state): State<SharedState<S>>,
    Path(id): Path<String>,
) -> Result<Json<CheckoutResponse>, ApiError> {
    let cart_id = parse_id(&id, "Cart")?;

    let receipt = state
        .cart_service
        .checkout(Checkout::new(cart_id))
        .await?;

    Ok(Json(CheckoutResponse {
        order_id: receipt.order_id,
    }))
}

pub(crate) fn invalid_body(rejection: JsonRejection) -> ApiError {
    ApiError::bad_request("Invalid input data", rejection.body_text())
}
