//! HTTP API server for the shopping cart and product catalog services.
//!
//! Provides REST endpoints for cart management and checkout, the product
//! catalog the carts validate against, with structured logging (tracing)
//! and Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use cart_store::CartStore;
use catalog::{CatalogService, InMemoryProductCatalog};
use domain::{CartService, SyntheticOrderPlacement};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::Config;
use routes::{AppState, SharedState};

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<S: CartStore + 'static>(
    state: SharedState<S>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::render))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check::<S>))
        .route("/v1/shopping-cart", post(routes::carts::create::<S>))
        .route("/v1/shopping-cart/{id}", get(routes::carts::get::<S>))
        .route(
            "/v1/shopping-cart/{id}/items",
            post(routes::carts::add_item::<S>),
        )
        .route(
            "/v1/shopping-cart/{id}/checkout",
            post(routes::carts::checkout::<S>),
        )
        .route("/v1/product/{id}", get(routes::products::get::<S>))
        .route(
            "/v1/product/{id}/details",
            post(routes::products::add_details::<S>),
        )
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates the application state over a cart store.
///
/// The catalog is held in-process and shared between the catalog endpoints
/// and the cart workflow's product existence check.
pub fn create_default_state<S: CartStore + 'static>(store: S, config: &Config) -> SharedState<S> {
    let catalog = InMemoryProductCatalog::new();
    let orders = SyntheticOrderPlacement::new(config.order_id_multiplier);

    Arc::new(AppState {
        cart_service: CartService::new(store, catalog.clone(), orders),
        catalog_service: CatalogService::new(catalog),
    })
}
