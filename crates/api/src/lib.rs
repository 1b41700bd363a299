//! HTTP API server for the catalog and basket services.
//!
//! Provides REST endpoints for product CRUD/search and per-user baskets,
//! with structured logging (tracing) and Prometheus metrics. The basket's
//! cached prices are kept fresh by a background worker subscribed to the
//! catalog's price-change events.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::{delete, get, post, put};
use basket::BasketService;
use catalog::CatalogService;
use events::{EventPublisher, InMemoryEventBus};
use metrics_exporter_prometheus::PrometheusHandle;
use product_store::ProductStore;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use routes::products::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<S, P>(state: Arc<AppState<S, P>>, metrics_handle: PrometheusHandle) -> Router
where
    S: ProductStore + 'static,
    P: EventPublisher + 'static,
{
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .route("/products", post(routes::products::create::<S, P>))
        .route("/products", get(routes::products::list::<S, P>))
        .route("/products/{id}", get(routes::products::get::<S, P>))
        .route("/products/{id}", put(routes::products::update::<S, P>))
        .route("/products/{id}", delete(routes::products::delete::<S, P>))
        .route("/basket/{user_name}", get(routes::basket::get::<S, P>))
        .route("/basket", post(routes::basket::update::<S, P>))
        .route(
            "/basket/{user_name}",
            delete(routes::basket::delete::<S, P>),
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

/// Creates the default application state: catalog over the given store, an
/// in-memory event bus, and a basket service whose cached prices are
/// refreshed by a background subscriber to that bus.
pub fn create_default_state<S>(
    store: S,
) -> (Arc<AppState<S, InMemoryEventBus>>, InMemoryEventBus)
where
    S: ProductStore + 'static,
{
    let bus = InMemoryEventBus::new();
    let basket = BasketService::new();

    // Subscribe before any publish can happen so no event is missed.
    basket::spawn_price_refresh(basket.clone(), bus.subscribe());

    let catalog = CatalogService::new(store, bus.clone());
    let state = Arc::new(AppState { catalog, basket });

    (state, bus)
}
