//! Product CRUD and search endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use basket::BasketService;
use catalog::CatalogService;
use events::EventPublisher;
use product_store::{Product, ProductDraft, ProductId, ProductStore};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState<S, P> {
    pub catalog: CatalogService<S, P>,
    pub basket: BasketService,
}

#[derive(Deserialize)]
pub struct ListParams {
    /// Optional name-substring filter.
    pub q: Option<String>,
}

/// POST /products — create a product; the store assigns the identity.
#[tracing::instrument(skip(state, draft))]
pub async fn create<S: ProductStore, P: EventPublisher>(
    State(state): State<Arc<AppState<S, P>>>,
    Json(draft): Json<ProductDraft>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let product = state.catalog.create_product(draft).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// GET /products — all products, or the name-substring matches when `?q=`
/// is present.
#[tracing::instrument(skip(state, params))]
pub async fn list<S: ProductStore, P: EventPublisher>(
    State(state): State<Arc<AppState<S, P>>>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let products = match params.q.as_deref() {
        Some(query) => state.catalog.search_products(query).await?,
        None => state.catalog.list_products().await?,
    };
    Ok(Json(products))
}

/// GET /products/{id} — a single product, 404 when absent.
#[tracing::instrument(skip(state))]
pub async fn get<S: ProductStore, P: EventPublisher>(
    State(state): State<Arc<AppState<S, P>>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Product>, ApiError> {
    let id = ProductId::from_uuid(id);
    match state.catalog.get_product(id).await? {
        Some(product) => Ok(Json(product)),
        None => Err(ApiError::NotFound(format!("Product not found: {id}"))),
    }
}

/// PUT /products/{id} — apply the requested field values; 204 on success.
///
/// The identity in the path resolves the target; any identity inside the
/// payload is ignored by construction.
#[tracing::instrument(skip(state, draft))]
pub async fn update<S: ProductStore, P: EventPublisher>(
    State(state): State<Arc<AppState<S, P>>>,
    Path(id): Path<Uuid>,
    Json(draft): Json<ProductDraft>,
) -> Result<StatusCode, ApiError> {
    state
        .catalog
        .update_product(ProductId::from_uuid(id), draft)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /products/{id} — 204 on success.
#[tracing::instrument(skip(state))]
pub async fn delete<S: ProductStore, P: EventPublisher>(
    State(state): State<Arc<AppState<S, P>>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state
        .catalog
        .delete_product(ProductId::from_uuid(id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
