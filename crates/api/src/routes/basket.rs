//! Basket endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use basket::ShoppingCart;
use events::EventPublisher;
use product_store::ProductStore;

use crate::error::ApiError;
use crate::routes::products::AppState;

/// GET /basket/{user_name} — the user's cart, 404 when absent.
#[tracing::instrument(skip(state))]
pub async fn get<S: ProductStore, P: EventPublisher>(
    State(state): State<Arc<AppState<S, P>>>,
    Path(user_name): Path<String>,
) -> Result<Json<ShoppingCart>, ApiError> {
    match state.basket.get_basket(&user_name).await {
        Some(cart) => Ok(Json(cart)),
        None => Err(ApiError::NotFound(format!(
            "No basket for user: {user_name}"
        ))),
    }
}

/// POST /basket — upsert a cart; echoes the stored cart back.
#[tracing::instrument(skip(state, cart))]
pub async fn update<S: ProductStore, P: EventPublisher>(
    State(state): State<Arc<AppState<S, P>>>,
    Json(cart): Json<ShoppingCart>,
) -> Result<(StatusCode, Json<ShoppingCart>), ApiError> {
    state.basket.update_basket(cart.clone()).await;
    Ok((StatusCode::CREATED, Json(cart)))
}

/// DELETE /basket/{user_name} — 204 whether or not a cart existed.
#[tracing::instrument(skip(state))]
pub async fn delete<S: ProductStore, P: EventPublisher>(
    State(state): State<Arc<AppState<S, P>>>,
    Path(user_name): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.basket.delete_basket(&user_name).await;
    Ok(StatusCode::NO_CONTENT)
}
