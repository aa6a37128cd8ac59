use axum::extract::State;

use super::expand::item_schema;
use crate::database::Database;
use crate::error::ApiError;
use crate::middleware::{AdminUser, ApiPath, ApiResponse, ApiResult, AuthUser, FreshAdminUser, ValidJson};
use crate::schemas::{ItemCreate, ItemSchema, ItemUpdate, Message};
use crate::state::AppState;

/// GET /item - List every item
pub async fn list(State(state): State<AppState>, _user: AuthUser) -> ApiResult<Vec<ItemSchema>> {
    let items = state.db.items().select_all().await?;

    let mut body = Vec::with_capacity(items.len());
    for item in items {
        body.push(item_schema(&state.db, item).await?);
    }
    Ok(ApiResponse::success(body))
}

/// POST /item - Create an item inside an existing store (fresh token required)
pub async fn create(
    State(state): State<AppState>,
    FreshAdminUser(user): FreshAdminUser,
    ValidJson(payload): ValidJson<ItemCreate>,
) -> ApiResult<ItemSchema> {
    ensure_store_exists(&state.db, payload.store_id).await?;

    let item = state
        .db
        .items()
        .insert(payload.name.trim(), payload.price, payload.store_id)
        .await?;

    tracing::info!("User {} created item {} in store {}", user.user_id, item.id, item.store_id);
    Ok(ApiResponse::created(item_schema(&state.db, item).await?))
}

/// GET /item/:item_id
pub async fn get(
    State(state): State<AppState>,
    _user: AuthUser,
    ApiPath(item_id): ApiPath<i64>,
) -> ApiResult<ItemSchema> {
    let item = state.db.items().select_404(item_id).await?;
    Ok(ApiResponse::success(item_schema(&state.db, item).await?))
}

/// PUT /item/:item_id - Overlay `name`, `price` and/or `store_id`
pub async fn update(
    State(state): State<AppState>,
    AdminUser(_user): AdminUser,
    ApiPath(item_id): ApiPath<i64>,
    ValidJson(mut payload): ValidJson<ItemUpdate>,
) -> ApiResult<ItemSchema> {
    let items = state.db.items();
    let item = items.select_404(item_id).await?;

    if payload.is_empty() {
        return Ok(ApiResponse::success(item_schema(&state.db, item).await?));
    }
    if let Some(store_id) = payload.store_id {
        ensure_store_exists(&state.db, store_id).await?;
    }
    if let Some(name) = payload.name.take() {
        payload.name = Some(name.trim().to_string());
    }

    let item = items.save(&payload.apply(item)).await?;
    Ok(ApiResponse::success(item_schema(&state.db, item).await?))
}

/// DELETE /item/:item_id
pub async fn delete(
    State(state): State<AppState>,
    AdminUser(user): AdminUser,
    ApiPath(item_id): ApiPath<i64>,
) -> ApiResult<Message> {
    state.db.items().delete_404(item_id).await?;

    tracing::info!("User {} deleted item {}", user.user_id, item_id);
    Ok(ApiResponse::success(Message::new("Item deleted.")))
}

async fn ensure_store_exists(db: &Database, store_id: i64) -> Result<(), ApiError> {
    if db.stores().exists(store_id).await? {
        Ok(())
    } else {
        Err(ApiError::not_found("Store not found."))
    }
}
