use axum::extract::State;

use super::duplicate_name;
use super::expand::store_schema;
use crate::middleware::{AdminUser, ApiPath, ApiResponse, ApiResult, ValidJson};
use crate::schemas::{Message, StoreCreate, StoreSchema, StoreUpdate};
use crate::state::AppState;

/// GET /store - List every store with its items and tags
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<StoreSchema>> {
    let stores = state.db.stores().select_all().await?;

    let mut body = Vec::with_capacity(stores.len());
    for store in stores {
        body.push(store_schema(&state.db, store).await?);
    }
    Ok(ApiResponse::success(body))
}

/// POST /store - Create a store; names are unique
pub async fn create(
    State(state): State<AppState>,
    AdminUser(user): AdminUser,
    ValidJson(payload): ValidJson<StoreCreate>,
) -> ApiResult<StoreSchema> {
    let store = state
        .db
        .stores()
        .insert(payload.name.trim())
        .await
        .map_err(duplicate_name)?;

    tracing::info!("User {} created store {} ({})", user.user_id, store.id, store.name);
    Ok(ApiResponse::created(store_schema(&state.db, store).await?))
}

/// GET /store/:store_id
pub async fn get(State(state): State<AppState>, ApiPath(store_id): ApiPath<i64>) -> ApiResult<StoreSchema> {
    let store = state.db.stores().select_404(store_id).await?;
    Ok(ApiResponse::success(store_schema(&state.db, store).await?))
}

/// PUT /store/:store_id - Overlay the provided fields onto the store
pub async fn update(
    State(state): State<AppState>,
    AdminUser(_user): AdminUser,
    ApiPath(store_id): ApiPath<i64>,
    ValidJson(payload): ValidJson<StoreUpdate>,
) -> ApiResult<StoreSchema> {
    let stores = state.db.stores();

    let store = match payload.name {
        Some(name) => stores.rename(store_id, name.trim()).await.map_err(duplicate_name)?,
        None => stores.select_404(store_id).await?,
    };

    Ok(ApiResponse::success(store_schema(&state.db, store).await?))
}

/// DELETE /store/:store_id - Items and tags of the store go with it
pub async fn delete(
    State(state): State<AppState>,
    AdminUser(user): AdminUser,
    ApiPath(store_id): ApiPath<i64>,
) -> ApiResult<Message> {
    state.db.stores().delete_404(store_id).await?;

    tracing::info!("User {} deleted store {}", user.user_id, store_id);
    Ok(ApiResponse::success(Message::new("Store deleted.")))
}
