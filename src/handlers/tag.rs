use axum::extract::State;

use super::duplicate_name;
use super::expand::{item_schema, tag_schema};
use crate::error::ApiError;
use crate::middleware::{AdminUser, ApiPath, ApiResponse, ApiResult, ValidJson};
use crate::schemas::{Message, TagAndItem, TagCreate, TagSchema};
use crate::state::AppState;

/// GET /store/:store_id/tag - Tags belonging to a store
pub async fn list_in_store(
    State(state): State<AppState>,
    ApiPath(store_id): ApiPath<i64>,
) -> ApiResult<Vec<TagSchema>> {
    let store = state.db.stores().select_404(store_id).await?;
    let tags = state.db.stores().tags(store.id).await?;

    let mut body = Vec::with_capacity(tags.len());
    for tag in tags {
        body.push(tag_schema(&state.db, tag).await?);
    }
    Ok(ApiResponse::success(body))
}

/// POST /store/:store_id/tag
pub async fn create_in_store(
    State(state): State<AppState>,
    AdminUser(user): AdminUser,
    ApiPath(store_id): ApiPath<i64>,
    ValidJson(payload): ValidJson<TagCreate>,
) -> ApiResult<TagSchema> {
    let store = state.db.stores().select_404(store_id).await?;

    let tag = state
        .db
        .tags()
        .insert(store.id, payload.name.trim())
        .await
        .map_err(duplicate_name)?;

    tracing::info!("User {} created tag {} in store {}", user.user_id, tag.id, store.id);
    Ok(ApiResponse::created(tag_schema(&state.db, tag).await?))
}

/// GET /tag/:tag_id
pub async fn get(State(state): State<AppState>, ApiPath(tag_id): ApiPath<i64>) -> ApiResult<TagSchema> {
    let tag = state.db.tags().select_404(tag_id).await?;
    Ok(ApiResponse::success(tag_schema(&state.db, tag).await?))
}

/// DELETE /tag/:tag_id - Refused while any item carries the tag
pub async fn delete(
    State(state): State<AppState>,
    AdminUser(user): AdminUser,
    ApiPath(tag_id): ApiPath<i64>,
) -> ApiResult<Message> {
    if !state.db.tags().delete_unlinked(tag_id).await? {
        return Err(ApiError::bad_request(
            "Could not delete tag. Make sure tag is not associated with any items, then try again.",
        ));
    }

    tracing::info!("User {} deleted tag {}", user.user_id, tag_id);
    Ok(ApiResponse::accepted(Message::new("Tag deleted.")))
}

/// POST /item/:item_id/tag/:tag_id - Attach a tag to an item of the same store
pub async fn link_to_item(
    State(state): State<AppState>,
    AdminUser(_user): AdminUser,
    ApiPath((item_id, tag_id)): ApiPath<(i64, i64)>,
) -> ApiResult<TagSchema> {
    let item = state.db.items().select_404(item_id).await?;
    let tag = state.db.tags().select_404(tag_id).await?;

    if item.store_id != tag.store_id {
        return Err(ApiError::bad_request(
            "Make sure item and tag belong to the same store before linking.",
        ));
    }

    if !state.db.items().link_tag(item.id, tag.id).await? {
        tracing::debug!("Tag {} already linked to item {}", tag.id, item.id);
    }

    Ok(ApiResponse::created(tag_schema(&state.db, tag).await?))
}

/// DELETE /item/:item_id/tag/:tag_id
pub async fn unlink_from_item(
    State(state): State<AppState>,
    AdminUser(_user): AdminUser,
    ApiPath((item_id, tag_id)): ApiPath<(i64, i64)>,
) -> ApiResult<TagAndItem> {
    let item = state.db.items().select_404(item_id).await?;
    let tag = state.db.tags().select_404(tag_id).await?;

    if !state.db.items().unlink_tag(item.id, tag.id).await? {
        return Err(ApiError::not_found("Tag is not linked to this item."));
    }

    Ok(ApiResponse::success(TagAndItem {
        message: "Item removed from tag".to_string(),
        item: item_schema(&state.db, item).await?,
        tag: tag_schema(&state.db, tag).await?,
    }))
}
