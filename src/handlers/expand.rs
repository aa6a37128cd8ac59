use crate::database::models::{Item, Store, Tag};
use crate::database::Database;
use crate::error::ApiError;
use crate::schemas::{ItemSchema, StoreSchema, TagSchema};

pub async fn store_schema(db: &Database, store: Store) -> Result<StoreSchema, ApiError> {
    let stores = db.stores();
    let items = stores.items(store.id).await?;
    let tags = stores.tags(store.id).await?;
    Ok(StoreSchema::new(store, items, tags))
}

pub async fn item_schema(db: &Database, item: Item) -> Result<ItemSchema, ApiError> {
    let store = db.stores().select_404(item.store_id).await?;
    let tags = db.items().tags(item.id).await?;
    Ok(ItemSchema::new(item, store, tags))
}

pub async fn tag_schema(db: &Database, tag: Tag) -> Result<TagSchema, ApiError> {
    let store = db.stores().select_404(tag.store_id).await?;
    let items = db.tags().items(tag.id).await?;
    Ok(TagSchema::new(tag, store, items))
}
