use super::Repository;
use crate::database::manager::DatabaseError;
use crate::database::models::{Item, Store, Tag};

const DUPLICATE_STORE: &str = "A store with that name already exists.";

impl Repository<Store> {
    pub async fn insert(&self, name: &str) -> Result<Store, DatabaseError> {
        sqlx::query_as::<_, Store>("INSERT INTO stores (name) VALUES (?) RETURNING id, name")
            .bind(name)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DatabaseError::conflict_or(e, DUPLICATE_STORE))
    }

    pub async fn rename(&self, id: i64, name: &str) -> Result<Store, DatabaseError> {
        sqlx::query_as::<_, Store>("UPDATE stores SET name = ? WHERE id = ? RETURNING id, name")
            .bind(name)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DatabaseError::conflict_or(e, DUPLICATE_STORE))?
            .ok_or_else(|| DatabaseError::NotFound("Store not found.".to_string()))
    }

    pub async fn items(&self, store_id: i64) -> Result<Vec<Item>, DatabaseError> {
        Ok(sqlx::query_as::<_, Item>(
            "SELECT id, name, price, store_id FROM items WHERE store_id = ? ORDER BY id",
        )
        .bind(store_id)
        .fetch_all(&self.pool)
        .await?)
    }

    pub async fn tags(&self, store_id: i64) -> Result<Vec<Tag>, DatabaseError> {
        Ok(
            sqlx::query_as::<_, Tag>("SELECT id, name, store_id FROM tags WHERE store_id = ? ORDER BY id")
                .bind(store_id)
                .fetch_all(&self.pool)
                .await?,
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::database::DatabaseError;
    use crate::testing::memory_database;

    #[tokio::test]
    async fn rejects_duplicate_store_names() {
        let db = memory_database().await;
        let stores = db.stores();

        let first = stores.insert("My Store").await.unwrap();
        assert_eq!(first.name, "My Store");

        let err = stores.insert("My Store").await.unwrap_err();
        assert!(matches!(err, DatabaseError::Conflict(_)));
    }

    #[tokio::test]
    async fn rename_checks_existence_and_uniqueness() {
        let db = memory_database().await;
        let stores = db.stores();
        let a = stores.insert("A").await.unwrap();
        stores.insert("B").await.unwrap();

        assert_eq!(stores.rename(a.id, "C").await.unwrap().name, "C");
        assert!(matches!(stores.rename(a.id, "B").await, Err(DatabaseError::Conflict(_))));
        assert!(matches!(stores.rename(999, "D").await, Err(DatabaseError::NotFound(_))));
    }

    #[tokio::test]
    async fn deleting_store_cascades_to_items_and_tags() {
        let db = memory_database().await;
        let store = db.stores().insert("Doomed").await.unwrap();
        let item = db.items().insert("Chair", 15.99, store.id).await.unwrap();
        let tag = db.tags().insert(store.id, "furniture").await.unwrap();
        db.items().link_tag(item.id, tag.id).await.unwrap();

        db.stores().delete_404(store.id).await.unwrap();

        assert!(db.items().select_one(item.id).await.unwrap().is_none());
        assert!(db.tags().select_one(tag.id).await.unwrap().is_none());
        assert!(db.stores().items(store.id).await.unwrap().is_empty());
    }
}
