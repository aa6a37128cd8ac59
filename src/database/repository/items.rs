use super::Repository;
use crate::database::manager::DatabaseError;
use crate::database::models::{Item, Tag};

impl Repository<Item> {
    pub async fn insert(&self, name: &str, price: f64, store_id: i64) -> Result<Item, DatabaseError> {
        Ok(sqlx::query_as::<_, Item>(
            "INSERT INTO items (name, price, store_id) VALUES (?, ?, ?) RETURNING id, name, price, store_id",
        )
        .bind(name)
        .bind(price)
        .bind(store_id)
        .fetch_one(&self.pool)
        .await?)
    }

    /// Write every column of `item` back to its row.
    ///
    /// Links to tags of any other store are dropped in the same transaction,
    /// so moving an item never leaves it tagged across stores.
    pub async fn save(&self, item: &Item) -> Result<Item, DatabaseError> {
        let mut tx = self.pool.begin().await?;

        let saved = sqlx::query_as::<_, Item>(
            "UPDATE items SET name = ?, price = ?, store_id = ? WHERE id = ? RETURNING id, name, price, store_id",
        )
        .bind(&item.name)
        .bind(item.price)
        .bind(item.store_id)
        .bind(item.id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| DatabaseError::NotFound("Item not found.".to_string()))?;

        let dropped = sqlx::query(
            "DELETE FROM items_tags WHERE item_id = ? AND tag_id IN (SELECT id FROM tags WHERE store_id != ?)",
        )
        .bind(saved.id)
        .bind(saved.store_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();
        if dropped > 0 {
            tracing::debug!("Unlinked {} foreign tag(s) from item {}", dropped, saved.id);
        }

        tx.commit().await?;
        Ok(saved)
    }

    pub async fn tags(&self, item_id: i64) -> Result<Vec<Tag>, DatabaseError> {
        Ok(sqlx::query_as::<_, Tag>(
            r#"
            SELECT t.id, t.name, t.store_id
            FROM tags t
            JOIN items_tags it ON it.tag_id = t.id
            WHERE it.item_id = ?
            ORDER BY t.id
            "#,
        )
        .bind(item_id)
        .fetch_all(&self.pool)
        .await?)
    }

    /// Returns false when the pair was already linked
    pub async fn link_tag(&self, item_id: i64, tag_id: i64) -> Result<bool, DatabaseError> {
        let result = sqlx::query("INSERT OR IGNORE INTO items_tags (item_id, tag_id) VALUES (?, ?)")
            .bind(item_id)
            .bind(tag_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Returns false when the pair was not linked
    pub async fn unlink_tag(&self, item_id: i64, tag_id: i64) -> Result<bool, DatabaseError> {
        let result = sqlx::query("DELETE FROM items_tags WHERE item_id = ? AND tag_id = ?")
            .bind(item_id)
            .bind(tag_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use crate::database::DatabaseError;
    use crate::testing::{memory_database, seed_store};

    #[tokio::test]
    async fn save_overwrites_row() {
        let db = memory_database().await;
        let store = seed_store(&db, "Shop").await;
        let other = seed_store(&db, "Other").await;
        let mut item = db.items().insert("Chair", 15.99, store.id).await.unwrap();

        item.price = 9.5;
        item.store_id = other.id;
        let saved = db.items().save(&item).await.unwrap();

        assert_eq!(saved, item);
        assert_eq!(db.items().select_404(item.id).await.unwrap(), item);
    }

    #[tokio::test]
    async fn moving_item_drops_tags_of_old_store() {
        let db = memory_database().await;
        let store = seed_store(&db, "Shop").await;
        let other = seed_store(&db, "Other").await;
        let mut item = db.items().insert("Chair", 1.0, store.id).await.unwrap();
        let wood = db.tags().insert(store.id, "wood").await.unwrap();
        db.items().link_tag(item.id, wood.id).await.unwrap();

        item.price = 2.0;
        db.items().save(&item).await.unwrap();
        assert_eq!(db.items().tags(item.id).await.unwrap(), vec![wood.clone()]);

        item.store_id = other.id;
        db.items().save(&item).await.unwrap();
        assert!(db.items().tags(item.id).await.unwrap().is_empty());
        assert!(db.tags().items(wood.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn save_missing_item_is_not_found() {
        let db = memory_database().await;
        let store = seed_store(&db, "Shop").await;
        let mut item = db.items().insert("Chair", 1.0, store.id).await.unwrap();
        db.items().delete_404(item.id).await.unwrap();

        item.name = "Table".to_string();
        assert!(matches!(db.items().save(&item).await, Err(DatabaseError::NotFound(_))));
    }

    #[tokio::test]
    async fn linking_is_idempotent_and_reversible() {
        let db = memory_database().await;
        let store = seed_store(&db, "Shop").await;
        let item = db.items().insert("Chair", 1.0, store.id).await.unwrap();
        let tag = db.tags().insert(store.id, "wood").await.unwrap();

        assert!(db.items().link_tag(item.id, tag.id).await.unwrap());
        assert!(!db.items().link_tag(item.id, tag.id).await.unwrap());
        assert_eq!(db.items().tags(item.id).await.unwrap(), vec![tag.clone()]);

        assert!(db.items().unlink_tag(item.id, tag.id).await.unwrap());
        assert!(!db.items().unlink_tag(item.id, tag.id).await.unwrap());
        assert!(db.items().tags(item.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn item_requires_existing_store() {
        let db = memory_database().await;
        assert!(db.items().insert("Orphan", 1.0, 42).await.is_err());
    }
}
