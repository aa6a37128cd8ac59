use super::Repository;
use crate::database::manager::DatabaseError;
use crate::database::models::{Item, Tag};

impl Repository<Tag> {
    pub async fn insert(&self, store_id: i64, name: &str) -> Result<Tag, DatabaseError> {
        sqlx::query_as::<_, Tag>(
            "INSERT INTO tags (name, store_id) VALUES (?, ?) RETURNING id, name, store_id",
        )
        .bind(name)
        .bind(store_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DatabaseError::conflict_or(e, "A tag with that name already exists."))
    }

    pub async fn items(&self, tag_id: i64) -> Result<Vec<Item>, DatabaseError> {
        Ok(sqlx::query_as::<_, Item>(
            r#"
            SELECT i.id, i.name, i.price, i.store_id
            FROM items i
            JOIN items_tags it ON it.item_id = i.id
            WHERE it.tag_id = ?
            ORDER BY i.id
            "#,
        )
        .bind(tag_id)
        .fetch_all(&self.pool)
        .await?)
    }

    /// Delete the tag unless an item still references it.
    ///
    /// Returns `Ok(false)` when the tag is linked and was kept.
    pub async fn delete_unlinked(&self, id: i64) -> Result<bool, DatabaseError> {
        let mut tx = self.pool.begin().await?;

        let found: Option<i64> = sqlx::query_scalar("SELECT id FROM tags WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        if found.is_none() {
            return Err(DatabaseError::NotFound("Tag not found.".to_string()));
        }

        let linked: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM items_tags WHERE tag_id = ?")
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;
        if linked > 0 {
            return Ok(false);
        }

        sqlx::query("DELETE FROM tags WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(true)
    }
}
