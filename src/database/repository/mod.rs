mod items;
mod stores;
mod tags;
mod users;

use sqlx::{sqlite::SqliteRow, FromRow, SqlitePool};

use crate::database::manager::{Database, DatabaseError};
use crate::database::models::{Item, Store, Table, Tag, User};

/// Table-bound data access. Entity-specific operations live in the
/// `impl Repository<Entity>` blocks of the sibling modules.
pub struct Repository<T> {
    pool: SqlitePool,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> Repository<T>
where
    T: Table + for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
{
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            _phantom: std::marker::PhantomData,
        }
    }

    pub async fn select_all(&self) -> Result<Vec<T>, DatabaseError> {
        let sql = format!("SELECT {} FROM {} ORDER BY id", T::COLUMNS, T::TABLE);
        Ok(sqlx::query_as::<_, T>(&sql).fetch_all(&self.pool).await?)
    }

    pub async fn select_one(&self, id: i64) -> Result<Option<T>, DatabaseError> {
        let sql = format!("SELECT {} FROM {} WHERE id = ?", T::COLUMNS, T::TABLE);
        Ok(sqlx::query_as::<_, T>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    pub async fn select_404(&self, id: i64) -> Result<T, DatabaseError> {
        self.select_one(id)
            .await?
            .ok_or_else(|| DatabaseError::NotFound(T::NOT_FOUND.to_string()))
    }

    pub async fn exists(&self, id: i64) -> Result<bool, DatabaseError> {
        let sql = format!("SELECT COUNT(*) FROM {} WHERE id = ?", T::TABLE);
        let count: i64 = sqlx::query_scalar(&sql).bind(id).fetch_one(&self.pool).await?;
        Ok(count > 0)
    }

    pub async fn delete_404(&self, id: i64) -> Result<(), DatabaseError> {
        let sql = format!("DELETE FROM {} WHERE id = ?", T::TABLE);
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::NotFound(T::NOT_FOUND.to_string()));
        }
        Ok(())
    }
}

impl Database {
    pub fn stores(&self) -> Repository<Store> {
        Repository::new(self.pool().clone())
    }

    pub fn items(&self) -> Repository<Item> {
        Repository::new(self.pool().clone())
    }

    pub fn tags(&self) -> Repository<Tag> {
        Repository::new(self.pool().clone())
    }

    pub fn users(&self) -> Repository<User> {
        Repository::new(self.pool().clone())
    }
}
