use super::Repository;
use crate::database::manager::DatabaseError;
use crate::database::models::User;

impl Repository<User> {
    pub async fn insert(&self, username: &str, password_hash: &str) -> Result<User, DatabaseError> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (username, password) VALUES (?, ?) RETURNING id, username, password",
        )
        .bind(username)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DatabaseError::conflict_or(e, "A user with that username already exists."))
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, DatabaseError> {
        Ok(
            sqlx::query_as::<_, User>("SELECT id, username, password FROM users WHERE username = ?")
                .bind(username)
                .fetch_optional(&self.pool)
                .await?,
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::database::DatabaseError;
    use crate::testing::memory_database;

    #[tokio::test]
    async fn finds_user_by_username() {
        let db = memory_database().await;
        let created = db.users().insert("alice", "$argon2id$stub").await.unwrap();

        let found = db.users().find_by_username("alice").await.unwrap().unwrap();
        assert_eq!(found.id, created.id);
        assert!(db.users().find_by_username("bob").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn usernames_are_unique() {
        let db = memory_database().await;
        db.users().insert("alice", "x").await.unwrap();
        assert!(matches!(
            db.users().insert("alice", "y").await,
            Err(DatabaseError::Conflict(_))
        ));
    }
}
