use sqlx::FromRow;

use super::Table;

/// Registered account; `password` holds the argon2 PHC string and is never serialized
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password: String,
}

impl Table for User {
    const TABLE: &'static str = "users";
    const COLUMNS: &'static str = "id, username, password";
    const NOT_FOUND: &'static str = "User not found.";
}
