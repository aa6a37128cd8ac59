use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Table;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Tag {
    pub id: i64,
    pub name: String,
    pub store_id: i64,
}

impl Table for Tag {
    const TABLE: &'static str = "tags";
    const COLUMNS: &'static str = "id, name, store_id";
    const NOT_FOUND: &'static str = "Tag not found.";
}
