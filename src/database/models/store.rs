use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Table;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Store {
    pub id: i64,
    pub name: String,
}

impl Table for Store {
    const TABLE: &'static str = "stores";
    const COLUMNS: &'static str = "id, name";
    const NOT_FOUND: &'static str = "Store not found.";
}
