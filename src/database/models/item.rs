use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Table;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub store_id: i64,
}

impl Table for Item {
    const TABLE: &'static str = "items";
    const COLUMNS: &'static str = "id, name, price, store_id";
    const NOT_FOUND: &'static str = "Item not found.";
}
