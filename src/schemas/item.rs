use serde::{Deserialize, Serialize};

use super::{FieldCheck, PlainStore, PlainTag, Validate};
use crate::database::models::{Item, Store, Tag};
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ItemCreate {
    pub name: String,
    pub price: f64,
    pub store_id: i64,
}

impl Validate for ItemCreate {
    fn validate(&self) -> Result<(), ApiError> {
        FieldCheck::default()
            .name("name", &self.name)
            .price("price", self.price)
            .finish()
    }
}

/// Fields a PUT may change; absent fields keep their stored value
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ItemUpdate {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub store_id: Option<i64>,
}

impl ItemUpdate {
    /// Overlay the provided fields onto `item`
    pub fn apply(self, mut item: Item) -> Item {
        if let Some(name) = self.name {
            item.name = name;
        }
        if let Some(price) = self.price {
            item.price = price;
        }
        if let Some(store_id) = self.store_id {
            item.store_id = store_id;
        }
        item
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none() && self.store_id.is_none()
    }
}

impl Validate for ItemUpdate {
    fn validate(&self) -> Result<(), ApiError> {
        let mut check = FieldCheck::default();
        if let Some(name) = &self.name {
            check.name("name", name);
        }
        if let Some(price) = self.price {
            check.price("price", price);
        }
        check.finish()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlainItem {
    pub id: i64,
    pub name: String,
    pub price: f64,
}

impl From<Item> for PlainItem {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
            price: item.price,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ItemSchema {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub store: PlainStore,
    pub tags: Vec<PlainTag>,
}

impl ItemSchema {
    pub fn new(item: Item, store: Store, tags: Vec<Tag>) -> Self {
        Self {
            id: item.id,
            name: item.name,
            price: item.price,
            store: store.into(),
            tags: tags.into_iter().map(PlainTag::from).collect(),
        }
    }
}
