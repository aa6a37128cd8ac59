use serde::{Deserialize, Serialize};

use super::{FieldCheck, ItemSchema, PlainItem, PlainStore, Validate};
use crate::database::models::{Item, Store, Tag};
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TagCreate {
    pub name: String,
}

impl Validate for TagCreate {
    fn validate(&self) -> Result<(), ApiError> {
        FieldCheck::default().name("name", &self.name).finish()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlainTag {
    pub id: i64,
    pub name: String,
}

impl From<Tag> for PlainTag {
    fn from(tag: Tag) -> Self {
        Self {
            id: tag.id,
            name: tag.name,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TagSchema {
    pub id: i64,
    pub name: String,
    pub store: PlainStore,
    pub items: Vec<PlainItem>,
}

impl TagSchema {
    pub fn new(tag: Tag, store: Store, items: Vec<Item>) -> Self {
        Self {
            id: tag.id,
            name: tag.name,
            store: store.into(),
            items: items.into_iter().map(PlainItem::from).collect(),
        }
    }
}

/// Body returned when a tag is detached from an item
#[derive(Debug, Serialize)]
pub struct TagAndItem {
    pub message: String,
    pub item: ItemSchema,
    pub tag: TagSchema,
}
