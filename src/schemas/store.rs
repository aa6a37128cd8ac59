use serde::{Deserialize, Serialize};

use super::{FieldCheck, PlainItem, PlainTag, Validate};
use crate::database::models::{Item, Store, Tag};
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreCreate {
    pub name: String,
}

impl Validate for StoreCreate {
    fn validate(&self) -> Result<(), ApiError> {
        FieldCheck::default().name("name", &self.name).finish()
    }
}

/// Fields a PUT may change; absent fields keep their stored value
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreUpdate {
    pub name: Option<String>,
}

impl Validate for StoreUpdate {
    fn validate(&self) -> Result<(), ApiError> {
        let mut check = FieldCheck::default();
        if let Some(name) = &self.name {
            check.name("name", name);
        }
        check.finish()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlainStore {
    pub id: i64,
    pub name: String,
}

impl From<Store> for PlainStore {
    fn from(store: Store) -> Self {
        Self {
            id: store.id,
            name: store.name,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StoreSchema {
    pub id: i64,
    pub name: String,
    pub items: Vec<PlainItem>,
    pub tags: Vec<PlainTag>,
}

impl StoreSchema {
    pub fn new(store: Store, items: Vec<Item>, tags: Vec<Tag>) -> Self {
        Self {
            id: store.id,
            name: store.name,
            items: items.into_iter().map(PlainItem::from).collect(),
            tags: tags.into_iter().map(PlainTag::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_rejects_unknown_and_output_only_fields() {
        assert!(serde_json::from_str::<StoreCreate>(r#"{"name":"A","id":3}"#).is_err());
        assert!(serde_json::from_str::<StoreCreate>(r#"{}"#).is_err());
    }

    #[test]
    fn empty_update_is_valid() {
        let update: StoreUpdate = serde_json::from_str("{}").unwrap();
        assert!(update.name.is_none());
        assert!(update.validate().is_ok());
    }

    #[test]
    fn update_validates_provided_name() {
        let update: StoreUpdate = serde_json::from_str(r#"{"name":""}"#).unwrap();
        assert!(update.validate().is_err());
    }
}
