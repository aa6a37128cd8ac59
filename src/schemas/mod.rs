//! Request payloads and response shapes for every resource.
//!
//! Request structs reject unknown fields and validate their content through
//! [`Validate`]; response structs nest only the "plain" form of related
//! records so a store never embeds items that embed the store again.

pub mod item;
pub mod store;
pub mod tag;
pub mod user;

use serde::Serialize;

use crate::error::{ApiError, FieldErrors};

pub use item::{ItemCreate, ItemSchema, ItemUpdate, PlainItem};
pub use store::{PlainStore, StoreCreate, StoreSchema, StoreUpdate};
pub use tag::{PlainTag, TagAndItem, TagCreate, TagSchema};
pub use user::{UserCredentials, UserSchema};

pub const MAX_NAME_LENGTH: usize = 80;

/// Content checks that run after a payload has been deserialized
pub trait Validate {
    fn validate(&self) -> Result<(), ApiError>;
}

/// Plain `{"message": ...}` body
#[derive(Debug, Serialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Collects per-field problems and turns them into a single validation error
#[derive(Debug, Default)]
pub(crate) struct FieldCheck {
    errors: FieldErrors,
}

impl FieldCheck {
    pub fn name(&mut self, field: &str, value: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.errors.insert(field.to_string(), "Must not be blank.".to_string());
        } else if value.chars().count() > MAX_NAME_LENGTH {
            self.errors.insert(
                field.to_string(),
                format!("Must be at most {} characters.", MAX_NAME_LENGTH),
            );
        }
        self
    }

    pub fn price(&mut self, field: &str, value: f64) -> &mut Self {
        if !value.is_finite() || value < 0.0 {
            self.errors
                .insert(field.to_string(), "Must be a non-negative number.".to_string());
        }
        self
    }

    pub fn non_empty(&mut self, field: &str, value: &str) -> &mut Self {
        if value.is_empty() {
            self.errors.insert(field.to_string(), "Must not be empty.".to_string());
        }
        self
    }

    pub fn finish(&mut self) -> Result<(), ApiError> {
        if self.errors.is_empty() {
            return Ok(());
        }
        Err(ApiError::validation_error(
            "Invalid request payload",
            Some(std::mem::take(&mut self.errors)),
        ))
    }
}
