// handlers/mod.rs - one module per resource
//
// Reads of stores, tags and users are public. Items need an access token to
// read. Every mutation needs an access token with the admin claim, and item
// creation additionally needs a fresh token. The gate is expressed by the
// extractor each handler takes (`AuthUser`, `AdminUser`, `FreshAdminUser`,
// `RefreshUser`).

mod expand;

pub mod item;
pub mod root;
pub mod store;
pub mod tag;
pub mod user;

use crate::database::DatabaseError;
use crate::error::ApiError;

/// Uniqueness violations on resource names are client errors (400), unlike
/// duplicate registrations which keep their 409
fn duplicate_name(err: DatabaseError) -> ApiError {
    match err {
        DatabaseError::Conflict(msg) => ApiError::duplicate(msg),
        other => other.into(),
    }
}
