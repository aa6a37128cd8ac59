use serde::{Deserialize, Serialize};

use super::{FieldCheck, Validate};
use crate::database::models::User;
use crate::error::ApiError;

/// Body of `/register` and `/login`
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserCredentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for UserCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserCredentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

impl Validate for UserCredentials {
    fn validate(&self) -> Result<(), ApiError> {
        FieldCheck::default()
            .name("username", &self.username)
            .non_empty("password", &self.password)
            .finish()
    }
}

#[derive(Debug, Serialize)]
pub struct UserSchema {
    pub id: i64,
    pub username: String,
}

impl From<User> for UserSchema {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Debug, Serialize)]
pub struct AccessToken {
    pub access_token: String,
}
