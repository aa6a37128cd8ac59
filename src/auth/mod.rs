pub mod blocklist;
pub mod password;

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::config::SecurityConfig;

pub use blocklist::Blocklist;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Access => write!(f, "access"),
            TokenKind::Refresh => write!(f, "refresh"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub sub: String,
    pub jti: String,
    #[serde(rename = "type")]
    pub kind: TokenKind,
    pub fresh: bool,
    #[serde(default)]
    pub is_admin: bool,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn new(user_id: i64, kind: TokenKind, fresh: bool, is_admin: bool, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            sub: user_id.to_string(),
            jti: Uuid::new_v4().to_string(),
            kind,
            fresh,
            is_admin,
            exp: (now + ttl).timestamp(),
            iat: now.timestamp(),
        }
    }

    pub fn user_id(&self) -> Result<i64, JwtError> {
        self.sub
            .parse()
            .map_err(|_| JwtError::Invalid(format!("subject '{}' is not a user id", self.sub)))
    }
}

#[derive(Debug, Error)]
pub enum JwtError {
    #[error("JWT generation error: {0}")]
    TokenGeneration(String),

    #[error("Invalid JWT secret")]
    InvalidSecret,

    #[error("{0}")]
    MissingToken(String),

    #[error("Invalid token: {0}")]
    Invalid(String),

    #[error("Token has expired.")]
    Expired,

    #[error("Token has been revoked.")]
    Revoked,

    #[error("Only {0} tokens are allowed.")]
    WrongKind(TokenKind),

    #[error("Fresh token required.")]
    NotFresh,

    #[error("Admin privilege required.")]
    NotAdmin,
}

/// Signing keys and lifetimes used to issue and verify tokens
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl TokenKeys {
    pub fn from_config(security: &SecurityConfig) -> Result<Self, JwtError> {
        if security.jwt_secret.is_empty() {
            return Err(JwtError::InvalidSecret);
        }

        Ok(Self {
            encoding: EncodingKey::from_secret(security.jwt_secret.as_bytes()),
            decoding: DecodingKey::from_secret(security.jwt_secret.as_bytes()),
            validation: Validation::default(),
            access_ttl: Duration::minutes(security.access_token_expiry_minutes),
            refresh_ttl: Duration::days(security.refresh_token_expiry_days),
        })
    }

    pub fn issue_access(&self, user_id: i64, fresh: bool, is_admin: bool) -> Result<String, JwtError> {
        self.sign(&Claims::new(user_id, TokenKind::Access, fresh, is_admin, self.access_ttl))
    }

    pub fn issue_refresh(&self, user_id: i64, is_admin: bool) -> Result<String, JwtError> {
        self.sign(&Claims::new(user_id, TokenKind::Refresh, false, is_admin, self.refresh_ttl))
    }

    pub fn sign(&self, claims: &Claims) -> Result<String, JwtError> {
        encode(&Header::default(), claims, &self.encoding)
            .map_err(|e| JwtError::TokenGeneration(e.to_string()))
    }

    /// Verify signature and expiry, returning the decoded claims
    pub fn verify(&self, token: &str) -> Result<Claims, JwtError> {
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::Expired,
                _ => JwtError::Invalid(e.to_string()),
            })
    }
}
