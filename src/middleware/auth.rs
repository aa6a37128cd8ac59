use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap},
};

use crate::auth::{Claims, JwtError, TokenKind};
use crate::error::ApiError;
use crate::state::AppState;

/// Authenticated user context extracted from an access token
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub user_id: i64,
    pub claims: Claims,
}

impl TryFrom<Claims> for AuthUser {
    type Error = JwtError;

    fn try_from(claims: Claims) -> Result<Self, Self::Error> {
        Ok(Self {
            user_id: claims.user_id()?,
            claims,
        })
    }
}

impl AuthUser {
    pub fn is_admin(&self) -> bool {
        self.claims.is_admin
    }

    pub fn is_fresh(&self) -> bool {
        self.claims.fresh
    }
}

/// Access token carrying `is_admin = true`
#[derive(Clone, Debug)]
pub struct AdminUser(pub AuthUser);

/// Fresh access token carrying `is_admin = true`
#[derive(Clone, Debug)]
pub struct FreshAdminUser(pub AuthUser);

/// Valid refresh token
#[derive(Clone, Debug)]
pub struct RefreshUser(pub AuthUser);

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        authenticate(&parts.headers, state, TokenKind::Access).await
    }
}

#[async_trait]
impl FromRequestParts<AppState> for AdminUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let user = authenticate(&parts.headers, state, TokenKind::Access).await?;
        require_admin(&user)?;
        Ok(AdminUser(user))
    }
}

#[async_trait]
impl FromRequestParts<AppState> for FreshAdminUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let user = authenticate(&parts.headers, state, TokenKind::Access).await?;
        if !user.is_fresh() {
            tracing::warn!("Rejected non-fresh token for user {}", user.user_id);
            return Err(JwtError::NotFresh.into());
        }
        require_admin(&user)?;
        Ok(FreshAdminUser(user))
    }
}

#[async_trait]
impl FromRequestParts<AppState> for RefreshUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        authenticate(&parts.headers, state, TokenKind::Refresh)
            .await
            .map(RefreshUser)
    }
}

fn require_admin(user: &AuthUser) -> Result<(), ApiError> {
    if user.is_admin() {
        return Ok(());
    }
    tracing::warn!("User {} attempted an admin operation", user.user_id);
    Err(JwtError::NotAdmin.into())
}

/// Decode the bearer token, consult the revocation registry, then check its kind
async fn authenticate(headers: &HeaderMap, state: &AppState, expected: TokenKind) -> Result<AuthUser, ApiError> {
    let token = extract_jwt_from_headers(headers).map_err(JwtError::MissingToken)?;

    let claims = state.tokens.verify(&token).map_err(|e| {
        tracing::warn!("Token verification failed: {}", e);
        e
    })?;

    // Revoked tokens are refused before anything else looks at the claims
    if state.blocklist.is_revoked(&claims.jti).await {
        tracing::warn!("Rejected revoked token {}", claims.jti);
        return Err(JwtError::Revoked.into());
    }

    if claims.kind != expected {
        return Err(JwtError::WrongKind(expected).into());
    }

    Ok(AuthUser::try_from(claims)?)
}

/// Extract JWT token from Authorization header
fn extract_jwt_from_headers(headers: &HeaderMap) -> Result<String, String> {
    let auth_header = headers
        .get(axum::http::header::AUTHORIZATION)
        .ok_or_else(|| "Missing Authorization header".to_string())?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| "Invalid Authorization header format".to_string())?;

    if let Some(token) = auth_str.strip_prefix("Bearer ") {
        if token.trim().is_empty() {
            return Err("Empty JWT token".to_string());
        }
        Ok(token.trim().to_string())
    } else {
        Err("Authorization header must use Bearer token format".to_string())
    }
}
