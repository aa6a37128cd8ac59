use axum::extract::State;

use crate::auth::password::{hash_password, verify_password};
use crate::auth::JwtError;
use crate::error::ApiError;
use crate::middleware::{AdminUser, ApiPath, ApiResponse, ApiResult, AuthUser, RefreshUser, ValidJson};
use crate::schemas::user::{AccessToken, TokenPair};
use crate::schemas::{Message, UserCredentials, UserSchema};
use crate::state::AppState;

/// POST /register - Create an account with a hashed password
pub async fn register(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<UserCredentials>,
) -> ApiResult<Message> {
    let users = state.db.users();
    let username = payload.username.trim();

    if users.find_by_username(username).await?.is_some() {
        return Err(ApiError::conflict("A user with that username already exists."));
    }

    let password_hash = hash_password(&payload.password)?;
    let user = users.insert(username, &password_hash).await?;

    tracing::info!("Registered user {} ({})", user.id, user.username);
    Ok(ApiResponse::created(Message::new("User created successfully.")))
}

/// POST /login - Exchange credentials for a fresh access token and a refresh token
pub async fn login(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<UserCredentials>,
) -> ApiResult<TokenPair> {
    let username = payload.username.trim();
    let user = state.db.users().find_by_username(username).await?;

    let user = match user {
        Some(user) if verify_password(&payload.password, &user.password)? => user,
        _ => {
            tracing::warn!("Failed login attempt for '{}'", username);
            return Err(ApiError::unauthorized("Invalid credentials."));
        }
    };

    let is_admin = state.config.is_admin(user.id);
    let access_token = state.tokens.issue_access(user.id, true, is_admin)?;
    let refresh_token = state.tokens.issue_refresh(user.id, is_admin)?;

    tracing::info!("User {} logged in", user.id);
    Ok(ApiResponse::success(TokenPair {
        access_token,
        refresh_token,
    }))
}

/// POST /refresh - Trade a refresh token (once) for a non-fresh access token
pub async fn refresh(
    State(state): State<AppState>,
    RefreshUser(user): RefreshUser,
) -> ApiResult<AccessToken> {
    // Only the caller that inserts the jti may issue a token
    if !state.blocklist.revoke(&user.claims.jti, user.claims.exp).await {
        tracing::warn!("Refresh token {} was already used", user.claims.jti);
        return Err(JwtError::Revoked.into());
    }

    let access_token = state
        .tokens
        .issue_access(user.user_id, false, user.is_admin())?;

    Ok(ApiResponse::success(AccessToken { access_token }))
}

/// POST /logout - Revoke the presented access token
pub async fn logout(State(state): State<AppState>, user: AuthUser) -> ApiResult<Message> {
    if !state.blocklist.revoke(&user.claims.jti, user.claims.exp).await {
        return Err(JwtError::Revoked.into());
    }

    tracing::info!("User {} logged out", user.user_id);
    Ok(ApiResponse::success(Message::new("Successfully logged out.")))
}

/// GET /user/:user_id
pub async fn get(State(state): State<AppState>, ApiPath(user_id): ApiPath<i64>) -> ApiResult<UserSchema> {
    let user = state.db.users().select_404(user_id).await?;
    Ok(ApiResponse::success(user.into()))
}

/// DELETE /user/:user_id - Admins may remove any account but their own
pub async fn delete(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    ApiPath(user_id): ApiPath<i64>,
) -> ApiResult<Message> {
    let users = state.db.users();
    let user = users.select_404(user_id).await?;

    if user.id == admin.user_id {
        return Err(ApiError::method_not_allowed("User cannot delete themselves"));
    }

    users.delete_404(user.id).await?;

    tracing::info!("User {} deleted user {}", admin.user_id, user.id);
    Ok(ApiResponse::success(Message::new("User deleted.")))
}
