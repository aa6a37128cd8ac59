use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET / - Service description and route overview
pub async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "name": "Stores REST API",
        "version": version,
        "description": "Stores, items and tags behind JWT authentication",
        "endpoints": {
            "stores": "/store[/:store_id] (read public, write admin)",
            "items": "/item[/:item_id] (read authenticated, write admin, create fresh admin)",
            "tags": "/store/:store_id/tag, /tag/:tag_id (read public, write admin)",
            "links": "/item/:item_id/tag/:tag_id (admin)",
            "auth": "/register, /login, /refresh, /logout",
            "users": "/user/:user_id (read public, delete admin)",
            "health": "/health (public)",
        }
    }))
}

/// GET /health - 503 when the database cannot be reached
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match state.db.health_check().await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "degraded",
                    "timestamp": now,
                    "database_error": e.to_string()
                })),
            )
        }
    }
}
