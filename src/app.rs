use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::SecurityConfig;
use crate::handlers::{item, root, store, tag, user};
use crate::state::AppState;

/// Build the full router with global middleware attached
pub fn app(state: AppState) -> Router {
    let config = state.config.clone();

    let mut router = Router::new()
        // Public
        .route("/", get(root::root))
        .route("/health", get(root::health))
        .merge(store_routes())
        .merge(item_routes())
        .merge(tag_routes())
        .merge(user_routes())
        .layer(DefaultBodyLimit::max(config.api.max_request_size_bytes));

    if let Some(cors) = cors_layer(&config.security) {
        router = router.layer(cors);
    }
    if config.api.enable_request_logging {
        router = router.layer(TraceLayer::new_for_http());
    }

    router.with_state(state)
}

fn store_routes() -> Router<AppState> {
    Router::new()
        .route("/store", get(store::list).post(store::create))
        .route(
            "/store/:store_id",
            get(store::get).put(store::update).delete(store::delete),
        )
}

fn item_routes() -> Router<AppState> {
    Router::new()
        .route("/item", get(item::list).post(item::create))
        .route(
            "/item/:item_id",
            get(item::get).put(item::update).delete(item::delete),
        )
}

fn tag_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/store/:store_id/tag",
            get(tag::list_in_store).post(tag::create_in_store),
        )
        .route("/tag/:tag_id", get(tag::get).delete(tag::delete))
        .route(
            "/item/:item_id/tag/:tag_id",
            post(tag::link_to_item).delete(tag::unlink_from_item),
        )
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(user::register))
        .route("/login", post(user::login))
        .route("/refresh", post(user::refresh))
        .route("/logout", post(user::logout))
        .route("/user/:user_id", get(user::get).delete(user::delete))
}

/// `None` when CORS is switched off; an empty origin list allows any origin
fn cors_layer(security: &SecurityConfig) -> Option<CorsLayer> {
    if !security.enable_cors {
        return None;
    }
    if security.cors_origins.is_empty() {
        return Some(CorsLayer::permissive());
    }

    let origins: Vec<HeaderValue> = security
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();

    Some(
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any),
    )
}
