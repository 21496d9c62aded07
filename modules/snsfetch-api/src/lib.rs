use std::sync::Arc;

use axum::{routing::get, Router};
use snsfetch_accounts::AccountResolver;

pub mod posts;
pub mod rest;

use posts::PostStore;

pub struct AppState {
    pub resolver: AccountResolver,
    pub posts: PostStore,
}

impl AppState {
    pub fn new(resolver: AccountResolver) -> Self {
        Self {
            resolver,
            posts: PostStore::new(),
        }
    }
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(rest::api_root))
        .route("/health", get(rest::api_health))
        // Account lookup
        .route("/account", get(rest::api_account))
        // Post CRUD (in-memory)
        .route("/posts", get(rest::posts::api_posts).post(rest::posts::api_create_post))
        .route(
            "/posts/{id}",
            get(rest::posts::api_post_detail)
                .put(rest::posts::api_update_post)
                .delete(rest::posts::api_delete_post),
        )
        .with_state(state)
        // CORS
        .layer(
            tower_http::cors::CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
        // Logging layer: method + path only (account ids stay out of the span)
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                },
            ),
        )
}
