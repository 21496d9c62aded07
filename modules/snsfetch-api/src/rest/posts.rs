use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::Deserialize;
use tracing::info;

use snsfetch_common::SnsPostCreate;

use super::detail;
use crate::AppState;

const POST_NOT_FOUND: &str = "Post not found";

#[derive(Deserialize)]
pub struct PostsQuery {
    platform: Option<String>,
}

pub async fn api_posts(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PostsQuery>,
) -> impl IntoResponse {
    let platform = params.platform.as_deref().filter(|p| !p.is_empty());
    Json(state.posts.list(platform).await)
}

pub async fn api_post_detail(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> impl IntoResponse {
    match state.posts.get(id).await {
        Some(post) => Json(post).into_response(),
        None => detail(StatusCode::NOT_FOUND, POST_NOT_FOUND),
    }
}

pub async fn api_create_post(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SnsPostCreate>,
) -> impl IntoResponse {
    let post = state.posts.create(body).await;
    info!(id = post.id, platform = %post.platform, "Post created");
    (StatusCode::CREATED, Json(post))
}

pub async fn api_update_post(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
    Json(body): Json<SnsPostCreate>,
) -> impl IntoResponse {
    match state.posts.update(id, body).await {
        Some(post) => Json(post).into_response(),
        None => detail(StatusCode::NOT_FOUND, POST_NOT_FOUND),
    }
}

pub async fn api_delete_post(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> impl IntoResponse {
    match state.posts.delete(id).await {
        Some(post) => {
            info!(id, "Post deleted");
            Json(serde_json::json!({"message": "Post deleted", "post": post})).into_response()
        }
        None => detail(StatusCode::NOT_FOUND, POST_NOT_FOUND),
    }
}
