use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    models::{NewPost, Post, PostPatch},
    Result,
};

use super::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

pub async fn list_posts(State(state): State<Arc<AppState>>) -> Json<Vec<Post>> {
    Json(state.store.list_all().await)
}

pub async fn get_post(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Post>> {
    Ok(Json(state.store.get_by_id(&id).await?))
}

pub async fn create_post(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewPost>,
) -> Result<(StatusCode, Json<Post>)> {
    let post = state.store.create(payload).await?;

    Ok((StatusCode::CREATED, Json(post)))
}

pub async fn update_post(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<PostPatch>,
) -> Result<Json<Post>> {
    Ok(Json(state.store.update(&id, payload).await?))
}

pub async fn delete_post(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    state.store.delete(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn posts_by_tag(
    State(state): State<Arc<AppState>>,
    Path(tag): Path<String>,
) -> Json<Vec<Post>> {
    Json(state.store.filter_by_tag(&tag).await)
}

pub async fn search_posts(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Post>>> {
    let query = params.q.unwrap_or_default();

    Ok(Json(state.store.search(&query).await?))
}

pub async fn health() -> (StatusCode, &'static str) {
    (StatusCode::OK, "OK")
}
