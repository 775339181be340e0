use axum::{routing::get, Router};
use std::sync::Arc;

use super::{handlers, AppState};

pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/api/posts",
            get(handlers::list_posts).post(handlers::create_post),
        )
        .route(
            "/api/posts/:id",
            get(handlers::get_post)
                .put(handlers::update_post)
                .delete(handlers::delete_post),
        )
        .route("/api/posts/tag/:tag", get(handlers::posts_by_tag))
        .route("/api/search", get(handlers::search_posts))
        .route("/health", get(handlers::health))
}
