use std::sync::Arc;

use axum::{Extension, Router};
use tower_http::trace::TraceLayer;

use crate::{
    handlers::{dogs::dogs_handler, posts::posts_handler},
    AppState, Error,
};

pub fn create_routes(app_state: Arc<AppState>) -> Router {
    Router::new()
        .merge(posts_handler())
        .merge(dogs_handler())
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(Extension(app_state))
}

async fn not_found() -> Error {
    Error::NotFound
}
