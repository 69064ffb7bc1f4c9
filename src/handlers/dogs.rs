use std::sync::Arc;

use axum::{http::StatusCode, response::Html, routing::get, Extension, Router};
use tera::Context;

use crate::{AppState, Result};

const UNAVAILABLE: &str = "The dog image service is unavailable right now. Please try again later.";

pub fn dogs_handler() -> Router {
    Router::new().route("/dogs", get(get_dog))
}

async fn get_dog(
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<(StatusCode, Html<String>)> {
    let (status, dog, error) = match app_state.dogs_service.random_dog().await {
        Ok(url) => (StatusCode::OK, Some(url), None),
        Err(err) if err.is_upstream() => (StatusCode::BAD_GATEWAY, None, Some(UNAVAILABLE)),
        Err(err) => return Err(err),
    };

    let mut context = Context::new();
    context.insert("dog", &dog);
    context.insert("error", &error);

    let page = app_state.templates.render("dogs.html", &context)?;
    Ok((status, Html(page)))
}
