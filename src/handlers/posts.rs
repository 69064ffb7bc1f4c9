use std::sync::Arc;

use axum::{
    extract::Query,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Extension, Form, Router,
};
use serde::Deserialize;
use tera::{Context, Tera};
use uuid::Uuid;
use validator::ValidationErrors;

use crate::{
    models::{posts::PostForm, schema::form_fields},
    services::posts::Submission,
    AppState, Result,
};

pub fn posts_handler() -> Router {
    Router::new().route("/", get(post_form).post(submit_post))
}

#[derive(Debug, Deserialize)]
pub struct PostFormQuery {
    pub created: Option<Uuid>,
}

fn render_form(
    templates: &Tera,
    form: &PostForm,
    errors: Option<&ValidationErrors>,
    created: Option<Uuid>,
) -> Result<Html<String>> {
    let mut context = Context::new();
    context.insert("fields", &form_fields(form, errors));
    context.insert("created", &created);
    Ok(Html(templates.render("index.html", &context)?))
}

async fn post_form(
    Extension(app_state): Extension<Arc<AppState>>,
    Query(query): Query<PostFormQuery>,
) -> Result<impl IntoResponse> {
    let page = render_form(&app_state.templates, &PostForm::default(), None, query.created)?;
    Ok((StatusCode::OK, page))
}

async fn submit_post(
    Extension(app_state): Extension<Arc<AppState>>,
    Form(form): Form<PostForm>,
) -> Result<Response> {
    match app_state.posts_service.submit(form).await? {
        Submission::Created(post) => {
            Ok(Redirect::to(&format!("/?created={}", post.id)).into_response())
        }
        Submission::Rejected(form, errors) => {
            let page = render_form(&app_state.templates, &form, Some(&errors), None)?;
            Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response())
        }
    }
}
