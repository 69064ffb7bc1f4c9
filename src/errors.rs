use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tracing::error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("resource not found")]
    NotFound,
    #[error("database error: {0}")]
    DatabaseError(sqlx::Error),
    #[error("image api request failed: {0}")]
    UpstreamRequest(reqwest::Error),
    #[error("image api returned an unexpected payload: {0}")]
    UpstreamPayload(String),
    #[error("template error: {0}")]
    TemplateError(tera::Error),
}

impl Error {
    /// True for failures of the external image API, which views degrade on
    /// instead of aborting the request.
    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::UpstreamRequest(_) | Self::UpstreamPayload(_))
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::NotFound => (StatusCode::NOT_FOUND, "Page not found"),
            Self::DatabaseError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Database error"),
            Self::UpstreamRequest(_) | Self::UpstreamPayload(_) => {
                (StatusCode::BAD_GATEWAY, "Upstream service unavailable")
            }
            Self::TemplateError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"),
        };

        let body = Html(format!(
            "<!doctype html><html><head><title>{message}</title></head>\
             <body><h1>{}</h1><p>{message}</p></body></html>",
            status.as_u16()
        ));
        (status, body).into_response()
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        error!("Database error: {:?}", err);
        Self::DatabaseError(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        error!("Image api request failed: {:?}", err);
        Self::UpstreamRequest(err)
    }
}

impl From<tera::Error> for Error {
    fn from(err: tera::Error) -> Self {
        error!("Template rendering failed: {:?}", err);
        Self::TemplateError(err)
    }
}
