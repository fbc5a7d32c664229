//! Error types and error handling
//!
//! The site has exactly one user-visible error condition: a slug that does not
//! resolve to a record, which must surface as a complete 404 page rather than
//! a partial render. Everything else (template failures, configuration
//! problems) is a server fault and renders the 500 page.

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

/// Site error type
#[derive(Debug, Error)]
pub enum SiteError {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Template rendering failed
    #[error("template rendering failed: {0}")]
    Template(#[from] askama::Error),

    /// Not Found (404)
    #[error("not found: {0}")]
    NotFound(String),
}

/// Result alias for handlers.
pub type SiteResult<T> = Result<T, SiteError>;

impl IntoResponse for SiteError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(resource) => {
                tracing::debug!(%resource, "resource not found");
                not_found_response()
            }
            other => {
                tracing::error!(error = %other, "request failed");
                server_error_response()
            }
        }
    }
}

#[derive(Template)]
#[template(path = "404.html")]
struct NotFoundTemplate;

#[derive(Template)]
#[template(path = "500.html")]
struct ServerErrorTemplate;

/// The complete 404 page with its status code.
///
/// Falls back to a plain-text body if the template itself fails to render.
#[must_use]
pub fn not_found_response() -> Response {
    match NotFoundTemplate.render() {
        Ok(body) => (StatusCode::NOT_FOUND, Html(body)).into_response(),
        Err(error) => {
            tracing::error!(%error, "failed to render the 404 page");
            (StatusCode::NOT_FOUND, "404 Not Found").into_response()
        }
    }
}

/// The complete 500 page with its status code.
#[must_use]
pub fn server_error_response() -> Response {
    match ServerErrorTemplate.render() {
        Ok(body) => (StatusCode::INTERNAL_SERVER_ERROR, Html(body)).into_response(),
        Err(error) => {
            tracing::error!(%error, "failed to render the 500 page");
            (StatusCode::INTERNAL_SERVER_ERROR, "500 Internal Server Error").into_response()
        }
    }
}
