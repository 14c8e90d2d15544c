use anyhow::Error;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

/// Error returned by page handlers.
///
/// Data-access failures never reach this type: loaders degrade them to
/// fallback content. What remains is routing (unknown page) and template
/// rendering failures.
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub error: Error,
}

impl AppError {
    pub fn new<E>(status: StatusCode, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            status,
            error: err.into(),
        }
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }

    pub fn not_found<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::NOT_FOUND, err)
    }

    /// Error raised while rendering a template.
    pub fn render<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status.as_u16(), error = %self.error, "Page failed");
        } else {
            tracing::debug!(status = %self.status.as_u16(), error = %self.error, "Page rejected");
        }

        // The error text stays in the logs; viewers only see the status.
        let reason = self.status.canonical_reason().unwrap_or("Error");
        let body = Html(format!(
            "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\"><title>{reason}</title></head>\
             <body><main class=\"error-page\"><h1>{code}</h1><p>{reason}</p>\
             <a href=\"/\">Back to home</a></main></body></html>",
            code = self.status.as_u16(),
        ));

        (self.status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        AppError::internal(err)
    }
}
