use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::rewrite::rewrite_types::RewriteResponse;

pub const EMPTY_TEXT_MESSAGE: &str = "Text is required";
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to process the request";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Error, Debug)]
pub enum RewriteError {
    #[error("Text is required")]
    EmptyText,

    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    #[error("Generation failed: {0:#}")]
    Generation(#[from] anyhow::Error),
}

impl RewriteError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RewriteError::EmptyText => StatusCode::BAD_REQUEST,
            RewriteError::InvalidBody(_) | RewriteError::Generation(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for RewriteError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match self {
            RewriteError::EmptyText => EMPTY_TEXT_MESSAGE,
            _ => {
                tracing::error!("Error processing rewrite request: {}", self);
                GENERIC_FAILURE_MESSAGE
            }
        };

        (status, Json(RewriteResponse::error(message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_a_client_error() {
        assert_eq!(RewriteError::EmptyText.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn upstream_failures_hide_their_cause() {
        let response =
            RewriteError::Generation(anyhow::anyhow!("key=secret rejected")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
