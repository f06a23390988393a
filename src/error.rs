// error.rs
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FrontendError {
    #[error("request to recipe backend failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("recipe backend answered {0}")]
    Status(StatusCode),

    #[error("could not read recipe from backend: {0}")]
    RecipeMisformat(#[from] serde_json::Error),

    #[error("backend url cannot take a path: {0}")]
    BackendUrl(String),

    #[error("could not render page: {0}")]
    Template(#[from] askama::Error),
}

impl FrontendError {
    /// Every backend variant counts as the same "request failed" outcome.
    pub fn is_request_failure(&self) -> bool {
        !matches!(self, FrontendError::Template(_) | FrontendError::BackendUrl(_))
    }
}

impl IntoResponse for FrontendError {
    fn into_response(self) -> Response {
        log::error!("{}", self);
        if self.is_request_failure() {
            (StatusCode::BAD_GATEWAY, "Recipe backend request failed").into_response()
        } else {
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}
