use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use engine::SearchError;
use thiserror::Error;
use util::error::GridError;

#[derive(Debug, Error)]
pub enum ViewError {
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error(transparent)]
    Search(#[from] SearchError),
}

impl IntoResponse for ViewError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "rejected board request");
        (StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}
