use crate::dto::ErrorResponse;
use axum::{Json, http::StatusCode, response::IntoResponse};
use score_sheets::SheetsError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Upstream(String),
}

impl From<SheetsError> for ApiError {
    fn from(err: SheetsError) -> Self {
        Self::Upstream(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorResponse::new(msg)),
            Self::Upstream(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::with_timestamp(msg),
            ),
        };
        (status, Json(body)).into_response()
    }
}
