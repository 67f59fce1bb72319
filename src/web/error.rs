use crate::prediction::InputError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

const ERROR_SUMMARY: &str = "Invalid input or server error";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("malformed query string: {0}")]
    MalformedQuery(String),

    #[error("malformed JSON body: {0}")]
    MalformedBody(String),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
    detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let detail = self.to_string();
        warn!(%detail, "prediction request rejected");
        let body = ErrorBody {
            error: ERROR_SUMMARY,
            detail,
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}
