use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::warn;

use crate::{models::common::ErrorMessage, services::gemini::GenerateError};

pub mod generate;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("missing or non-string field `{0}` in request body")]
    BadRequest(&'static str),

    // Enables `?` to lift GenerateError into ApiError automatically
    #[error(transparent)]
    Generate(#[from] GenerateError),
}

impl ApiError {
    /// Stable code surfaced to callers alongside the human-readable message.
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "bad_request",
            ApiError::Generate(GenerateError::UpstreamUnavailable(_)) => "upstream_unavailable",
            ApiError::Generate(GenerateError::MalformedOutput(_)) => "malformed_generation_output",
            ApiError::Generate(GenerateError::SchemaViolation(_)) => "schema_violation",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Generate(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        warn!("Request failed ({}): {self}", self.code());
        let body = ErrorMessage {
            code: self.code().to_string(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
