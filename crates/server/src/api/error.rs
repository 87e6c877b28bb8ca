//! Mapping of core errors to HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use editmatch_core::{DistanceError, MatchError};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    /// Stable machine-readable error kind.
    pub kind: &'static str,
}

/// Error returned by API handlers.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorResponse,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<MatchError> for ApiError {
    fn from(err: MatchError) -> Self {
        let (status, kind) = match &err {
            MatchError::InvalidInput { .. } => (StatusCode::BAD_REQUEST, "invalid_input"),
            MatchError::InvalidThreshold(_) => (StatusCode::BAD_REQUEST, "invalid_threshold"),
            MatchError::PoolTooLarge { .. } => (StatusCode::PAYLOAD_TOO_LARGE, "pool_too_large"),
            MatchError::InputTooLong { .. } => (StatusCode::PAYLOAD_TOO_LARGE, "input_too_long"),
        };
        Self {
            status,
            body: ErrorResponse {
                error: err.to_string(),
                kind,
            },
        }
    }
}

impl From<DistanceError> for ApiError {
    fn from(err: DistanceError) -> Self {
        let kind = match &err {
            DistanceError::InvalidCostModel { .. } => "invalid_cost_model",
        };
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            body: ErrorResponse {
                error: err.to_string(),
                kind,
            },
        }
    }
}
