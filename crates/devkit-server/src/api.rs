//! JSON error responses for tool endpoints.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use devkit_diff::DiffError;
use serde::{Deserialize, Serialize};

/// Message returned for every internal failure of the diff endpoint.
pub const DIFF_FAILED: &str = "Failed to compute diff";

/// Body of every error response: `{ "error": "..." }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Errors surfaced by tool handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Caller input was missing or malformed.
    #[error(transparent)]
    Validation(DiffError),

    /// Anything else. The detail is logged, never sent to the caller.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<DiffError> for ApiError {
    fn from(err: DiffError) -> Self {
        if err.is_validation() {
            Self::Validation(err)
        } else {
            Self::Internal(err.to_string())
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = match self {
            Self::Validation(err) => {
                tracing::debug!(error = %err, "rejected diff request");
                err.to_string()
            }
            Self::Internal(detail) => {
                tracing::error!(%detail, "diff request failed");
                DIFF_FAILED.to_string()
            }
        };
        (status, Json(ErrorBody { error })).into_response()
    }
}
