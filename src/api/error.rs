use crate::utils::error::FacadeError;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub status: u16,
    pub error: String,
    pub message: String,
}

pub fn status_for(err: &FacadeError) -> StatusCode {
    match err {
        FacadeError::NotFound { .. } => StatusCode::NOT_FOUND,
        FacadeError::NullInput
        | FacadeError::MalformedRequest { .. }
        | FacadeError::ValidationFailed(_)
        | FacadeError::InvalidIdentifierFormat { .. } => StatusCode::BAD_REQUEST,
        FacadeError::UpstreamTransientFailure { .. } => StatusCode::TOO_MANY_REQUESTS,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Extractor failures answer 400 with the usual error body instead of axum's
/// plain-text 415/422 responses.
impl From<JsonRejection> for FacadeError {
    fn from(rejection: JsonRejection) -> Self {
        FacadeError::MalformedRequest {
            message: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for FacadeError {
    fn from(rejection: QueryRejection) -> Self {
        FacadeError::MalformedRequest {
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for FacadeError {
    fn into_response(self) -> Response {
        let status = status_for(&self);

        let (error, message) = match status {
            StatusCode::TOO_MANY_REQUESTS => {
                tracing::warn!("Upstream still unavailable after retries: {}", self);
                (
                    "Too many requests: upstream unavailable and retries exhausted".to_string(),
                    self.to_string(),
                )
            }
            StatusCode::INTERNAL_SERVER_ERROR => {
                // Internal details stay in the log.
                tracing::error!("Unhandled error: {}", self);
                (
                    "Internal Server Error".to_string(),
                    "An unexpected error occurred".to_string(),
                )
            }
            _ => {
                tracing::info!("Request rejected: {}", self);
                (
                    status.canonical_reason().unwrap_or("Error").to_string(),
                    self.to_string(),
                )
            }
        };

        let body = ErrorBody {
            status: status.as_u16(),
            error,
            message,
        };
        (status, Json(body)).into_response()
    }
}
