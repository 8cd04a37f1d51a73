//! HTTP error type.
//!
//! Every failure leaves the API as an [`ErrorBody`] with a short `detail` and a
//! longer `message`. Internal failures never carry their cause unless the
//! debug policy is on (see `middleware::errors`).

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use rezgenie_billing::BillingError;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// `detail` of every 500 response.
pub const INTERNAL_DETAIL: &str = "Internal server error";

/// `message` of a 500 response when error details are hidden.
pub const INTERNAL_MESSAGE: &str =
    "An unexpected error occurred while processing the request. Please try again later.";

/// JSON body of every error response.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorBody {
    pub detail: String,
    pub message: String,
}

impl ErrorBody {
    pub fn new(detail: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(INTERNAL_DETAIL, message)
    }
}

/// Cause of an internal error, attached to the response for the debug layer.
#[derive(Debug, Clone)]
pub struct InternalErrorCause(pub String);

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Internal(String),

    /// An extractor refused the request (bad path segment, malformed body, ...).
    #[error("{1}")]
    Rejected(StatusCode, String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Rejected(status, _) => *status,
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => ApiError::NotFound("Resource not found".to_owned()),
            other => ApiError::Internal(format!("Database error: {other}")),
        }
    }
}

impl From<BillingError> for ApiError {
    fn from(err: BillingError) -> Self {
        match err {
            BillingError::MissingSecret | BillingError::InvalidSecret => {
                ApiError::Internal(err.to_string())
            }
            other => ApiError::BadRequest(other.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Rejected(rejection.status(), rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Rejected(rejection.status(), rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            ApiError::Internal(cause) => {
                tracing::error!(error = %cause, "Request failed");
                let mut response =
                    (status, Json(ErrorBody::internal(INTERNAL_MESSAGE))).into_response();
                response.extensions_mut().insert(InternalErrorCause(cause));
                response
            }
            other => {
                let detail = status.canonical_reason().unwrap_or("Error");
                (status, Json(ErrorBody::new(detail, other.to_string()))).into_response()
            }
        }
    }
}
