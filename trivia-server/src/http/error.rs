//! API error type with IntoResponse
//!
//! Every failure collapses to one of four fixed payloads:
//! `{"success": false, "error": <code>, "message": <text>}`.
//! The underlying cause is logged, never returned to the client.

use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::StoreError;
use crate::models::ValidationError;

/// API error with a fixed status and message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    /// Malformed or invalid input (400)
    BadRequest,

    /// Missing resource, empty page, or store failure (404)
    NotFound,

    /// Search/quiz request that cannot be satisfied (422)
    Unprocessable,

    /// Known path, wrong method (405)
    MethodNotAllowed,
}

impl ApiError {
    pub fn status(self) -> StatusCode {
        match self {
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::BadRequest => "bad request",
            Self::NotFound => "resource not found",
            Self::Unprocessable => "unprocessable",
            Self::MethodNotAllowed => "method not allowed",
        }
    }

    /// Log `cause` and collapse it to Unprocessable.
    pub fn unprocessable(cause: impl fmt::Display) -> Self {
        tracing::warn!(%cause, "request unprocessable");
        Self::Unprocessable
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.status().as_u16(), self.message())
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = json!({
            "success": false,
            "error": status.as_u16(),
            "message": self.message()
        });

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        tracing::debug!(error = %e, "validation failed");
        Self::BadRequest
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound { resource, id } => {
                tracing::debug!(resource, %id, "not found");
            }
            StoreError::Sqlx(e) => {
                // Log the actual error, return the generic 404
                tracing::error!("Database error: {}", e);
            }
        }
        Self::NotFound
    }
}
