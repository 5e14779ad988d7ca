//! # API Errors
//!
//! Error types for the HTTP layer and their translation into responses.
//! Every error reaching a handler boundary becomes a JSON body with an HTTP
//! status code; nothing is swallowed and nothing is retried.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::db::DbError;

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced by the customer API
#[derive(Debug, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Request body was well-formed but the record content is invalid
    #[error("validation failed: {0}")]
    Validation(String),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Database connection or query failure
    #[error("{0}")]
    Db(#[from] DbError),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON body returned for every error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: self.to_string(),
            code: status.as_u16(),
        };
        (status, Json(body)).into_response()
    }
}
