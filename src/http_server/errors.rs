//! # HTTP Errors
//!
//! Maps query failures onto status codes and a JSON error body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::query::QueryError;

/// Result type for film handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Error returned by film handlers
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error(transparent)]
pub struct ApiError(#[from] pub QueryError);

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match &self.0 {
            // 404 Not Found
            QueryError::NotFound(_) => StatusCode::NOT_FOUND,

            // 400 Bad Request
            QueryError::InvalidParameter { .. } => StatusCode::BAD_REQUEST,
            QueryError::MissingParameter(_) => StatusCode::BAD_REQUEST,

            // 500 Internal Server Error
            QueryError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            QueryError::Encoding(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    pub kind: &'static str,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        Self {
            error: err.to_string(),
            code: err.status_code().as_u16(),
            kind: err.0.code(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(&self));
        let mut response = (status, body).into_response();
        // Picked up by the request logging middleware
        response.extensions_mut().insert(self.0);
        response
    }
}
