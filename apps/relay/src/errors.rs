use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

use crate::relay::RelayError;
use crate::store::StoreError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Relay(#[from] RelayError),

    #[error(transparent)]
    Persistence(#[from] StoreError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Relay(_) | AppError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Attaches the operation summary shown in the `error` field of 5xx bodies.
    pub fn summarized(self, summary: &'static str) -> ApiError {
        ApiError {
            summary,
            source: self,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.summarized("Internal server error").into_response()
    }
}

/// An `AppError` paired with the message a failed operation reports.
#[derive(Debug)]
pub struct ApiError {
    summary: &'static str,
    source: AppError,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.source.status();
        let body: Value = if status.is_server_error() {
            tracing::error!("{}: {}", self.summary, self.source);
            json!({
                "error": self.summary,
                "details": self.source.to_string(),
            })
        } else {
            json!({ "error": self.source.to_string() })
        };

        (status, Json(body)).into_response()
    }
}
