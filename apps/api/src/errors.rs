#![allow(dead_code)]

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errors raised by the content-to-layout core.
///
/// Both variants surface synchronously to the immediate caller — the builder
/// never retries and never returns a partial element sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    /// A mandatory record field (name, experience) is missing or empty.
    #[error("malformed resume record: {0}")]
    MalformedRecord(String),

    /// A union field carries a shape outside its two sanctioned variants.
    /// Raised at the data-model boundary, never silently coerced.
    #[error("unsupported variant: {0}")]
    UnsupportedVariant(String),
}

/// Errors raised by the PDF render driver.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("font loading failed: {0}")]
    Font(String),

    #[error("page flow engine error: {0}")]
    Engine(#[from] genpdf::error::Error),
}

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Content(#[from] ContentError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Content(err @ ContentError::MalformedRecord(_)) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "MALFORMED_RECORD",
                err.to_string(),
            ),
            AppError::Content(err @ ContentError::UnsupportedVariant(_)) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "UNSUPPORTED_VARIANT",
                err.to_string(),
            ),
            AppError::Render(err) => {
                tracing::error!("Render error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "RENDER_ERROR",
                    "PDF rendering failed".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_record_maps_to_422() {
        let response =
            AppError::Content(ContentError::MalformedRecord("name".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_unsupported_variant_maps_to_422() {
        let response =
            AppError::Content(ContentError::UnsupportedVariant("skills".to_string()))
                .into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_validation_maps_to_400() {
        let response = AppError::Validation("empty body".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
