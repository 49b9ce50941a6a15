use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::services::providers::ProviderError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Forbidden")]
    Forbidden,

    #[error("Bad request")]
    BadRequest,

    #[error("Upstream returned no choices")]
    EmptyCompletion,

    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Completion content is not valid JSON: {0}")]
    MalformedCompletion(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(anyhow::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(anyhow::Error::new(err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Internal(anyhow::Error::new(err))
    }
}

/// The `{status, message}` envelope every error response carries.
#[derive(Serialize)]
struct ErrorEnvelope {
    status: u16,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Forbidden => (StatusCode::FORBIDDEN, "Forbidden"),
            AppError::BadRequest => (StatusCode::BAD_REQUEST, "Bad Request"),
            AppError::EmptyCompletion => {
                (StatusCode::INTERNAL_SERVER_ERROR, "No response from OpenAI")
            }
            AppError::Provider(err) => {
                tracing::error!("Completion provider failed: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
            AppError::MalformedCompletion(err) => {
                tracing::error!("Completion content failed to parse as JSON: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
            AppError::Config(err) | AppError::Internal(err) => {
                tracing::error!("Internal error: {:#}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
        };

        (
            status,
            Json(ErrorEnvelope {
                status: status.as_u16(),
                message: message.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_serializes_status_and_message() {
        let envelope = ErrorEnvelope {
            status: 403,
            message: "Forbidden".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&envelope).unwrap(),
            r#"{"status":403,"message":"Forbidden"}"#
        );
    }

    #[test]
    fn forbidden_maps_to_403() {
        let response = AppError::Forbidden.into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn empty_completion_maps_to_500() {
        let response = AppError::EmptyCompletion.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
