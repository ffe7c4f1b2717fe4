use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::GenerationResult;
use crate::services::providers::ProviderError;

/// Every way a generate request can fail.
///
/// This is the only error type the handler returns; its `IntoResponse` impl
/// renders all of them in the `{"success": false, "error": ...}` shape.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Missing user prompt")]
    MissingPrompt,

    #[error("{0}")]
    InvalidBody(String),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl GenerateError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            GenerateError::MissingPrompt => StatusCode::BAD_REQUEST,
            GenerateError::InvalidBody(_) | GenerateError::Provider(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<JsonRejection> for GenerateError {
    fn from(rejection: JsonRejection) -> Self {
        GenerateError::InvalidBody(rejection.body_text())
    }
}

impl IntoResponse for GenerateError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            GenerateError::MissingPrompt => {
                tracing::warn!("Rejected generate request without a user prompt");
                GenerationResult::missing_prompt()
            }
            other => {
                tracing::error!(error = %other, "Generate request failed");
                GenerationResult::failure(other.to_string())
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_prompt_is_bad_request() {
        assert_eq!(
            GenerateError::MissingPrompt.status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_provider_failures_are_internal_errors() {
        let errors = [
            GenerateError::Provider(ProviderError::RateLimited),
            GenerateError::Provider(ProviderError::NetworkError("connection refused".into())),
            GenerateError::InvalidBody("Failed to parse the request body as JSON".into()),
        ];

        for error in errors {
            assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
            assert!(!error.to_string().is_empty());
        }
    }

    #[test]
    fn test_provider_message_is_preserved() {
        let err = GenerateError::from(ProviderError::ApiError(
            "Gemini API error 404 Not Found: models/nope is not found".into(),
        ));
        assert_eq!(
            err.to_string(),
            "API error: Gemini API error 404 Not Found: models/nope is not found"
        );
    }
}
