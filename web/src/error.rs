use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;
use storage::error::StorageError;
use validator::ValidationErrors;

/// Web layer errors
#[derive(Debug)]
pub enum WebError {
    Storage(StorageError),
    Validation(ValidationErrors),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Storage(e) => write!(f, "Storage error: {}", e),
            Self::Validation(e) => write!(f, "Validation error: {}", e),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            Self::Storage(StorageError::UnknownUser) => StatusCode::NOT_FOUND,
            Self::Storage(StorageError::ScoreOutOfRange(_)) => StatusCode::BAD_REQUEST,
            Self::Storage(StorageError::DailyLimitReached) => StatusCode::TOO_MANY_REQUESTS,
            Self::Storage(StorageError::InvalidOtp) => StatusCode::BAD_REQUEST,
            Self::Storage(StorageError::PhoneAlreadyRegistered) => StatusCode::CONFLICT,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
        };

        let body = match &self {
            Self::Storage(StorageError::UnknownUser) => {
                json!({
                    "error": "User not found"
                })
            }
            Self::Storage(StorageError::ScoreOutOfRange(score)) => {
                json!({
                    "error": format!("Score must be between 50 and 500, got {}", score)
                })
            }
            Self::Storage(StorageError::DailyLimitReached) => {
                json!({
                    "error": "Score limit reached for today"
                })
            }
            Self::Storage(StorageError::InvalidOtp) => {
                json!({
                    "error": "Invalid or expired OTP"
                })
            }
            Self::Storage(StorageError::PhoneAlreadyRegistered) => {
                json!({
                    "error": "Phone number already registered"
                })
            }
            Self::Storage(e) => {
                tracing::error!("Storage error: {:?}", e);
                json!({
                    "error": "An internal error occurred"
                })
            }
            Self::Validation(errors) => {
                let field_errors: Vec<String> = errors
                    .field_errors()
                    .iter()
                    .flat_map(|(field, errors)| {
                        errors.iter().map(move |e| {
                            format!(
                                "{}: {}",
                                field,
                                e.message
                                    .as_ref()
                                    .map(|m| m.to_string())
                                    .unwrap_or_else(|| e.code.to_string())
                            )
                        })
                    })
                    .collect();

                json!({
                    "error": "Validation failed",
                    "details": field_errors
                })
            }
        };

        (status_code, Json(body)).into_response()
    }
}

impl From<StorageError> for WebError {
    fn from(error: StorageError) -> Self {
        Self::Storage(error)
    }
}

impl From<ValidationErrors> for WebError {
    fn from(error: ValidationErrors) -> Self {
        Self::Validation(error)
    }
}
