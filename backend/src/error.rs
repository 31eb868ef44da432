//! Error handling for the AgriLeaf advisory server
//!
//! Every failure leaves the server as `{ "error": { code, message, field? } }`

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Validation errors
    #[error("Validation error: {message}")]
    Validation { field: String, message: String },

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    // External service errors
    #[error("Weather service unavailable")]
    WeatherServiceUnavailable,

    #[error("Classifier service error: {0}")]
    ClassifierError(String),

    #[error("Leaf diagnosis is not configured")]
    ClassifierNotConfigured,

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl AppError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<shared::UnsupportedLanguage> for AppError {
    fn from(e: shared::UnsupportedLanguage) -> Self {
        AppError::UnsupportedLanguage(e.0)
    }
}

impl From<shared::UnknownDisease> for AppError {
    fn from(e: shared::UnknownDisease) -> Self {
        AppError::NotFound(format!("Disease '{}'", e.0))
    }
}

impl From<shared::UnknownCareTopic> for AppError {
    fn from(e: shared::UnknownCareTopic) -> Self {
        AppError::NotFound(format!("Care topic '{}'", e.0))
    }
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl AppError {
    fn status_and_detail(&self) -> (StatusCode, ErrorDetail) {
        match self {
            AppError::Validation { field, message } => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "VALIDATION_ERROR".to_string(),
                    message: message.clone(),
                    field: Some(field.clone()),
                },
            ),
            AppError::NotFound(resource) => (
                StatusCode::NOT_FOUND,
                ErrorDetail {
                    code: "NOT_FOUND".to_string(),
                    message: format!("{} not found", resource),
                    field: None,
                },
            ),
            AppError::UnsupportedLanguage(code) => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "UNSUPPORTED_LANGUAGE".to_string(),
                    message: format!("Language '{}' is not supported; use en, hi or mr", code),
                    field: Some("lang".to_string()),
                },
            ),
            AppError::WeatherServiceUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorDetail {
                    code: "WEATHER_SERVICE_UNAVAILABLE".to_string(),
                    message: "Unable to fetch weather data. Please try again later.".to_string(),
                    field: None,
                },
            ),
            AppError::ClassifierError(msg) => (
                StatusCode::BAD_GATEWAY,
                ErrorDetail {
                    code: "CLASSIFIER_ERROR".to_string(),
                    message: format!("Leaf classifier error: {}", msg),
                    field: None,
                },
            ),
            AppError::ClassifierNotConfigured => (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorDetail {
                    code: "CLASSIFIER_NOT_CONFIGURED".to_string(),
                    message: "Leaf diagnosis is not available on this server".to_string(),
                    field: None,
                },
            ),
            AppError::Configuration(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "CONFIGURATION_ERROR".to_string(),
                    message: format!("Configuration error: {}", msg),
                    field: None,
                },
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_detail) = self.status_and_detail();

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (AppError::validation("location", "empty"), StatusCode::BAD_REQUEST),
            (AppError::NotFound("Disease".into()), StatusCode::NOT_FOUND),
            (AppError::UnsupportedLanguage("fr".into()), StatusCode::BAD_REQUEST),
            (AppError::WeatherServiceUnavailable, StatusCode::SERVICE_UNAVAILABLE),
            (AppError::ClassifierError("boom".into()), StatusCode::BAD_GATEWAY),
            (AppError::ClassifierNotConfigured, StatusCode::SERVICE_UNAVAILABLE),
            (AppError::Configuration("tls".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }

    #[test]
    fn test_validation_detail_names_field() {
        let (_, detail) = AppError::validation("area_sq_ft", "must be positive").status_and_detail();
        assert_eq!(detail.code, "VALIDATION_ERROR");
        assert_eq!(detail.field.as_deref(), Some("area_sq_ft"));
    }

    #[test]
    fn test_weather_unavailable_message() {
        let (_, detail) = AppError::WeatherServiceUnavailable.status_and_detail();
        assert!(detail.message.starts_with("Unable to fetch weather data"));
    }

    #[test]
    fn test_unknown_disease_maps_to_not_found() {
        let err: AppError = shared::UnknownDisease("Leaf Curl".into()).into();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
