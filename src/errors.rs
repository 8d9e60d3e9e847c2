use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Model credential is not configured")]
    MissingCredential,

    #[error("Upstream model error: {message}")]
    UpstreamError {
        message: String,
        details: Option<String>,
    },

    #[error("Failed to parse model response: {0}")]
    ParseError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    pub fn upstream(message: impl Into<String>) -> Self {
        AppError::UpstreamError {
            message: message.into(),
            details: None,
        }
    }

    pub fn upstream_with_details(
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        AppError::UpstreamError {
            message: message.into(),
            details: Some(details.into()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::MissingCredential => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::UpstreamError { .. } => StatusCode::BAD_GATEWAY,
            AppError::ParseError(_) => StatusCode::BAD_GATEWAY,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let details = match self {
            AppError::UpstreamError { details, .. } => details.clone(),
            _ => None,
        };

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            code: self.status_code().as_u16(),
            details,
        })
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::upstream_with_details("Request to model endpoint failed", err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
