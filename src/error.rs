//! Error handling for the application

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::pricing::responses::PricingErrorResponse;
use crate::pricing::PricingError;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Pricing(#[from] PricingError),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Pricing(PricingError::InvalidInput { message, errors }) => {
                tracing::debug!("Rejected quote input: {}", message);
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    PricingErrorResponse {
                        error_type: "invalid_input".to_string(),
                        message,
                        details: Some(serde_json::json!(errors)),
                    },
                )
            }
            AppError::Template(e) => {
                tracing::error!("Template error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    PricingErrorResponse {
                        error_type: "template".to_string(),
                        message: "Template error".to_string(),
                        details: None,
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Pricing(PricingError::malformed(rejection.body_text()))
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
