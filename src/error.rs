//! Error handling for the application

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Missing bearer credential")]
    MissingToken,

    #[error("Backend rejected the credential")]
    Unauthorized,

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Backend request failed: {0}")]
    Backend(#[from] reqwest::Error),

    #[error("Backend returned {status}: {message}")]
    BackendStatus { status: u16, message: String },

    #[error("Invoice {invoice_id} was created but the reservation could not be confirmed")]
    InvoiceFinalization { invoice_id: i64 },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(what) => (StatusCode::NOT_FOUND, format!("{} not found", what)),
            AppError::MissingToken | AppError::Unauthorized => {
                (StatusCode::UNAUTHORIZED, self.to_string())
            }
            AppError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg.clone()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
            AppError::Backend(e) => {
                tracing::error!("Backend request failed: {}", e);
                (StatusCode::BAD_GATEWAY, "Backend request failed".to_string())
            }
            AppError::BackendStatus { status, message } => {
                tracing::error!("Backend returned {}: {}", status, message);
                (StatusCode::BAD_GATEWAY, "Backend request failed".to_string())
            }
            AppError::InvoiceFinalization { invoice_id } => {
                tracing::error!(
                    "Invoice {} created but reservation confirmation failed",
                    invoice_id
                );
                (StatusCode::BAD_GATEWAY, self.to_string())
            }
        };

        let body = Json(json!({
            "error": status.as_u16(),
            "message": message,
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
