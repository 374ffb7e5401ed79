// src/errors.rs
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("MongoDB error: {0}")]
    MongoDB(#[from] mongodb::error::Error),

    // Store failure with an operation-specific client message. The client
    // sees `message`, the underlying error only goes to the log.
    #[error("{message}: {source}")]
    Database {
        message: &'static str,
        source: mongodb::error::Error,
    },

    #[error("{0}")]
    Validation(String),

    #[error("Unauthorized: No token provided.")]
    MissingToken,

    #[error("Unauthorized: Invalid token.")]
    InvalidToken,

    #[error("Forbidden: Admin access required.")]
    Forbidden,

    #[error("{0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::MongoDB(e) => {
                tracing::error!("Database error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Database error".to_string())
            }
            AppError::Database { message, source } => {
                tracing::error!("{}: {}", message, source);
                (StatusCode::INTERNAL_SERVER_ERROR, message.to_string())
            }
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::MissingToken => (StatusCode::UNAUTHORIZED, self.to_string()),
            AppError::InvalidToken => (StatusCode::FORBIDDEN, self.to_string()),
            AppError::Forbidden => (StatusCode::FORBIDDEN, self.to_string()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
        };

        let body = Json(json!({ "message": message }));
        (status, body).into_response()
    }
}

impl AppError {
    pub fn invalid_data(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn database(message: &'static str, source: mongodb::error::Error) -> Self {
        AppError::Database { message, source }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
