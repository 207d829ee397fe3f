// src/errors.rs

use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Database connection failed")]
  ServiceUnavailable,

  #[error("Database Error: {0}")]
  Sqlx(#[from] sqlx::Error),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Internal Server Error: {0}")]
  Internal(String),
}

impl ResponseError for AppError {
  fn error_response(&self) -> HttpResponse {
    // Log the full error when it's turned into a response
    tracing::error!(application_error = %self, "Responding with error");
    match self {
      AppError::Validation(m) => HttpResponse::UnprocessableEntity().json(json!({"detail": m})),
      AppError::ServiceUnavailable => {
        HttpResponse::ServiceUnavailable().json(json!({"detail": "Database connection failed"}))
      }
      AppError::Sqlx(e) => {
        HttpResponse::InternalServerError().json(json!({"detail": format!("Failed to create order: {}", e)}))
      }
      AppError::Config(_) => HttpResponse::InternalServerError().json(json!({"detail": "Configuration error"})),
      // Internal detail stays in the log; the caller only sees a generic message.
      AppError::Internal(_) => {
        HttpResponse::InternalServerError().json(json!({"detail": "An unexpected error occurred."}))
      }
    }
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
