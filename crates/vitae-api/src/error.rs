//! [`ApiError`] and its mapping onto HTTP status codes.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use vitae_core::Error as CoreError;

/// What a handler returns when a request cannot be served.
///
/// Every variant renders as `{"error": <message>}` with its status code;
/// the `Display` impl is for logs.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  #[error("conflict: {0}")]
  Conflict(String),

  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
  /// Sort a backend failure into an HTTP class by its semantic kind.
  ///
  /// Uniqueness violations are conflicts, missing rows are not-found,
  /// range violations are bad requests, and everything else is the
  /// store's fault.
  pub fn from_store<E: Into<CoreError>>(err: E) -> Self {
    match err.into() {
      e @ (CoreError::DuplicateAccount(_) | CoreError::DuplicateEmail(_)) => {
        ApiError::Conflict(e.to_string())
      }
      e @ (CoreError::ProfileNotFound(_)
      | CoreError::NoProfileForAccount(_)
      | CoreError::SectionNotFound(_)
      | CoreError::SkillNotFound(_)) => ApiError::NotFound(e.to_string()),
      e @ CoreError::PercentOutOfRange(_) => ApiError::BadRequest(e.to_string()),
      CoreError::Backend(message) => ApiError::Store(message.into()),
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m.clone()),
      ApiError::Conflict(m) => (StatusCode::CONFLICT, m.clone()),
      ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m.clone()),
      ApiError::Store(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}
