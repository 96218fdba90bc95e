//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("{0}")]
  InvalidArgument(String),

  #[error("{0}")]
  NotFound(String),

  /// The request body could not be decoded.
  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("unsupported media type: {0}")]
  UnsupportedMediaType(String),

  #[error("not acceptable: {0}")]
  NotAcceptable(String),

  #[error("encode error: {0}")]
  Encode(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<roster_core::Error> for ApiError {
  fn from(e: roster_core::Error) -> Self {
    match e {
      roster_core::Error::InvalidArgument(m) => ApiError::InvalidArgument(m),
      e @ roster_core::Error::NotFound(_) => ApiError::NotFound(e.to_string()),
      roster_core::Error::Store(e) => ApiError::Store(e),
    }
  }
}

impl ApiError {
  pub fn status(&self) -> StatusCode {
    match self {
      ApiError::InvalidArgument(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
      ApiError::NotFound(_) => StatusCode::NOT_FOUND,
      ApiError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
      ApiError::NotAcceptable(_) => StatusCode::NOT_ACCEPTABLE,
      ApiError::Encode(_) | ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    if status.is_server_error() {
      tracing::error!(error = %self, "request failed");
    } else {
      tracing::warn!(error = %self, "request rejected");
    }
    (status, Json(json!({ "error": self.to_string() }))).into_response()
  }
}
