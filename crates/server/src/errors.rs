use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::debug;

/// Error returned by handlers: a status code plus a small JSON body.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub error: &'static str,
    pub message: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: &'static str, message: Option<String>) -> Self {
        Self { status, error, message }
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::NotFound(_) => Self::new(StatusCode::NOT_FOUND, "Not Found", Some(e.to_string())),
            // duplicate account number on create
            ServiceError::Conflict(_) => Self::new(StatusCode::BAD_REQUEST, "Bad Request", Some(e.to_string())),
        }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        debug!(status = %self.status, error = self.error, message = ?self.message, "request failed");
        let body = match self.message {
            Some(msg) => serde_json::json!({"error": self.error, "message": msg}),
            None => serde_json::json!({"error": self.error}),
        };
        (self.status, Json(body)).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("cannot bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let e: JsonApiError = ServiceError::bank_not_found("1").into();
        assert_eq!(e.status, StatusCode::NOT_FOUND);
        assert_eq!(e.message.as_deref(), Some("not found: could not find bank by account number 1"));
    }

    #[test]
    fn conflict_maps_to_400() {
        let e: JsonApiError = ServiceError::bank_exists("1").into();
        assert_eq!(e.status, StatusCode::BAD_REQUEST);
        assert_eq!(e.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
