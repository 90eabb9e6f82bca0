//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::response::ErrorBody;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("username already taken: {0}")]
    DuplicateUsername(String),
    #[error("{0} table lock poisoned")]
    Poisoned(&'static str),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    /// Carries the entity label, e.g. "News item" or "Service".
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("Invalid request body: {0}")]
    BadRequest(String),
    /// `action` reads as "fetching news", "creating resource", ...
    #[error("Error {action}")]
    Internal {
        action: &'static str,
        #[source]
        source: StorageError,
    },
}

impl AppError {
    pub fn internal(action: &'static str) -> impl FnOnce(StorageError) -> AppError {
        move |source| AppError::Internal { action, source }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal { action, source } => {
                tracing::error!(error = %source, "error {}", action);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let body = ErrorBody {
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_wire_format() {
        assert_eq!(AppError::NotFound("Service").to_string(), "Service not found");
        let err = AppError::internal("deleting statistic")(StorageError::Poisoned("statistics"));
        assert_eq!(err.to_string(), "Error deleting statistic");
    }

    #[test]
    fn status_codes() {
        assert_eq!(
            AppError::NotFound("Directory").into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::BadRequest("expected object".into()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        let internal = AppError::internal("fetching news")(StorageError::Poisoned("news"));
        assert_eq!(internal.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
