use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{error::StorageError, types::ApiMessage, warning};

/// Failure answered to a client as `{ "message": ... }`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::InvalidStation(message) => Self::bad_request(message),
            err => {
                warning!("Storage failure: {}", err);
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "storage failure")
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warning!("Request failed ({}): {}", self.status, self.message);
        (
            self.status,
            Json(ApiMessage {
                message: self.message,
            }),
        )
            .into_response()
    }
}
