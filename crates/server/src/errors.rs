use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::{EmployeesEnvelope, MessageEnvelope};
use models::employee::Employee;
use thiserror::Error;

/// An unexpected failure at the handler boundary.
///
/// Rendered as a 500 envelope carrying only the operation's generic message;
/// the cause has already been logged by the handler.
#[derive(Debug, Clone, Copy)]
pub struct ApiFailure {
    message: &'static str,
    listing: bool,
}

impl ApiFailure {
    pub fn new(message: &'static str) -> Self {
        Self { message, listing: false }
    }

    /// Failure of a read; the envelope keeps an empty `employees` list.
    pub fn listing(message: &'static str) -> Self {
        Self { message, listing: true }
    }
}

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        let status = StatusCode::INTERNAL_SERVER_ERROR;
        if self.listing {
            (status, Json(EmployeesEnvelope::<Employee>::empty(self.message))).into_response()
        } else {
            (status, Json(MessageEnvelope::rejected(self.message))).into_response()
        }
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("store unavailable: {0}")]
    Store(String),
}
