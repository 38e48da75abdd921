//! Response envelope and error handling for API endpoints
//!
//! Every endpoint answers with `{ "success": true, "data": ... }` or
//! `{ "success": false, "error": "..." }`.

use axum::{
    extract::rejection::PathRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use geev_service::ServiceError;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

/// Outcome of an endpoint, rendered as the JSON envelope
#[derive(Debug)]
pub enum Envelope<T> {
    /// 200 with `data`
    Success(T),
    /// `status` with a fixed `error` message
    Failure {
        message: &'static str,
        status: StatusCode,
    },
}

impl<T> Envelope<T> {
    /// HTTP status this envelope renders with
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Success(_) => StatusCode::OK,
            Self::Failure { status, .. } => *status,
        }
    }
}

#[derive(Serialize)]
struct SuccessBody<'a, T> {
    success: bool,
    data: &'a T,
}

#[derive(Serialize)]
struct FailureBody<'a> {
    success: bool,
    error: &'a str,
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Self::Success(data) => (
                status,
                Json(SuccessBody {
                    success: true,
                    data,
                }),
            )
                .into_response(),
            Self::Failure { message, .. } => (
                status,
                Json(FailureBody {
                    success: false,
                    error: message,
                }),
            )
                .into_response(),
        }
    }
}

/// API error type for consistent error responses
#[derive(Debug, Error)]
pub enum ApiError {
    /// No valid identity on the request
    #[error("Unauthorized")]
    Unauthorized,

    /// The post id segment could not be decoded
    #[error("Invalid post id")]
    InvalidPath(#[source] PathRejection),

    /// A store or service failure; only `message` reaches the client
    #[error("{message}")]
    Internal {
        message: &'static str,
        #[source]
        source: ServiceError,
    },
}

impl ApiError {
    /// Wrap a service failure behind a fixed client-facing message
    pub fn internal(message: &'static str, source: ServiceError) -> Self {
        Self::Internal { message, source }
    }

    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::InvalidPath(_) | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message sent to the client
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            Self::Unauthorized => "Unauthorized",
            Self::InvalidPath(_) => "Invalid post id",
            Self::Internal { message, .. } => *message,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Log server errors with the cause the client never sees
        match &self {
            Self::Internal { message, source } => error!(
                error = %source,
                code = source.error_code(),
                client_message = *message,
                "Server error occurred"
            ),
            Self::InvalidPath(rejection) => warn!(error = %rejection, "Undecodable path parameter"),
            Self::Unauthorized => {}
        }

        Envelope::<()>::Failure {
            message: self.message(),
            status,
        }
        .into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<Envelope<T>, ApiError>;
