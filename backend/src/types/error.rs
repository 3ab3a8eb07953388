//! Universal error handling for the API

use aide::OperationOutput;
use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use common_types::{ErrorResponse, UPLOAD_URL_FAILED_MESSAGE};

use crate::upload_storage::BucketError;

/// Application error type.
///
/// `code` is an internal, machine-readable kind used for logging only; the
/// caller never sees it. The response body is always `{ "error": message }`.
#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    code: &'static str,
    message: &'static str,
}

impl AppError {
    /// Create a new application error
    #[must_use]
    pub const fn new(status: StatusCode, code: &'static str, message: &'static str) -> Self {
        Self {
            status,
            code,
            message,
        }
    }

    /// Ticket issuance failure, whatever the underlying cause
    #[must_use]
    pub const fn upload_url_failed(code: &'static str) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            code,
            UPLOAD_URL_FAILED_MESSAGE,
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the error based on status code
        match self.status.as_u16() {
            400..=499 => tracing::warn!("Client error: {} - {}", self.code, self.message),
            500..=599 => tracing::error!("Server error: {} - {}", self.code, self.message),
            _ => {}
        }

        (
            self.status,
            Json(ErrorResponse {
                error: self.message.to_string(),
            }),
        )
            .into_response()
    }
}

/// Unreadable request bodies are issuance failures like any other
impl From<BytesRejection> for AppError {
    fn from(err: BytesRejection) -> Self {
        tracing::error!("Failed to read request body: {err}");
        Self::upload_url_failed("unreadable_request_body")
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("Invalid JSON request body: {err}");
        Self::upload_url_failed("invalid_request_body")
    }
}

/// Convert bucket errors to application errors.
///
/// The cause is logged here and never reaches the caller.
impl From<BucketError> for AppError {
    fn from(err: BucketError) -> Self {
        let code = match &err {
            BucketError::S3Error(_) => "s3_error",
            BucketError::AwsError(_) => "aws_error",
            BucketError::ConfigError(_) => "config_error",
        };
        tracing::error!("Error generating upload URL: {err}");
        Self::upload_url_failed(code)
    }
}

impl OperationOutput for AppError {
    type Inner = ErrorResponse;

    fn operation_response(
        ctx: &mut aide::generate::GenContext,
        operation: &mut aide::openapi::Operation,
    ) -> Option<aide::openapi::Response> {
        Json::<ErrorResponse>::operation_response(ctx, operation)
    }

    fn inferred_responses(
        ctx: &mut aide::generate::GenContext,
        operation: &mut aide::openapi::Operation,
    ) -> Vec<(Option<u16>, aide::openapi::Response)> {
        Self::operation_response(ctx, operation)
            .map(|res| vec![(Some(500), res)])
            .unwrap_or_default()
    }
}
