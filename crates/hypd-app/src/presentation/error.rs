use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use hypd_domain::shared::{DomainError, ErrorCode, ErrorSeverity};
use log::{error, warn};
use serde::{Deserialize, Serialize};

/// Structured error body returned by every endpoint
///
/// Carries the stable numeric code next to the message so clients can
/// branch on it without parsing text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Numeric error code (1xxx-6xxx range)
    pub code: u16,

    pub message: String,

    pub severity: ErrorSeverity,

    /// Whether the request can be retried as is
    pub recoverable: bool,

    #[serde(skip, default = "default_status")]
    status: StatusCode,
}

fn default_status() -> StatusCode {
    StatusCode::INTERNAL_SERVER_ERROR
}

impl ApiError {
    pub fn from_code(error_code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: error_code.code(),
            message: message.into(),
            severity: error_code.severity(),
            recoverable: error_code.is_recoverable(),
            status: status_for(error_code),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::from_code(ErrorCode::InvalidInput, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::from_code(ErrorCode::Unauthorized, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::from_code(ErrorCode::Forbidden, message)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidCredentials | ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::AccountBanned | ErrorCode::Forbidden => StatusCode::FORBIDDEN,
        ErrorCode::UserNotFound | ErrorCode::GameNotFound | ErrorCode::NotFound => {
            StatusCode::NOT_FOUND
        }
        ErrorCode::Conflict | ErrorCode::DatabaseConstraintViolation => StatusCode::CONFLICT,
        ErrorCode::CacheUnavailable | ErrorCode::TimeoutError => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::ValidationError | ErrorCode::InvalidInput => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        let code = err.code();
        let status = status_for(code);

        // Storage and infrastructure details stay in the log.
        let message = if status == StatusCode::SERVICE_UNAVAILABLE {
            warn!("Request failed, retryable: {}", err.format_with_code());
            "Service temporarily unavailable".to_string()
        } else if status.is_server_error() {
            error!("Request failed: {}", err.format_with_code());
            "Internal server error".to_string()
        } else {
            err.message().to_string()
        };

        Self {
            code: code.code(),
            message,
            severity: err.severity(),
            recoverable: err.is_recoverable(),
            status,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}
