use thiserror::Error;

// Import Axum types for HTTP response conversion
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// The custom error type for the application.
#[derive(Debug, Error)]
pub enum Error {
    /// A validation error (malformed or missing request input).
    #[error("Validation error: {0}")]
    Validation(String),

    /// A new password rejected by the strength policy.
    #[error("{0}")]
    WeakPassword(String),

    /// Email already taken by another account.
    #[error("Email already registered")]
    DuplicateEmail,

    /// Unknown email or wrong password. A single variant covers both so the
    /// response cannot reveal which emails are registered.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Credentials verified but the account is deactivated.
    #[error("Account is inactive")]
    InactiveAccount,

    /// Current password did not match on a password change.
    #[error("Current password incorrect")]
    WrongCurrentPassword,

    /// Missing or unusable credentials.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Bearer token failed signature or payload checks.
    #[error("Invalid authentication token")]
    InvalidToken,

    /// Bearer token is past its expiry.
    #[error("Token has expired")]
    TokenExpired,

    /// A forbidden error (authenticated but not allowed).
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// A not found error (resource does not exist).
    #[error("Not found: {0}")]
    NotFound(String),

    /// An error originating from the sqlx library.
    #[error("SQLx error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// A configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// An internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// A type alias for `Result<T, Error>` to simplify function signatures.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Machine-readable code carried in the JSON error body.
    pub fn code(&self) -> &'static str {
        match self {
            Error::Validation(_) => "validation_error",
            Error::WeakPassword(_)
            | Error::DuplicateEmail
            | Error::InvalidCredentials
            | Error::InactiveAccount
            | Error::WrongCurrentPassword => "auth_error",
            Error::Unauthorized(_) | Error::InvalidToken | Error::TokenExpired => "unauthorized",
            Error::Forbidden(_) => "forbidden",
            Error::NotFound(_) => "not_found",
            Error::Sqlx(_) | Error::Config(_) | Error::Internal(_) => "server_error",
        }
    }

    /// HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::Validation(_)
            | Error::WeakPassword(_)
            | Error::DuplicateEmail
            | Error::InvalidCredentials
            | Error::InactiveAccount
            | Error::WrongCurrentPassword => StatusCode::BAD_REQUEST,
            Error::Unauthorized(_) | Error::InvalidToken | Error::TokenExpired => {
                StatusCode::UNAUTHORIZED
            }
            Error::Forbidden(_) => StatusCode::FORBIDDEN,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Sqlx(_) | Error::Config(_) | Error::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message rendered to the client. Infrastructure failures collapse to a
    /// generic message; the detail stays in the logs.
    fn public_message(&self) -> String {
        match self {
            Error::Validation(msg)
            | Error::WeakPassword(msg)
            | Error::Unauthorized(msg)
            | Error::Forbidden(msg)
            | Error::NotFound(msg) => msg.clone(),
            Error::Sqlx(_) | Error::Config(_) | Error::Internal(_) => {
                "Unexpected error".to_string()
            }
            other => other.to_string(),
        }
    }
}

/// Convert custom Error to HTTP response
///
/// Every error renders as `{"error": {"code": ..., "message": ...}}` with the
/// status code from [`Error::status_code`].
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = serde_json::json!({
            "error": {
                "code": self.code(),
                "message": self.public_message(),
            }
        });

        (status, Json(body)).into_response()
    }
}
