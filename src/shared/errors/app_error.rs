use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::log_error;

#[derive(Error, Debug, Serialize, Clone, PartialEq)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Internal error: {0}")]
    InternalError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred";
const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ValidationError(_) | AppError::Unknown(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::DatabaseError(_) | AppError::ConfigError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Short machine-readable name of the variant, used in response bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::DatabaseError(_) => "DatabaseError",
            AppError::NotFound(_) => "NotFound",
            AppError::Unauthorized(_) => "Unauthorized",
            AppError::ValidationError(_) => "ValidationError",
            AppError::ConfigError(_) => "ConfigError",
            AppError::InternalError(_) => "InternalError",
            AppError::Unknown(_) => "Unknown",
        }
    }

    /// Failures during writes surface as a generic bad request; caller-facing
    /// variants pass through untouched. The wrapped detail is only logged.
    pub fn into_bad_request(self) -> Self {
        match self {
            AppError::NotFound(_)
            | AppError::ValidationError(_)
            | AppError::Unauthorized(_)
            | AppError::Unknown(_) => self,
            other => {
                log_error!("Write failed: {}", other);
                AppError::Unknown(UNKNOWN_ERROR_MESSAGE.to_string())
            }
        }
    }

    /// Message safe to hand to a client: server-side failures are replaced
    /// by a fixed text.
    pub fn public_message(&self) -> &str {
        if self.status_code().is_server_error() {
            INTERNAL_ERROR_MESSAGE
        } else {
            self.message()
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AppError::DatabaseError(m)
            | AppError::NotFound(m)
            | AppError::Unauthorized(m)
            | AppError::ValidationError(m)
            | AppError::ConfigError(m)
            | AppError::InternalError(m)
            | AppError::Unknown(m) => m,
        }
    }
}

impl From<diesel::result::Error> for AppError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::NotFound => {
                AppError::NotFound("Record not found in database".to_string())
            }
            _ => AppError::DatabaseError(err.to_string()),
        }
    }
}

impl From<diesel::r2d2::PoolError> for AppError {
    fn from(err: diesel::r2d2::PoolError) -> Self {
        AppError::DatabaseError(format!("Database pool error: {}", err))
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::InternalError(format!("Blocking task failed: {}", err))
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody<'a> {
    status_code: u16,
    error: &'a str,
    message: &'a str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("Request failed: {}", self);
        } else {
            log::debug!("Request rejected: {}", self);
        }

        let body = ErrorBody {
            status_code: status.as_u16(),
            error: self.kind(),
            message: self.public_message(),
        };

        (status, Json(body)).into_response()
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
