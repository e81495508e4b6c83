//! Request-boundary error type and its JSON representation.
//!
//! Every failure is rendered as
//!
//! ```json
//! { "error": { "code": 1003, "message": "Invalid expire_date" } }
//! ```
//!
//! with the numeric codes listed in [`codes`].

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use validator::ValidationErrors;

use crate::domain::repositories::StoreError;

/// Numeric error codes carried in the `error.code` field.
pub mod codes {
    pub const INVALID_PARAMETER: u32 = 1001;
    pub const INVALID_URL: u32 = 1002;
    pub const INVALID_EXPIRY: u32 = 1003;
    pub const STORE_FAILURE: u32 = 1004;
    pub const LINK_EXPIRED: u32 = 1005;
    pub const LINK_NOT_FOUND: u32 = 1006;
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorInfo,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: u32,
    pub message: String,
}

/// Which input rule a [`AppError::Validation`] violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationKind {
    MissingField,
    InvalidParameter,
    InvalidUrl,
    InvalidExpiry,
}

impl ValidationKind {
    pub fn code(self) -> u32 {
        match self {
            Self::MissingField | Self::InvalidParameter => codes::INVALID_PARAMETER,
            Self::InvalidUrl => codes::INVALID_URL,
            Self::InvalidExpiry => codes::INVALID_EXPIRY,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Client input broke a rule. Always 400.
    #[error("{message}")]
    Validation {
        kind: ValidationKind,
        field: String,
        message: String,
    },

    /// The code exists but its expiry has passed. 410.
    #[error("Short link has expired")]
    Expired { code: String },

    /// No destination is stored for the code. 404.
    #[error("Short link not found")]
    NotFound { code: String },

    /// Backend failure. Reported as 400 to match the established API.
    #[error("Store error: {0}")]
    Storage(#[from] StoreError),
}

impl AppError {
    pub fn missing_field(field: &str) -> Self {
        Self::Validation {
            kind: ValidationKind::MissingField,
            field: field.to_string(),
            message: format!("Invalid parameter {}", field),
        }
    }

    pub fn invalid_parameter(field: &str, message: impl Into<String>) -> Self {
        Self::Validation {
            kind: ValidationKind::InvalidParameter,
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub fn invalid_url(message: impl Into<String>) -> Self {
        Self::Validation {
            kind: ValidationKind::InvalidUrl,
            field: "full_url".to_string(),
            message: message.into(),
        }
    }

    pub fn invalid_expiry(message: impl Into<String>) -> Self {
        Self::Validation {
            kind: ValidationKind::InvalidExpiry,
            field: "expire_date".to_string(),
            message: message.into(),
        }
    }

    pub fn expired(code: impl Into<String>) -> Self {
        Self::Expired { code: code.into() }
    }

    pub fn not_found(code: impl Into<String>) -> Self {
        Self::NotFound { code: code.into() }
    }

    /// Numeric code for the response body.
    pub fn error_code(&self) -> u32 {
        match self {
            Self::Validation { kind, .. } => kind.code(),
            Self::Expired { .. } => codes::LINK_EXPIRED,
            Self::NotFound { .. } => codes::LINK_NOT_FOUND,
            Self::Storage(_) => codes::STORE_FAILURE,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } | Self::Storage(_) => StatusCode::BAD_REQUEST,
            Self::Expired { .. } => StatusCode::GONE,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        ErrorInfo {
            code: self.error_code(),
            message: self.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Storage(e) => tracing::error!("Store failure: {}", e),
            AppError::Validation { field, message, .. } => {
                tracing::warn!(field = %field, "Rejected request: {}", message)
            }
            AppError::Expired { code } => tracing::info!(code = %code, "Short link expired"),
            AppError::NotFound { code } => tracing::info!(code = %code, "Short link not found"),
        }

        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (self.status_code(), Json(body)).into_response()
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let field_errors = errors.field_errors();

        let mut fields: Vec<String> = field_errors.keys().map(|f| f.to_string()).collect();
        fields.sort_unstable();

        let all_missing = field_errors
            .values()
            .flat_map(|errs| errs.iter())
            .all(|e| e.code == "required" || e.code == "length");

        let joined = fields.join(",");
        let kind = if all_missing {
            ValidationKind::MissingField
        } else {
            ValidationKind::InvalidParameter
        };

        AppError::Validation {
            kind,
            message: format!("Invalid parameter {}", joined),
            field: joined,
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::invalid_parameter(
            "body",
            format!("Invalid request body ({})", rejection.body_text()),
        )
    }
}
