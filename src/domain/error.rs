//! Domain error envelope.
//!
//! Transport agnostic: the HTTP adapter maps [`ErrorCode`] values to status
//! codes, and any other adapter can do its own mapping without touching the
//! domain.

use crate::middleware::trace::TraceId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request is malformed or fails validation.
    InvalidRequest,
    /// Registration asked for the special role with a wrong privileged code.
    InvalidPrivilegedCode,
    /// The email address is already taken by another account.
    EmailAlreadyRegistered,
    /// Email and password did not match any account.
    InvalidCredentials,
    /// The identity is known but not permitted to perform this action.
    Forbidden,
    /// No user with the requested identity exists.
    UserNotFound,
    /// No file with the requested identity exists.
    FileNotFound,
    /// Raw upload content could not be decoded from its transfer encoding.
    MalformedContent,
    /// The backing store or an external collaborator is unavailable.
    StoreUnavailable,
    /// An unexpected error occurred inside the domain.
    InternalError,
}

/// Error payload returned to callers.
///
/// # Examples
/// ```
/// use filehub::domain::{Error, ErrorCode};
///
/// let err = Error::new(ErrorCode::FileNotFound, "no such file");
/// assert_eq!(err.code, ErrorCode::FileNotFound);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct Error {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    pub code: ErrorCode,
    /// Human-readable error message.
    #[schema(example = "Something went wrong")]
    pub message: String,
    /// Correlation identifier for tracing this error across systems.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
    /// Supplementary structured details, e.g. field-level validation errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl Error {
    /// Create a new error.
    ///
    /// Captures the current trace identifier if one is in scope so the error
    /// payload is correlated automatically.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            trace_id: TraceId::current().map(|id| id.to_string()),
            details: None,
        }
    }

    /// Attach a trace identifier to the error.
    pub fn with_trace_id(mut self, id: impl Into<String>) -> Self {
        self.trace_id = Some(id.into());
        self
    }

    /// Attach structured details to the error.
    ///
    /// # Examples
    /// ```
    /// use filehub::domain::Error;
    /// use serde_json::json;
    ///
    /// let err = Error::invalid_request("bad").with_details(json!({ "field": "email" }));
    /// assert!(err.details.is_some());
    /// ```
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::InvalidPrivilegedCode`].
    pub fn invalid_privileged_code(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidPrivilegedCode, message)
    }

    /// Convenience constructor for [`ErrorCode::EmailAlreadyRegistered`].
    pub fn email_already_registered(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::EmailAlreadyRegistered, message)
    }

    /// Convenience constructor for [`ErrorCode::InvalidCredentials`].
    pub fn invalid_credentials(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidCredentials, message)
    }

    /// Convenience constructor for [`ErrorCode::Forbidden`].
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Forbidden, message)
    }

    /// Convenience constructor for [`ErrorCode::UserNotFound`].
    pub fn user_not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::UserNotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::FileNotFound`].
    pub fn file_not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::FileNotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::MalformedContent`].
    pub fn malformed_content(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::MalformedContent, message)
    }

    /// Convenience constructor for [`ErrorCode::StoreUnavailable`].
    pub fn store_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StoreUnavailable, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}
