//! User identity model.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Validation errors returned by the identity newtypes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    /// Email is empty after trimming whitespace.
    #[error("email must not be empty")]
    EmptyEmail,
    /// Email carries surrounding whitespace or no `@` separator.
    #[error("email must be a plausible address without surrounding whitespace")]
    InvalidEmail,
    /// Role string is neither `regular` nor `special`.
    #[error("unknown role: {0}")]
    UnknownRole(String),
}

/// Opaque numeric user identifier assigned by the store on creation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a store-assigned identifier.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Access the raw identifier.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// Email address, stored case-sensitively with no normalisation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Validate and construct an [`Email`].
    ///
    /// The check is deliberately shallow: uniqueness and deliverability are
    /// the store's and the mail system's business, not the type's.
    pub fn new(value: impl Into<String>) -> Result<Self, UserValidationError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(UserValidationError::EmptyEmail);
        }
        if raw.trim() != raw || !raw.contains('@') {
            return Err(UserValidationError::InvalidEmail);
        }
        Ok(Self(raw))
    }

    /// Borrow the address as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.0
    }
}

impl TryFrom<String> for Email {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Role assigned once at registration.
///
/// A plain two-valued flag, never a hierarchy: `special` is the only role
/// permitted to create files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Regular,
    Special,
}

impl Role {
    /// Stable string form used in the store and on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::Special => "special",
        }
    }

    /// Parse the stored string form.
    pub fn parse(value: &str) -> Result<Self, UserValidationError> {
        match value {
            "regular" => Ok(Self::Regular),
            "special" => Ok(Self::Special),
            other => Err(UserValidationError::UnknownRole(other.to_owned())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Registered account as the credential store hands it to adapters.
///
/// ## Invariants
/// - `role` is fixed at registration; no operation upgrades it afterwards.
/// - `verified` is true exactly when the account registered as `special`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Account {
    /// Store-assigned identity.
    #[schema(value_type = i64, example = 42)]
    pub user_id: UserId,
    /// Unique email address.
    #[schema(value_type = String, example = "ada@example.org")]
    pub email: Email,
    /// Role granted at registration.
    #[serde(rename = "user_type")]
    pub role: Role,
    /// Informational verification flag; gates nothing in this core.
    pub is_verified: bool,
}
