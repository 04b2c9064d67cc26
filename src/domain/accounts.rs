//! Credential store service: registration and authentication.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::ports::{
    Accounts, Credentials, NewAccount, RegisterRequest, UserStore, UserStoreError,
};
use crate::domain::{Account, Error, PasswordDigest, Role};

/// Shared secret gating registration of special accounts.
///
/// Injected from configuration so the value can rotate without code changes.
#[derive(Debug, Clone)]
pub struct PrivilegedCode(String);

impl PrivilegedCode {
    /// Wrap the configured secret.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Whether a presented code matches the configured secret.
    pub fn matches(&self, presented: Option<&str>) -> bool {
        presented == Some(self.0.as_str())
    }
}

/// Account service implementing the [`Accounts`] driving port.
#[derive(Clone)]
pub struct AccountService {
    store: Arc<dyn UserStore>,
    privileged_code: PrivilegedCode,
}

impl AccountService {
    /// Create a new service over a user store and the configured secret.
    pub fn new(store: Arc<dyn UserStore>, privileged_code: PrivilegedCode) -> Self {
        Self {
            store,
            privileged_code,
        }
    }
}

fn map_store_error(error: UserStoreError) -> Error {
    match error {
        UserStoreError::DuplicateEmail => {
            Error::email_already_registered("email is already registered")
        }
        UserStoreError::Connection { message } => {
            Error::store_unavailable(format!("user store unavailable: {message}"))
        }
        UserStoreError::Query { message } => {
            Error::internal(format!("user store error: {message}"))
        }
    }
}

#[async_trait]
impl Accounts for AccountService {
    async fn register(&self, request: RegisterRequest) -> Result<Account, Error> {
        // Validation precedes any write: a wrong code must leave no row behind.
        if request.requested_role == Role::Special
            && !self.privileged_code.matches(request.privileged_code.as_deref())
        {
            return Err(Error::invalid_privileged_code(
                "invalid code for special user registration",
            ));
        }

        let account = NewAccount {
            email: request.email,
            password_digest: PasswordDigest::derive(&request.password),
            role: request.requested_role,
            is_verified: request.requested_role == Role::Special,
        };

        let stored = self
            .store
            .insert_account(&account)
            .await
            .map_err(map_store_error)?;

        info!(user_id = %stored.user_id, role = %stored.role, "account registered");
        Ok(stored)
    }

    async fn authenticate(&self, credentials: Credentials) -> Result<Account, Error> {
        let digest = PasswordDigest::derive(&credentials.password);
        let account = self
            .store
            .find_by_credentials(&credentials.email, &digest)
            .await
            .map_err(map_store_error)?;

        // One message for unknown email and wrong password alike.
        account.ok_or_else(|| Error::invalid_credentials("invalid email or password"))
    }
}
