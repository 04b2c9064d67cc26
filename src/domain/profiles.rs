//! Profile aggregator service.
//!
//! Composes a user record with aggregates recomputed from the file registry
//! on every read, and owns writes to the mutable profile fields.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{FileStore, FileStoreError, Profiles, UserStore, UserStoreError};
use crate::domain::{Error, ProfileUpdate, ProfileView, UserId};

/// Profile service implementing the [`Profiles`] driving port.
#[derive(Clone)]
pub struct ProfileService {
    users: Arc<dyn UserStore>,
    files: Arc<dyn FileStore>,
}

impl ProfileService {
    /// Create a new service over the user and file stores.
    pub fn new(users: Arc<dyn UserStore>, files: Arc<dyn FileStore>) -> Self {
        Self { users, files }
    }
}

fn map_user_store_error(error: UserStoreError) -> Error {
    match error {
        UserStoreError::DuplicateEmail => {
            Error::internal("unexpected duplicate email during profile access")
        }
        UserStoreError::Connection { message } => {
            Error::store_unavailable(format!("user store unavailable: {message}"))
        }
        UserStoreError::Query { message } => {
            Error::internal(format!("user store error: {message}"))
        }
    }
}

fn map_file_store_error(error: FileStoreError) -> Error {
    match error {
        FileStoreError::Connection { message } => {
            Error::store_unavailable(format!("file store unavailable: {message}"))
        }
        other => Error::internal(format!("file store error: {other}")),
    }
}

#[async_trait]
impl Profiles for ProfileService {
    async fn profile(&self, id: UserId) -> Result<ProfileView, Error> {
        let profile = self
            .users
            .find_profile(id)
            .await
            .map_err(map_user_store_error)?
            .ok_or_else(|| Error::user_not_found("user does not exist"))?;

        let stats = self
            .files
            .stats_for(id)
            .await
            .map_err(map_file_store_error)?;

        debug!(user_id = %id, files_count = stats.files_count, "profile aggregated");
        Ok(ProfileView { profile, stats })
    }

    async fn update_profile(&self, id: UserId, update: ProfileUpdate) -> Result<(), Error> {
        let updated = self
            .users
            .update_profile(id, &update)
            .await
            .map_err(map_user_store_error)?;
        if !updated {
            return Err(Error::user_not_found("user does not exist"));
        }
        Ok(())
    }
}
