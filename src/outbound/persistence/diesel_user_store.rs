//! PostgreSQL-backed `UserStore` implementation using Diesel.
//!
//! Email uniqueness is enforced by the database constraint in the same
//! statement as the insert, so two concurrent registrations with one email
//! can never both commit.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{NewAccount, UserStore, UserStoreError};
use crate::domain::{Account, Email, PasswordDigest, ProfileRecord, ProfileUpdate, Role, UserId};

use super::error_mapping::{
    StoreFailure, classify_diesel_error, classify_pool_error, is_unique_violation,
};
use super::models::{NewUserRow, ProfileFieldsUpdate, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel-backed implementation of the `UserStore` port.
#[derive(Clone)]
pub struct DieselUserStore {
    pool: DbPool,
}

impl DieselUserStore {
    /// Create a new store with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> UserStoreError {
    match classify_pool_error(error) {
        StoreFailure::Connection(message) => UserStoreError::connection(message),
        StoreFailure::Query(message) => UserStoreError::query(message),
    }
}

fn map_diesel_error(error: diesel::result::Error) -> UserStoreError {
    if is_unique_violation(&error) {
        return UserStoreError::DuplicateEmail;
    }
    match classify_diesel_error(error) {
        StoreFailure::Connection(message) => UserStoreError::connection(message),
        StoreFailure::Query(message) => UserStoreError::query(message),
    }
}

fn row_to_account(row: &UserRow) -> Result<Account, UserStoreError> {
    Ok(Account {
        user_id: UserId::new(row.id),
        email: Email::new(&row.email)
            .map_err(|err| UserStoreError::query(format!("stored email invalid: {err}")))?,
        role: Role::parse(&row.role)
            .map_err(|err| UserStoreError::query(format!("stored role invalid: {err}")))?,
        is_verified: row.is_verified,
    })
}

fn row_to_profile(row: UserRow) -> Result<ProfileRecord, UserStoreError> {
    let account = row_to_account(&row)?;
    Ok(ProfileRecord {
        account,
        display_name: row.display_name,
        bio: row.bio,
        avatar_url: row.avatar_url,
        created_at: row.created_at,
    })
}

#[async_trait]
impl UserStore for DieselUserStore {
    async fn insert_account(&self, account: &NewAccount) -> Result<Account, UserStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewUserRow {
            email: account.email.as_str(),
            password_digest: account.password_digest.as_str(),
            role: account.role.as_str(),
            is_verified: account.is_verified,
        };

        let row: UserRow = diesel::insert_into(users::table)
            .values(&new_row)
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        row_to_account(&row)
    }

    async fn find_by_credentials(
        &self,
        email: &Email,
        digest: &PasswordDigest,
    ) -> Result<Option<Account>, UserStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<UserRow> = users::table
            .filter(
                users::email
                    .eq(email.as_str())
                    .and(users::password_digest.eq(digest.as_str())),
            )
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.as_ref().map(row_to_account).transpose()
    }

    async fn find_profile(&self, id: UserId) -> Result<Option<ProfileRecord>, UserStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<UserRow> = users::table
            .find(id.as_i64())
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_profile).transpose()
    }

    async fn update_profile(
        &self,
        id: UserId,
        update: &ProfileUpdate,
    ) -> Result<bool, UserStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        // Whole-record overwrite: None clears the column rather than keeping it.
        let changeset = ProfileFieldsUpdate {
            display_name: update.display_name.as_deref(),
            bio: update.bio.as_deref(),
            avatar_url: update.avatar_url.as_deref(),
        };

        let updated_rows = diesel::update(users::table.find(id.as_i64()))
            .set(&changeset)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(updated_rows > 0)
    }
}

#[cfg(test)]
mod tests {
    //! Mapping coverage; live-database behaviour is exercised end to end
    //! through the service tests and the HTTP integration suite.
    use super::*;
    use chrono::Utc;
    use rstest::rstest;

    fn user_row(role: &str) -> UserRow {
        UserRow {
            id: 7,
            email: "ada@example.org".into(),
            role: role.into(),
            is_verified: true,
            display_name: None,
            bio: None,
            avatar_url: None,
            created_at: Utc::now(),
        }
    }

    #[rstest]
    fn pool_error_maps_to_connection_error() {
        let err = map_pool_error(PoolError::checkout("connection refused"));
        assert!(matches!(err, UserStoreError::Connection { .. }));
        assert!(err.to_string().contains("connection refused"));
    }

    #[rstest]
    fn not_found_maps_to_query_error() {
        let err = map_diesel_error(diesel::result::Error::NotFound);
        assert!(matches!(err, UserStoreError::Query { .. }));
    }

    #[rstest]
    fn row_with_valid_role_converts() {
        let account = row_to_account(&user_row("special")).expect("converts");
        assert_eq!(account.user_id, UserId::new(7));
        assert_eq!(account.role, Role::Special);
    }

    #[rstest]
    fn row_with_corrupt_role_is_a_query_error() {
        let err = row_to_account(&user_row("root")).expect_err("corrupt role rejected");
        assert!(matches!(err, UserStoreError::Query { .. }));
    }
}
