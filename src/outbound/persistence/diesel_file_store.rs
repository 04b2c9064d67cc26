//! PostgreSQL-backed `FileStore` implementation using Diesel.
//!
//! The owner-role check and the file insert run inside one transaction so a
//! concurrent change to the owner row cannot slip a file past the gate. The
//! download counter is bumped with a single `UPDATE .. RETURNING` statement,
//! which keeps concurrent acknowledgements lossless without row locking in
//! application code.

use async_trait::async_trait;
use diesel::dsl::sum;
use diesel::prelude::*;
use diesel::result::Error as DieselError;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

use crate::domain::authorization::can_upload;
use crate::domain::ports::{FileStore, FileStoreError, NewFile};
use crate::domain::{
    Email, FileId, FileListing, FileRecord, OwnerStats, Role, UploaderSummary, UserId,
};

use super::error_mapping::{
    StoreFailure, classify_diesel_error, classify_pool_error, is_foreign_key_violation,
};
use super::models::{FileRow, NewFileRow, UploaderRow};
use super::pool::{DbPool, PoolError};
use super::schema::{files, users};

/// Diesel-backed implementation of the `FileStore` port.
#[derive(Clone)]
pub struct DieselFileStore {
    pool: DbPool,
}

impl DieselFileStore {
    /// Create a new store with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Failure inside the insert transaction; `From<DieselError>` lets `?`
/// propagate query failures while the gate variants abort the transaction.
enum InsertFailure {
    OwnerNotFound,
    OwnerNotPermitted,
    CorruptRole(String),
    Database(DieselError),
}

impl From<DieselError> for InsertFailure {
    fn from(error: DieselError) -> Self {
        Self::Database(error)
    }
}

fn map_pool_error(error: PoolError) -> FileStoreError {
    match classify_pool_error(error) {
        StoreFailure::Connection(message) => FileStoreError::connection(message),
        StoreFailure::Query(message) => FileStoreError::query(message),
    }
}

fn map_diesel_error(error: DieselError) -> FileStoreError {
    match classify_diesel_error(error) {
        StoreFailure::Connection(message) => FileStoreError::connection(message),
        StoreFailure::Query(message) => FileStoreError::query(message),
    }
}

fn map_insert_failure(failure: InsertFailure) -> FileStoreError {
    match failure {
        InsertFailure::OwnerNotFound => FileStoreError::OwnerNotFound,
        InsertFailure::OwnerNotPermitted => FileStoreError::OwnerNotPermitted,
        InsertFailure::CorruptRole(role) => {
            FileStoreError::query(format!("stored role invalid: {role}"))
        }
        // The referential constraint backs up the in-transaction check.
        InsertFailure::Database(error) if is_foreign_key_violation(&error) => {
            FileStoreError::OwnerNotFound
        }
        InsertFailure::Database(error) => map_diesel_error(error),
    }
}

fn row_to_record(row: FileRow) -> FileRecord {
    FileRecord {
        file_id: FileId::new(row.id),
        owner_id: UserId::new(row.owner_id),
        filename: row.filename,
        file_url: row.file_url,
        byte_size: row.byte_size,
        mime_type: row.mime_type,
        downloads_count: i64::from(row.downloads_count),
        created_at: row.created_at,
    }
}

fn row_to_uploader(row: UploaderRow) -> Result<UploaderSummary, FileStoreError> {
    Ok(UploaderSummary {
        user_id: UserId::new(row.id),
        email: Email::new(row.email)
            .map_err(|err| FileStoreError::query(format!("stored email invalid: {err}")))?,
        role: Role::parse(&row.role)
            .map_err(|err| FileStoreError::query(format!("stored role invalid: {err}")))?,
        is_verified: row.is_verified,
    })
}

#[async_trait]
impl FileStore for DieselFileStore {
    async fn insert_owned(&self, file: &NewFile) -> Result<FileRecord, FileStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let owner_id = file.owner_id.as_i64();
        let new_row = NewFileRow {
            owner_id,
            filename: &file.filename,
            file_url: &file.file_url,
            byte_size: file.byte_size,
            mime_type: &file.mime_type,
        };

        let row = conn
            .transaction::<FileRow, InsertFailure, _>(|conn| {
                async move {
                    let role: Option<String> = users::table
                        .find(owner_id)
                        .select(users::role)
                        .first(conn)
                        .await
                        .optional()?;

                    let role = role.ok_or(InsertFailure::OwnerNotFound)?;
                    let role =
                        Role::parse(&role).map_err(|_| InsertFailure::CorruptRole(role))?;
                    if !can_upload(role) {
                        return Err(InsertFailure::OwnerNotPermitted);
                    }

                    let row = diesel::insert_into(files::table)
                        .values(&new_row)
                        .returning(FileRow::as_returning())
                        .get_result(conn)
                        .await?;
                    Ok(row)
                }
                .scope_boxed()
            })
            .await
            .map_err(map_insert_failure)?;

        Ok(row_to_record(row))
    }

    async fn list_with_uploaders(&self) -> Result<Vec<FileListing>, FileStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<(FileRow, UploaderRow)> = files::table
            .inner_join(users::table)
            .order(files::created_at.desc())
            .select((FileRow::as_select(), UploaderRow::as_select()))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter()
            .map(|(file, uploader)| {
                Ok(FileListing {
                    file: row_to_record(file),
                    uploader: row_to_uploader(uploader)?,
                })
            })
            .collect()
    }

    async fn record_download(&self, id: FileId) -> Result<Option<String>, FileStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::update(files::table.find(id.as_i64()))
            .set(files::downloads_count.eq(files::downloads_count + 1))
            .returning(files::file_url)
            .get_result::<String>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)
    }

    async fn stats_for(&self, owner: UserId) -> Result<OwnerStats, FileStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let files_count: i64 = files::table
            .filter(files::owner_id.eq(owner.as_i64()))
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        // SUM over an empty set is NULL, not zero.
        let total_downloads: Option<i64> = files::table
            .filter(files::owner_id.eq(owner.as_i64()))
            .select(sum(files::downloads_count))
            .first(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(OwnerStats {
            files_count,
            total_downloads: total_downloads.unwrap_or(0),
        })
    }
}
