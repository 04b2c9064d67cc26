//! File registry service: creation, listing, download accounting, and raw
//! upload ingestion.

use std::sync::Arc;

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use tracing::info;

use crate::domain::authorization::can_upload;
use crate::domain::ports::{
    ContentStore, ContentStoreError, CreateFileRequest, FileRegistry, FileStore, FileStoreError,
    NewFile, UploadRequest, UserStore, UserStoreError,
};
use crate::domain::{Error, FileId, FileListing, FileRecord, StorageKey};

/// File registry implementing the [`FileRegistry`] driving port.
///
/// The user store is consulted to fail raw uploads fast, before any bytes
/// reach the content store; the file store re-verifies the owner inside the
/// insert transaction so the check and the write commit together.
#[derive(Clone)]
pub struct FileRegistryService {
    files: Arc<dyn FileStore>,
    users: Arc<dyn UserStore>,
    content: Arc<dyn ContentStore>,
}

impl FileRegistryService {
    /// Create a new registry over its collaborating ports.
    pub fn new(
        files: Arc<dyn FileStore>,
        users: Arc<dyn UserStore>,
        content: Arc<dyn ContentStore>,
    ) -> Self {
        Self {
            files,
            users,
            content,
        }
    }

    async fn ensure_owner_may_upload(
        &self,
        owner: crate::domain::UserId,
    ) -> Result<(), Error> {
        // A missing owner and a regular owner fail identically so the
        // outcome never discloses whether the identity exists.
        let profile = self
            .users
            .find_profile(owner)
            .await
            .map_err(map_user_store_error)?
            .ok_or_else(|| Error::forbidden("only special users may upload files"))?;
        if !can_upload(profile.account.role) {
            return Err(Error::forbidden("only special users may upload files"));
        }
        Ok(())
    }
}

fn map_file_store_error(error: FileStoreError) -> Error {
    match error {
        FileStoreError::OwnerNotFound | FileStoreError::OwnerNotPermitted => {
            Error::forbidden("only special users may upload files")
        }
        FileStoreError::Connection { message } => {
            Error::store_unavailable(format!("file store unavailable: {message}"))
        }
        FileStoreError::Query { message } => {
            Error::internal(format!("file store error: {message}"))
        }
    }
}

fn map_user_store_error(error: UserStoreError) -> Error {
    match error {
        UserStoreError::DuplicateEmail => {
            Error::internal("unexpected duplicate email during owner lookup")
        }
        UserStoreError::Connection { message } => {
            Error::store_unavailable(format!("user store unavailable: {message}"))
        }
        UserStoreError::Query { message } => {
            Error::internal(format!("user store error: {message}"))
        }
    }
}

fn map_content_store_error(error: ContentStoreError) -> Error {
    match error {
        ContentStoreError::Upstream { message } => {
            Error::store_unavailable(format!("content store unavailable: {message}"))
        }
    }
}

#[async_trait]
impl FileRegistry for FileRegistryService {
    async fn list(&self) -> Result<Vec<FileListing>, Error> {
        self.files
            .list_with_uploaders()
            .await
            .map_err(map_file_store_error)
    }

    async fn create(&self, request: CreateFileRequest) -> Result<FileRecord, Error> {
        let file = NewFile {
            owner_id: request.owner_id,
            filename: request.filename,
            file_url: request.file_url,
            byte_size: request.byte_size,
            mime_type: request.mime_type,
        };
        let stored = self
            .files
            .insert_owned(&file)
            .await
            .map_err(map_file_store_error)?;
        info!(file_id = %stored.file_id, owner_id = %stored.owner_id, "file registered");
        Ok(stored)
    }

    async fn upload(&self, request: UploadRequest) -> Result<FileRecord, Error> {
        self.ensure_owner_may_upload(request.owner_id).await?;

        // The persisted size is the decoded length, never a caller claim.
        let bytes = BASE64
            .decode(request.content_base64.as_bytes())
            .map_err(|err| Error::malformed_content(format!("invalid file content: {err}")))?;

        let key = StorageKey::derive(&request.filename);
        let file_url = self
            .content
            .store(&key, &bytes, &request.mime_type)
            .await
            .map_err(map_content_store_error)?;

        let file = NewFile {
            owner_id: request.owner_id,
            filename: request.filename,
            file_url,
            byte_size: bytes.len() as i64,
            mime_type: request.mime_type,
        };
        let stored = self
            .files
            .insert_owned(&file)
            .await
            .map_err(map_file_store_error)?;
        info!(
            file_id = %stored.file_id,
            owner_id = %stored.owner_id,
            byte_size = stored.byte_size,
            "file content ingested"
        );
        Ok(stored)
    }

    async fn record_download(&self, id: FileId) -> Result<String, Error> {
        self.files
            .record_download(id)
            .await
            .map_err(map_file_store_error)?
            .ok_or_else(|| Error::file_not_found("file does not exist"))
    }
}
