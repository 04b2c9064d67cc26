//! Domain ports defining the edges of the hexagon.
//!
//! Driving ports (`Accounts`, `FileRegistry`, `Profiles`) are what the HTTP
//! adapter calls; driven ports (`UserStore`, `FileStore`, `ContentStore`)
//! are what the services call out to. Each driven port exposes strongly typed
//! errors so adapters map their failures into predictable variants instead of
//! returning a catch-all.

use async_trait::async_trait;
use thiserror::Error;
use zeroize::Zeroizing;

use super::{
    Account, Email, Error, FileId, FileListing, FileRecord, OwnerStats, PasswordDigest,
    ProfileRecord, ProfileUpdate, ProfileView, Role, StorageKey, UserId,
};

/// Registration input for the credential store.
pub struct RegisterRequest {
    pub email: Email,
    pub password: Zeroizing<String>,
    pub requested_role: Role,
    /// Shared secret presented when requesting the special role.
    pub privileged_code: Option<String>,
}

/// Authentication input for the credential store.
pub struct Credentials {
    pub email: Email,
    pub password: Zeroizing<String>,
}

/// Metadata-only file creation input (content already hosted elsewhere).
#[derive(Debug, Clone)]
pub struct CreateFileRequest {
    pub owner_id: UserId,
    pub filename: String,
    pub file_url: String,
    pub byte_size: i64,
    pub mime_type: String,
}

/// Raw-content upload input; the registry decodes, stores, and persists.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub owner_id: UserId,
    pub filename: String,
    /// Base64-encoded file content as received from the transfer encoding.
    pub content_base64: String,
    pub mime_type: String,
}

/// Account row the credential store asks its adapter to persist.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub email: Email,
    pub password_digest: PasswordDigest,
    pub role: Role,
    pub is_verified: bool,
}

/// File row the registry asks its adapter to persist.
#[derive(Debug, Clone)]
pub struct NewFile {
    pub owner_id: UserId,
    pub filename: String,
    pub file_url: String,
    pub byte_size: i64,
    pub mime_type: String,
}

/// Persistence errors raised by [`UserStore`] adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserStoreError {
    /// Another account already holds this email.
    #[error("email is already registered")]
    DuplicateEmail,
    /// Store connection could not be established or was lost.
    #[error("user store connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("user store query failed: {message}")]
    Query { message: String },
}

impl UserStoreError {
    /// Helper for connection oriented failures.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Helper for query failures.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Persistence errors raised by [`FileStore`] adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FileStoreError {
    /// The owning user reference does not resolve.
    #[error("owner does not exist")]
    OwnerNotFound,
    /// The owner exists but its role does not admit uploads.
    #[error("owner is not permitted to upload")]
    OwnerNotPermitted,
    /// Store connection could not be established or was lost.
    #[error("file store connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("file store query failed: {message}")]
    Query { message: String },
}

impl FileStoreError {
    /// Helper for connection oriented failures.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Helper for query failures.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Errors raised by the external content-store collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentStoreError {
    /// The storage host rejected or failed the write.
    #[error("content store upstream failure: {message}")]
    Upstream { message: String },
}

impl ContentStoreError {
    /// Helper for upstream failures.
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream {
            message: message.into(),
        }
    }
}

/// Persistence port owning user identity, credentials, and profile fields.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new account, enforcing email uniqueness atomically with the
    /// insert itself. Returns the stored record including generated identity.
    async fn insert_account(&self, account: &NewAccount) -> Result<Account, UserStoreError>;

    /// Look up the account matching both email and digest exactly.
    async fn find_by_credentials(
        &self,
        email: &Email,
        digest: &PasswordDigest,
    ) -> Result<Option<Account>, UserStoreError>;

    /// Fetch the full profile record for a user.
    async fn find_profile(&self, id: UserId) -> Result<Option<ProfileRecord>, UserStoreError>;

    /// Overwrite the profile fields as a whole. Returns false when no such
    /// user exists.
    async fn update_profile(
        &self,
        id: UserId,
        update: &ProfileUpdate,
    ) -> Result<bool, UserStoreError>;
}

/// Persistence port owning all file metadata.
#[async_trait]
pub trait FileStore: Send + Sync {
    /// Insert a file after confirming, in the same transaction, that the
    /// owner exists and its role admits uploads.
    async fn insert_owned(&self, file: &NewFile) -> Result<FileRecord, FileStoreError>;

    /// All files joined with minimal uploader identity, newest first.
    async fn list_with_uploaders(&self) -> Result<Vec<FileListing>, FileStoreError>;

    /// Atomically increment the download counter and return the location
    /// reference in the same round trip. `None` when the file is unknown, in
    /// which case no counter changed.
    async fn record_download(&self, id: FileId) -> Result<Option<String>, FileStoreError>;

    /// Count and summed download counters for one owner's files.
    async fn stats_for(&self, owner: UserId) -> Result<OwnerStats, FileStoreError>;
}

/// Port to the external binary-storage collaborator.
///
/// The core hands bytes over exactly once and keeps only the returned
/// location reference; it never reads content back.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Store `bytes` under `key` and return the public location reference.
    async fn store(
        &self,
        key: &StorageKey,
        bytes: &[u8],
        mime_type: &str,
    ) -> Result<String, ContentStoreError>;
}

/// Driving port for registration and authentication.
#[async_trait]
pub trait Accounts: Send + Sync {
    /// Register a new account, gating the special role on the privileged code.
    async fn register(&self, request: RegisterRequest) -> Result<Account, Error>;

    /// Authenticate by exact email and digest match.
    async fn authenticate(&self, credentials: Credentials) -> Result<Account, Error>;
}

/// Driving port for the file registry.
#[async_trait]
pub trait FileRegistry: Send + Sync {
    /// List all files with uploader identity, newest first.
    async fn list(&self) -> Result<Vec<FileListing>, Error>;

    /// Create metadata for already-hosted content, role-gated.
    async fn create(&self, request: CreateFileRequest) -> Result<FileRecord, Error>;

    /// Decode raw content, store it, and persist its metadata, role-gated.
    async fn upload(&self, request: UploadRequest) -> Result<FileRecord, Error>;

    /// Acknowledge a download: bump the counter, return the location.
    async fn record_download(&self, id: FileId) -> Result<String, Error>;
}

/// Driving port for the profile aggregator.
#[async_trait]
pub trait Profiles: Send + Sync {
    /// Compose the user record with freshly computed file aggregates.
    async fn profile(&self, id: UserId) -> Result<ProfileView, Error>;

    /// Overwrite the profile fields as a whole.
    async fn update_profile(&self, id: UserId, update: ProfileUpdate) -> Result<(), Error>;
}
