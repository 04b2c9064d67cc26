//! File metadata model.
//!
//! The core persists metadata and a storage location reference only; file
//! bytes live with an external collaborator and are never read back here.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::{Email, Role, UserId};

/// Opaque numeric file identifier assigned by the store on creation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
pub struct FileId(i64);

impl FileId {
    /// Wrap a store-assigned identifier.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Access the raw identifier.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for FileId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// Collision-resistant object-storage key: a random 128-bit identifier
/// prefixed to the original filename so distinct uploads sharing a name
/// never overwrite each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKey(String);

impl StorageKey {
    /// Derive a fresh key for an upload of `filename`.
    pub fn derive(filename: &str) -> Self {
        Self(format!("{}_{filename}", Uuid::new_v4()))
    }

    /// Borrow the key as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persisted file metadata.
///
/// ## Invariants
/// - `downloads_count` starts at zero and only ever increases.
/// - All other fields are immutable once the row exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FileRecord {
    /// Store-assigned identity.
    #[schema(value_type = i64, example = 7)]
    pub file_id: FileId,
    /// Owning user; must have been `special` at creation time.
    #[schema(value_type = i64, example = 42)]
    pub owner_id: UserId,
    /// Filename exactly as supplied by the uploader.
    pub filename: String,
    /// Storage location reference; opaque URL to externally hosted bytes.
    pub file_url: String,
    /// Size of the stored content in bytes.
    pub byte_size: i64,
    /// MIME type string as supplied.
    pub mime_type: String,
    /// Monotonically non-decreasing download counter.
    pub downloads_count: i64,
    /// Creation timestamp assigned by the store.
    pub created_at: DateTime<Utc>,
}

/// Minimal uploader identity joined into listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UploaderSummary {
    /// Uploader identity.
    #[schema(value_type = i64, example = 42)]
    pub user_id: UserId,
    /// Uploader email.
    #[schema(value_type = String, example = "ada@example.org")]
    pub email: Email,
    /// Uploader role.
    #[serde(rename = "user_type")]
    pub role: Role,
    /// Uploader verification flag.
    pub is_verified: bool,
}

/// One entry of the public file listing: metadata plus uploader identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FileListing {
    #[serde(flatten)]
    pub file: FileRecord,
    pub uploader: UploaderSummary,
}

/// Aggregates over one owner's files, recomputed on every read.
///
/// `total_downloads` defaults to zero when no files exist; it is never null.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub struct OwnerStats {
    /// Count of files owned.
    pub files_count: i64,
    /// Sum of download counters across owned files.
    pub total_downloads: i64,
}
