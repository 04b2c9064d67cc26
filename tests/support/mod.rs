//! In-memory port implementations backing the HTTP integration tests.
//!
//! One `MemoryDb` implements both persistence ports so the tests exercise the
//! real services end to end without a database. The semantics mirror the
//! relational adapters: unique emails, the owner-role gate inside the insert,
//! and a lossless download counter.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use filehub::domain::ports::{
    ContentStore, ContentStoreError, FileStore, FileStoreError, NewAccount, NewFile, UserStore,
    UserStoreError,
};
use filehub::domain::{
    Account, Email, FileId, FileListing, FileRecord, OwnerStats, PasswordDigest, ProfileRecord,
    ProfileUpdate, Role, StorageKey, UploaderSummary, UserId,
};

struct StoredUser {
    id: i64,
    email: Email,
    digest: PasswordDigest,
    role: Role,
    is_verified: bool,
    display_name: Option<String>,
    bio: Option<String>,
    avatar_url: Option<String>,
    created_at: DateTime<Utc>,
}

struct StoredFile {
    id: i64,
    owner_id: i64,
    filename: String,
    file_url: String,
    byte_size: i64,
    mime_type: String,
    downloads_count: i64,
    created_at: DateTime<Utc>,
}

#[derive(Default)]
struct DbState {
    users: Vec<StoredUser>,
    files: Vec<StoredFile>,
}

/// In-memory stand-in for the relational store.
#[derive(Default)]
pub struct MemoryDb {
    state: Mutex<DbState>,
}

impl MemoryDb {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn lock(&self) -> MutexGuard<'_, DbState> {
        self.state.lock().expect("db state lock")
    }
}

fn account_of(user: &StoredUser) -> Account {
    Account {
        user_id: UserId::new(user.id),
        email: user.email.clone(),
        role: user.role,
        is_verified: user.is_verified,
    }
}

fn record_of(file: &StoredFile) -> FileRecord {
    FileRecord {
        file_id: FileId::new(file.id),
        owner_id: UserId::new(file.owner_id),
        filename: file.filename.clone(),
        file_url: file.file_url.clone(),
        byte_size: file.byte_size,
        mime_type: file.mime_type.clone(),
        downloads_count: file.downloads_count,
        created_at: file.created_at,
    }
}

#[async_trait]
impl UserStore for MemoryDb {
    async fn insert_account(&self, account: &NewAccount) -> Result<Account, UserStoreError> {
        let mut state = self.lock();
        if state.users.iter().any(|u| u.email == account.email) {
            return Err(UserStoreError::DuplicateEmail);
        }
        let id = state.users.len() as i64 + 1;
        state.users.push(StoredUser {
            id,
            email: account.email.clone(),
            digest: account.password_digest.clone(),
            role: account.role,
            is_verified: account.is_verified,
            display_name: None,
            bio: None,
            avatar_url: None,
            created_at: Utc::now(),
        });
        Ok(account_of(state.users.last().expect("just pushed")))
    }

    async fn find_by_credentials(
        &self,
        email: &Email,
        digest: &PasswordDigest,
    ) -> Result<Option<Account>, UserStoreError> {
        let state = self.lock();
        Ok(state
            .users
            .iter()
            .find(|u| &u.email == email && &u.digest == digest)
            .map(account_of))
    }

    async fn find_profile(&self, id: UserId) -> Result<Option<ProfileRecord>, UserStoreError> {
        let state = self.lock();
        Ok(state.users.iter().find(|u| u.id == id.as_i64()).map(|u| {
            ProfileRecord {
                account: account_of(u),
                display_name: u.display_name.clone(),
                bio: u.bio.clone(),
                avatar_url: u.avatar_url.clone(),
                created_at: u.created_at,
            }
        }))
    }

    async fn update_profile(
        &self,
        id: UserId,
        update: &ProfileUpdate,
    ) -> Result<bool, UserStoreError> {
        let mut state = self.lock();
        let Some(user) = state.users.iter_mut().find(|u| u.id == id.as_i64()) else {
            return Ok(false);
        };
        user.display_name = update.display_name.clone();
        user.bio = update.bio.clone();
        user.avatar_url = update.avatar_url.clone();
        Ok(true)
    }
}

#[async_trait]
impl FileStore for MemoryDb {
    async fn insert_owned(&self, file: &NewFile) -> Result<FileRecord, FileStoreError> {
        let mut state = self.lock();
        let owner = state
            .users
            .iter()
            .find(|u| u.id == file.owner_id.as_i64())
            .ok_or(FileStoreError::OwnerNotFound)?;
        if owner.role != Role::Special {
            return Err(FileStoreError::OwnerNotPermitted);
        }
        let id = state.files.len() as i64 + 1;
        state.files.push(StoredFile {
            id,
            owner_id: file.owner_id.as_i64(),
            filename: file.filename.clone(),
            file_url: file.file_url.clone(),
            byte_size: file.byte_size,
            mime_type: file.mime_type.clone(),
            downloads_count: 0,
            created_at: Utc::now(),
        });
        Ok(record_of(state.files.last().expect("just pushed")))
    }

    async fn list_with_uploaders(&self) -> Result<Vec<FileListing>, FileStoreError> {
        let state = self.lock();
        state
            .files
            .iter()
            .rev()
            .map(|f| {
                let owner = state
                    .users
                    .iter()
                    .find(|u| u.id == f.owner_id)
                    .ok_or(FileStoreError::OwnerNotFound)?;
                Ok(FileListing {
                    file: record_of(f),
                    uploader: UploaderSummary {
                        user_id: UserId::new(owner.id),
                        email: owner.email.clone(),
                        role: owner.role,
                        is_verified: owner.is_verified,
                    },
                })
            })
            .collect()
    }

    async fn record_download(&self, id: FileId) -> Result<Option<String>, FileStoreError> {
        let mut state = self.lock();
        Ok(state
            .files
            .iter_mut()
            .find(|f| f.id == id.as_i64())
            .map(|f| {
                f.downloads_count += 1;
                f.file_url.clone()
            }))
    }

    async fn stats_for(&self, owner: UserId) -> Result<OwnerStats, FileStoreError> {
        let state = self.lock();
        let owned = state
            .files
            .iter()
            .filter(|f| f.owner_id == owner.as_i64());
        let mut stats = OwnerStats::default();
        for file in owned {
            stats.files_count += 1;
            stats.total_downloads += file.downloads_count;
        }
        Ok(stats)
    }
}

/// In-memory stand-in for the object-storage host.
#[derive(Default)]
pub struct MemoryContentStore {
    stored: Mutex<Vec<(String, usize)>>,
}

impl MemoryContentStore {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Keys and byte sizes of everything stored so far.
    pub fn stored(&self) -> Vec<(String, usize)> {
        self.stored.lock().expect("content store lock").clone()
    }
}

#[async_trait]
impl ContentStore for MemoryContentStore {
    async fn store(
        &self,
        key: &StorageKey,
        bytes: &[u8],
        _mime_type: &str,
    ) -> Result<String, ContentStoreError> {
        self.stored
            .lock()
            .expect("content store lock")
            .push((key.as_str().to_owned(), bytes.len()));
        Ok(format!("https://store.example/{key}"))
    }
}
