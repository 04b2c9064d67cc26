//! Canned port implementations for handler tests.
//!
//! Handlers only translate between HTTP and the driving ports, so their tests
//! run against fixed port outcomes rather than live services.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::ports::{
    Accounts, Credentials, CreateFileRequest, FileRegistry, Profiles, RegisterRequest,
    UploadRequest,
};
use crate::domain::{
    Account, Email, Error, FileId, FileListing, FileRecord, OwnerStats, ProfileRecord,
    ProfileUpdate, ProfileView, Role, UploaderSummary, UserId,
};

use super::state::HttpState;

pub(crate) fn sample_account(role: Role) -> Account {
    Account {
        user_id: UserId::new(1),
        email: Email::new("ada@example.org").expect("valid email"),
        role,
        is_verified: role == Role::Special,
    }
}

pub(crate) fn sample_record() -> FileRecord {
    FileRecord {
        file_id: FileId::new(7),
        owner_id: UserId::new(1),
        filename: "notes.txt".into(),
        file_url: "https://store.example/abc_notes.txt".into(),
        byte_size: 12,
        mime_type: "text/plain".into(),
        downloads_count: 0,
        created_at: Utc::now(),
    }
}

pub(crate) fn sample_listing() -> FileListing {
    let account = sample_account(Role::Special);
    FileListing {
        file: sample_record(),
        uploader: UploaderSummary {
            user_id: account.user_id,
            email: account.email,
            role: account.role,
            is_verified: account.is_verified,
        },
    }
}

pub(crate) fn sample_view() -> ProfileView {
    ProfileView {
        profile: ProfileRecord {
            account: sample_account(Role::Special),
            display_name: Some("Ada".into()),
            bio: None,
            avatar_url: None,
            created_at: Utc::now(),
        },
        stats: OwnerStats {
            files_count: 1,
            total_downloads: 3,
        },
    }
}

/// Accounts port answering with fixed outcomes.
pub(crate) struct CannedAccounts {
    pub register: Result<Account, Error>,
    pub authenticate: Result<Account, Error>,
}

impl Default for CannedAccounts {
    fn default() -> Self {
        Self {
            register: Ok(sample_account(Role::Regular)),
            authenticate: Ok(sample_account(Role::Regular)),
        }
    }
}

#[async_trait]
impl Accounts for CannedAccounts {
    async fn register(&self, _request: RegisterRequest) -> Result<Account, Error> {
        self.register.clone()
    }

    async fn authenticate(&self, _credentials: Credentials) -> Result<Account, Error> {
        self.authenticate.clone()
    }
}

/// File registry port answering with fixed outcomes.
pub(crate) struct CannedRegistry {
    pub list: Result<Vec<FileListing>, Error>,
    pub create: Result<FileRecord, Error>,
    pub upload: Result<FileRecord, Error>,
    pub download: Result<String, Error>,
}

impl Default for CannedRegistry {
    fn default() -> Self {
        Self {
            list: Ok(vec![sample_listing()]),
            create: Ok(sample_record()),
            upload: Ok(sample_record()),
            download: Ok("https://store.example/abc_notes.txt".into()),
        }
    }
}

#[async_trait]
impl FileRegistry for CannedRegistry {
    async fn list(&self) -> Result<Vec<FileListing>, Error> {
        self.list.clone()
    }

    async fn create(&self, _request: CreateFileRequest) -> Result<FileRecord, Error> {
        self.create.clone()
    }

    async fn upload(&self, _request: UploadRequest) -> Result<FileRecord, Error> {
        self.upload.clone()
    }

    async fn record_download(&self, _id: FileId) -> Result<String, Error> {
        self.download.clone()
    }
}

/// Profiles port answering with fixed outcomes.
pub(crate) struct CannedProfiles {
    pub profile: Result<ProfileView, Error>,
    pub update: Result<(), Error>,
}

impl Default for CannedProfiles {
    fn default() -> Self {
        Self {
            profile: Ok(sample_view()),
            update: Ok(()),
        }
    }
}

#[async_trait]
impl Profiles for CannedProfiles {
    async fn profile(&self, _id: UserId) -> Result<ProfileView, Error> {
        self.profile.clone()
    }

    async fn update_profile(&self, _id: UserId, _update: ProfileUpdate) -> Result<(), Error> {
        self.update.clone()
    }
}

/// State bundle with an overridden accounts port.
pub(crate) fn state_with_accounts(accounts: CannedAccounts) -> HttpState {
    HttpState::new(
        Arc::new(accounts),
        Arc::new(CannedRegistry::default()),
        Arc::new(CannedProfiles::default()),
    )
}

/// State bundle with an overridden registry port.
pub(crate) fn state_with_registry(registry: CannedRegistry) -> HttpState {
    HttpState::new(
        Arc::new(CannedAccounts::default()),
        Arc::new(registry),
        Arc::new(CannedProfiles::default()),
    )
}

/// State bundle with an overridden profiles port.
pub(crate) fn state_with_profiles(profiles: CannedProfiles) -> HttpState {
    HttpState::new(
        Arc::new(CannedAccounts::default()),
        Arc::new(CannedRegistry::default()),
        Arc::new(profiles),
    )
}
