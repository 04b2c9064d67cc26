//! Domain core: resource model, authorization, and services.
//!
//! Everything in this module is transport agnostic. Inbound adapters call the
//! driving ports in [`ports`]; outbound adapters implement the driven ports.

pub mod accounts;
pub mod authorization;
mod error;
mod file;
pub mod files;
mod password;
pub mod ports;
mod profile;
pub mod profiles;
mod user;

pub use accounts::{AccountService, PrivilegedCode};
pub use error::{Error, ErrorCode};
pub use file::{FileId, FileListing, FileRecord, OwnerStats, StorageKey, UploaderSummary};
pub use files::FileRegistryService;
pub use password::PasswordDigest;
pub use profile::{ProfileRecord, ProfileUpdate, ProfileView};
pub use profiles::ProfileService;
pub use user::{Account, Email, Role, UserId, UserValidationError};
