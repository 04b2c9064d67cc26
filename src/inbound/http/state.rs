//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{Accounts, FileRegistry, Profiles};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub accounts: Arc<dyn Accounts>,
    pub files: Arc<dyn FileRegistry>,
    pub profiles: Arc<dyn Profiles>,
}

impl HttpState {
    /// Construct state from the three driving ports.
    pub fn new(
        accounts: Arc<dyn Accounts>,
        files: Arc<dyn FileRegistry>,
        profiles: Arc<dyn Profiles>,
    ) -> Self {
        Self {
            accounts,
            files,
            profiles,
        }
    }
}
