//! Profile view and update models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{Account, OwnerStats};

/// Mutable profile fields owned by the profile aggregator.
///
/// Updates are whole-record overwrites: an omitted field clears the stored
/// value rather than preserving it. There is no partial merge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProfileUpdate {
    /// Display name shown to other users.
    pub display_name: Option<String>,
    /// Free-form biography text.
    pub bio: Option<String>,
    /// Avatar image reference.
    pub avatar_url: Option<String>,
}

/// User record plus profile fields as read from the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProfileRecord {
    #[serde(flatten)]
    pub account: Account,
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Derived composition of a user and aggregates over their files.
///
/// Never persisted; recomputed on every read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProfileView {
    #[serde(flatten)]
    pub profile: ProfileRecord,
    pub stats: OwnerStats,
}
