//! Internal Diesel row structs for database operations.
//!
//! Implementation details of the persistence layer; never exposed to the
//! domain. They exist solely to satisfy Diesel's type requirements for
//! queries and mutations.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use super::schema::{files, users};

/// Row struct for reading account fields from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i64,
    pub email: String,
    pub role: String,
    pub is_verified: bool,
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Insertable struct for creating new user records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub email: &'a str,
    pub password_digest: &'a str,
    pub role: &'a str,
    pub is_verified: bool,
}

/// Changeset overwriting the profile fields as a whole.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = users)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct ProfileFieldsUpdate<'a> {
    pub display_name: Option<&'a str>,
    pub bio: Option<&'a str>,
    pub avatar_url: Option<&'a str>,
}

/// Row struct for reading from the files table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = files)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct FileRow {
    pub id: i64,
    pub owner_id: i64,
    pub filename: String,
    pub file_url: String,
    pub byte_size: i64,
    pub mime_type: String,
    pub downloads_count: i32,
    pub created_at: DateTime<Utc>,
}

/// Minimal uploader identity joined into listings.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UploaderRow {
    pub id: i64,
    pub email: String,
    pub role: String,
    pub is_verified: bool,
}

/// Insertable struct for creating new file records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = files)]
pub(crate) struct NewFileRow<'a> {
    pub owner_id: i64,
    pub filename: &'a str,
    pub file_url: &'a str,
    pub byte_size: i64,
    pub mime_type: &'a str,
}
