//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the migrations exactly; Diesel uses them for
//! compile-time query validation. Regenerate with `diesel print-schema` when
//! migrations change.

diesel::table! {
    /// Registered user accounts.
    ///
    /// `email` carries a unique constraint; `role` and `is_verified` are
    /// fixed at registration.
    users (id) {
        /// Primary key, assigned by the store.
        id -> Int8,
        /// Unique, case-sensitive email address.
        email -> Text,
        /// SHA-256 hex digest of the password.
        password_digest -> Text,
        /// `regular` or `special`.
        role -> Text,
        /// True exactly when the account registered as special.
        is_verified -> Bool,
        /// Optional profile display name.
        display_name -> Nullable<Text>,
        /// Optional profile biography.
        bio -> Nullable<Text>,
        /// Optional avatar reference.
        avatar_url -> Nullable<Text>,
        /// Record creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// File metadata; bytes live with the external content store.
    files (id) {
        /// Primary key, assigned by the store.
        id -> Int8,
        /// Owning user, `special` at creation time.
        owner_id -> Int8,
        /// Filename exactly as supplied by the uploader.
        filename -> Text,
        /// Storage location reference.
        file_url -> Text,
        /// Decoded content length in bytes.
        byte_size -> Int8,
        /// MIME type string as supplied.
        mime_type -> Text,
        /// Monotonically non-decreasing download counter.
        downloads_count -> Int4,
        /// Record creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::joinable!(files -> users (owner_id));
diesel::allow_tables_to_appear_in_same_query!(files, users);
