//! Password digest derivation.
//!
//! The digest is a plain SHA-256 of the password, hex encoded. It is
//! reproducible without a stored salt so `authenticate` can look accounts up
//! by `(email, digest)` in one query. This preserves compatibility with
//! already-stored credentials; a migration to a salted, adaptive hash would
//! go through this type as its single choke point.

use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// One-way digest of a user password.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PasswordDigest(String);

impl PasswordDigest {
    /// Derive the digest for a raw password.
    ///
    /// # Examples
    /// ```
    /// use filehub::domain::PasswordDigest;
    ///
    /// let digest = PasswordDigest::derive("hunter2");
    /// assert_eq!(digest, PasswordDigest::derive("hunter2"));
    /// assert_ne!(digest, PasswordDigest::derive("hunter3"));
    /// ```
    pub fn derive(password: &str) -> Self {
        let digest = Sha256::digest(password.as_bytes());
        Self(hex::encode(digest))
    }

    /// Reconstruct a digest from its stored hex form.
    pub fn from_stored(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the hex form for storage and lookup.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for PasswordDigest {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for PasswordDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
