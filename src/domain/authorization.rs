//! Upload authorization gate.
//!
//! A pure decision over the role flag. Verification state deliberately plays
//! no part: a `special` account may upload whether or not it is verified.
//! The persistence adapter evaluates this predicate inside the upload
//! transaction so the role check and the insert commit together.

use super::Role;

/// True iff the role is permitted to create files.
///
/// # Examples
/// ```
/// use filehub::domain::{authorization::can_upload, Role};
///
/// assert!(can_upload(Role::Special));
/// assert!(!can_upload(Role::Regular));
/// ```
pub fn can_upload(role: Role) -> bool {
    matches!(role, Role::Special)
}
