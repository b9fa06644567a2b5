//! Bounds and input validation for the friendship graph.
//!
//! All externally supplied identifiers are validated eagerly, before any
//! store call, so a rejected request never reaches storage.

use crate::error::SocialGraphError;

/// Maximum size of a user identifier in bytes.
pub const MAX_USER_ID_BYTES: usize = 128;

/// Maximum size of a profile full name in bytes.
pub const MAX_FULL_NAME_BYTES: usize = 256;

/// Maximum size of a profile phone number in bytes.
pub const MAX_PHONE_NUMBER_BYTES: usize = 32;

/// Upper bound on storage pool connections.
pub const MAX_POOL_CONNECTIONS: u32 = 64;

/// Validate an externally supplied user identifier.
///
/// Rejects empty ids, ids over [`MAX_USER_ID_BYTES`], and ids containing
/// NUL bytes (which SQLite text bindings would silently truncate around).
pub fn validate_user_id(user_id: &str) -> Result<(), SocialGraphError> {
    if user_id.is_empty() {
        return Err(SocialGraphError::InvalidUserId {
            reason: "user id cannot be empty".to_string(),
        });
    }
    if user_id.len() > MAX_USER_ID_BYTES {
        return Err(SocialGraphError::InvalidUserId {
            reason: format!("user id exceeds maximum of {} bytes", MAX_USER_ID_BYTES),
        });
    }
    if user_id.contains('\0') {
        return Err(SocialGraphError::InvalidUserId {
            reason: "user id cannot contain NUL bytes".to_string(),
        });
    }
    Ok(())
}
