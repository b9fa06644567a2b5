//! Error types for friendship graph operations.
//!
//! Two kinds of failure surface to callers: client-correctable
//! precondition failures (unknown target, no pending request, no accepted
//! friendship, malformed input) and internal storage failures. The
//! [`ErrorClass`] of an error drives how handlers report it.

use thiserror::Error;

/// Coarse classification of a [`SocialGraphError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// The caller supplied something the system cannot act on.
    BadRequest,
    /// The requested resource does not exist for this caller.
    NotFound,
    /// Storage or transaction failure; nothing partial was persisted.
    Internal,
}

/// Errors that can occur during friendship graph operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SocialGraphError {
    /// The target user does not exist.
    #[error("unknown user: {user_id}")]
    UnknownUser {
        /// Identifier that matched no user row.
        user_id: String,
    },

    /// No pending friend request exists for the given pair.
    #[error("no pending friend request from {requester} to {recipient}")]
    NoPendingRequest {
        /// The user who would have sent the request.
        requester: String,
        /// The user who would have received it.
        recipient: String,
    },

    /// The caller has no accepted friendship with the given user.
    #[error("no accepted friendship between {caller} and {friend}")]
    NotFriends {
        /// The authenticated caller.
        caller: String,
        /// The user whose profile was requested.
        friend: String,
    },

    /// An externally supplied identifier failed validation.
    #[error("invalid user id: {reason}")]
    InvalidUserId {
        /// Why the identifier was rejected.
        reason: String,
    },

    /// The storage layer failed; any open transaction was rolled back.
    #[error("storage failure: {reason}")]
    Storage {
        /// Description of the underlying failure.
        reason: String,
    },
}

impl SocialGraphError {
    /// The coarse class of this error, used for reporting decisions.
    pub fn class(&self) -> ErrorClass {
        match self {
            SocialGraphError::UnknownUser { .. }
            | SocialGraphError::NoPendingRequest { .. }
            | SocialGraphError::InvalidUserId { .. } => ErrorClass::BadRequest,
            SocialGraphError::NotFriends { .. } => ErrorClass::NotFound,
            SocialGraphError::Storage { .. } => ErrorClass::Internal,
        }
    }
}
