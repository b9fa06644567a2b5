//! Precondition guards.
//!
//! Guards run ahead of the main operation and reject a call before any
//! mutation happens. Each guard returns a typed result the handler
//! checks; errors are never used for ordinary control flow beyond this
//! boundary.

use amity_core::FriendshipStatus;
use amity_core::SocialGraphError;
use amity_core::SocialGraphStore;
use amity_core::UserId;

/// Reject a friendship operation aimed at the caller themself.
pub fn ensure_not_self(caller: &UserId, target: &UserId) -> Result<(), SocialGraphError> {
    if caller == target {
        return Err(SocialGraphError::InvalidUserId {
            reason: "cannot befriend yourself".to_string(),
        });
    }
    Ok(())
}

/// Require that the target user exists before writing any edge.
pub async fn ensure_target_user_exists(
    store: &dyn SocialGraphStore,
    target: &UserId,
) -> Result<(), SocialGraphError> {
    if store.user_exists(target).await? {
        return Ok(());
    }
    Err(SocialGraphError::UnknownUser {
        user_id: target.to_string(),
    })
}

/// Require a pending request from `requester` to `recipient` before an
/// accept or decline runs.
pub async fn ensure_pending_request(
    store: &dyn SocialGraphStore,
    requester: &UserId,
    recipient: &UserId,
) -> Result<(), SocialGraphError> {
    if store.has_pending_request(requester, recipient).await? {
        return Ok(());
    }
    Err(SocialGraphError::NoPendingRequest {
        requester: requester.to_string(),
        recipient: recipient.to_string(),
    })
}

/// Require an accepted friendship edge `(caller, friend)` before a
/// profile read. A `requested` or `declined` edge does not qualify.
pub async fn ensure_accepted_friend(
    store: &dyn SocialGraphStore,
    caller: &UserId,
    friend: &UserId,
) -> Result<(), SocialGraphError> {
    match store.edge_status(caller, friend).await? {
        Some(FriendshipStatus::Accepted) => Ok(()),
        _ => Err(SocialGraphError::NotFriends {
            caller: caller.to_string(),
            friend: friend.to_string(),
        }),
    }
}
