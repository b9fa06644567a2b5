//! Storage contract for the friendship graph.
//!
//! Handlers depend on this trait through `Arc<dyn SocialGraphStore>`;
//! backends own all persisted state and all isolation guarantees. No
//! in-process state is held between calls.

use async_trait::async_trait;

use crate::error::SocialGraphError;
use crate::types::FriendProfile;
use crate::types::FriendshipStatus;
use crate::types::UserId;

/// Relational operations the friendship core needs from its store.
///
/// # Contract
///
/// - At most one edge exists per ordered `(user, friend)` pair; writes
///   for an existing pair overwrite the status in place.
/// - [`accept_friend_request`](Self::accept_friend_request) is atomic:
///   either both directed edges end up `accepted` or nothing changes.
/// - Every method completes or fails within the store's own timeout
///   policy; no call blocks indefinitely.
#[async_trait]
pub trait SocialGraphStore: Send + Sync {
    /// Whether a user row exists for `user_id`.
    async fn user_exists(&self, user_id: &UserId) -> Result<bool, SocialGraphError>;

    /// Current status of the directed edge `(user_id, friend_user_id)`,
    /// or `None` when no edge exists.
    async fn edge_status(
        &self,
        user_id: &UserId,
        friend_user_id: &UserId,
    ) -> Result<Option<FriendshipStatus>, SocialGraphError>;

    /// Whether a `requested` edge `(requester, recipient)` exists.
    async fn has_pending_request(
        &self,
        requester: &UserId,
        recipient: &UserId,
    ) -> Result<bool, SocialGraphError>;

    /// Create or overwrite the edge `(caller, target)` with status
    /// `requested`. A prior declined (or any other) edge for the pair is
    /// reused, not rejected as a duplicate.
    async fn upsert_friend_request(
        &self,
        caller: &UserId,
        target: &UserId,
    ) -> Result<(), SocialGraphError>;

    /// Accept the pending request from `requester` to `recipient`.
    ///
    /// In one transaction: the `(requester, recipient)` edge moves from
    /// `requested` to `accepted`, and the reciprocal
    /// `(recipient, requester)` edge is created or overwritten as
    /// `accepted`. Fails with
    /// [`SocialGraphError::NoPendingRequest`] when no `requested` edge
    /// matches, leaving the store unchanged.
    async fn accept_friend_request(
        &self,
        recipient: &UserId,
        requester: &UserId,
    ) -> Result<(), SocialGraphError>;

    /// Decline the pending request from `requester` to `recipient`,
    /// updating only that edge. Any reciprocal edge is untouched.
    async fn decline_friend_request(
        &self,
        recipient: &UserId,
        requester: &UserId,
    ) -> Result<(), SocialGraphError>;

    /// Fetch `friend`'s profile with total and mutual friend counts in a
    /// single round trip, or `None` when no such user row exists.
    ///
    /// The mutual count is relative to `caller`; both counts are `0`
    /// rather than absent when the aggregations match nothing. Callers
    /// are responsible for the accepted-friendship precondition.
    async fn friend_profile(
        &self,
        caller: &UserId,
        friend: &UserId,
    ) -> Result<Option<FriendProfile>, SocialGraphError>;
}
