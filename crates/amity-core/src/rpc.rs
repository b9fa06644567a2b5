//! Request and response types for the friendship RPC surface.
//!
//! The surrounding framework authenticates the caller and decodes the
//! request before dispatch; every request here names only the *other*
//! user involved. Failures a client can correct are reported in-band on
//! the response (`success: false` / `error: Some(..)`) with sanitized
//! text; transport concerns live outside this workspace.

use serde::Deserialize;
use serde::Serialize;

use crate::types::FriendProfile;

/// Friendship operations a client can invoke.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum FriendRpcRequest {
    /// Ask `friend_user_id` to become a friend. Overwrites any prior
    /// declined request for the pair.
    #[serde(rename_all = "camelCase")]
    SendFriendRequest { friend_user_id: String },
    /// Accept the pending request sent by `friend_user_id`.
    #[serde(rename_all = "camelCase")]
    AcceptFriendRequest { friend_user_id: String },
    /// Decline the pending request sent by `friend_user_id`.
    #[serde(rename_all = "camelCase")]
    DeclineFriendRequest { friend_user_id: String },
    /// Fetch the profile of accepted friend `friend_user_id`, including
    /// total and mutual friend counts.
    #[serde(rename_all = "camelCase")]
    GetFriendProfile { friend_user_id: String },
}

impl FriendRpcRequest {
    /// The other user named by this request.
    pub fn friend_user_id(&self) -> &str {
        match self {
            FriendRpcRequest::SendFriendRequest { friend_user_id }
            | FriendRpcRequest::AcceptFriendRequest { friend_user_id }
            | FriendRpcRequest::DeclineFriendRequest { friend_user_id }
            | FriendRpcRequest::GetFriendProfile { friend_user_id } => friend_user_id,
        }
    }
}

/// Responses to [`FriendRpcRequest`] variants.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum FriendRpcResponse {
    /// Result of a send operation.
    SendResult(SendResultResponse),
    /// Result of an accept operation.
    AcceptResult(AcceptResultResponse),
    /// Result of a decline operation.
    DeclineResult(DeclineResultResponse),
    /// Result of a profile fetch.
    FriendProfileResult(FriendProfileResponse),
}

/// Acknowledgement for a send operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SendResultResponse {
    /// Whether the request edge was written.
    pub success: bool,
    /// Sanitized failure description, if any.
    pub error: Option<String>,
}

/// Acknowledgement for an accept operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AcceptResultResponse {
    /// Whether both edges are now accepted.
    pub success: bool,
    /// Sanitized failure description, if any.
    pub error: Option<String>,
}

/// Acknowledgement for a decline operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeclineResultResponse {
    /// Whether the pending request was declined.
    pub success: bool,
    /// Sanitized failure description, if any.
    pub error: Option<String>,
}

/// A profile fetch result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FriendProfileResponse {
    /// The friend's profile, when the caller is an accepted friend.
    pub profile: Option<FriendProfile>,
    /// Sanitized failure description, if any.
    pub error: Option<String>,
}
