//! Domain types for the friendship graph.
//!
//! A friendship is modeled as a pair of directed edges between two users.
//! A pending or declined request is a single directed edge; an accepted
//! friendship is a symmetric pair of `accepted` edges.

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::constants::MAX_FULL_NAME_BYTES;
use crate::constants::MAX_PHONE_NUMBER_BYTES;
use crate::constants::validate_user_id;
use crate::error::SocialGraphError;

/// An opaque, validated user identifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Parse and validate an externally supplied identifier.
    pub fn parse(raw: impl Into<String>) -> Result<Self, SocialGraphError> {
        let raw = raw.into();
        validate_user_id(&raw)?;
        Ok(UserId(raw))
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Status of one directed friendship edge.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FriendshipStatus {
    /// The sender has asked; the recipient has not answered.
    Requested,
    /// Confirmed friendship; the reciprocal edge must also be `accepted`.
    Accepted,
    /// The recipient turned the request down.
    Declined,
}

impl FriendshipStatus {
    /// Stable storage representation of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            FriendshipStatus::Requested => "requested",
            FriendshipStatus::Accepted => "accepted",
            FriendshipStatus::Declined => "declined",
        }
    }

    /// Parse the storage representation back into a status.
    pub fn parse(raw: &str) -> Result<Self, SocialGraphError> {
        match raw {
            "requested" => Ok(FriendshipStatus::Requested),
            "accepted" => Ok(FriendshipStatus::Accepted),
            "declined" => Ok(FriendshipStatus::Declined),
            other => Err(SocialGraphError::Storage {
                reason: format!("unknown friendship status '{}'", other),
            }),
        }
    }
}

impl fmt::Display for FriendshipStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One directed friendship record.
///
/// At most one edge exists per ordered `(user_id, friend_user_id)` pair;
/// state transitions overwrite the status in place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FriendshipEdge {
    /// Row identity in the store.
    pub id: i64,
    /// The owning side of the edge.
    pub user_id: UserId,
    /// The other side of the edge.
    pub friend_user_id: UserId,
    /// Current status of the edge.
    pub status: FriendshipStatus,
}

/// A friend's profile augmented with derived counts.
///
/// `total_friend_count` is the friend's own accepted-friend count, not the
/// caller's. `mutual_friend_count` is the number of users accepted-friends
/// with both the caller and the friend; it is `0` when there are none,
/// never absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FriendProfile {
    /// The friend's identifier.
    pub id: UserId,
    /// The friend's full name.
    pub full_name: String,
    /// The friend's phone number.
    pub phone_number: String,
    /// How many accepted friends the friend has.
    pub total_friend_count: i64,
    /// How many accepted friends the caller and the friend share.
    pub mutual_friend_count: i64,
}

impl FriendProfile {
    /// Enforce the result schema before the profile leaves a handler.
    ///
    /// All fields are required: names and phone numbers must be non-empty
    /// and within bounds, and counts non-negative.
    pub fn validate(&self) -> Result<(), SocialGraphError> {
        if self.full_name.is_empty() || self.full_name.len() > MAX_FULL_NAME_BYTES {
            return Err(SocialGraphError::Storage {
                reason: format!("profile for {} has an empty or oversized full name", self.id),
            });
        }
        if self.phone_number.is_empty() || self.phone_number.len() > MAX_PHONE_NUMBER_BYTES {
            return Err(SocialGraphError::Storage {
                reason: format!("profile for {} has an empty or oversized phone number", self.id),
            });
        }
        if self.total_friend_count < 0 || self.mutual_friend_count < 0 {
            return Err(SocialGraphError::Storage {
                reason: format!("profile for {} has a negative friend count", self.id),
            });
        }
        Ok(())
    }
}
