//! Error message sanitization.
//!
//! Storage failures can carry file paths, SQL text, and driver details.
//! Every error string leaving a handler goes through this mapping; the
//! full error is logged internally at the call site.

use amity_core::SocialGraphError;

/// Reduce an error to a client-safe message.
///
/// Precondition failures keep their user-actionable shape; internal
/// failures collapse to a generic message.
pub fn sanitize_graph_error(err: &SocialGraphError) -> String {
    match err {
        SocialGraphError::UnknownUser { .. } => "unknown user".to_string(),
        SocialGraphError::NoPendingRequest { .. } => "no pending friend request".to_string(),
        SocialGraphError::NotFriends { .. } => "friend not found".to_string(),
        // Validation reasons are generated locally and safe to echo.
        SocialGraphError::InvalidUserId { reason } => format!("invalid user id: {}", reason),
        SocialGraphError::Storage { .. } => "storage error".to_string(),
    }
}
