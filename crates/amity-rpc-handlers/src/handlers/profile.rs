//! Friend profile handler.
//!
//! Handles: GetFriendProfile.

use amity_core::ErrorClass;
use amity_core::FriendProfile;
use amity_core::FriendProfileResponse;
use amity_core::FriendRpcRequest;
use amity_core::FriendRpcResponse;
use amity_core::SocialGraphError;
use amity_core::UserId;
use tracing::debug;
use tracing::warn;

use crate::context::SocialProtocolContext;
use crate::error_sanitization::sanitize_graph_error;
use crate::guard;
use crate::handler::RequestHandler;

/// Handler for profile reads over confirmed friendships.
pub struct ProfileHandler;

#[async_trait::async_trait]
impl RequestHandler for ProfileHandler {
    fn can_handle(&self, request: &FriendRpcRequest) -> bool {
        matches!(request, FriendRpcRequest::GetFriendProfile { .. })
    }

    async fn handle(
        &self,
        request: FriendRpcRequest,
        ctx: &SocialProtocolContext,
    ) -> anyhow::Result<FriendRpcResponse> {
        match request {
            FriendRpcRequest::GetFriendProfile { friend_user_id } => {
                Ok(handle_get_profile(ctx, friend_user_id).await)
            }
            _ => Err(anyhow::anyhow!("request not handled by ProfileHandler")),
        }
    }

    fn name(&self) -> &'static str {
        "ProfileHandler"
    }
}

async fn handle_get_profile(ctx: &SocialProtocolContext, friend_user_id: String) -> FriendRpcResponse {
    match fetch_friend_profile(ctx, &friend_user_id).await {
        Ok(profile) => FriendRpcResponse::FriendProfileResult(FriendProfileResponse {
            profile: Some(profile),
            error: None,
        }),
        Err(err) => {
            match err.class() {
                ErrorClass::Internal => warn!(%err, "profile fetch failed"),
                _ => debug!(%err, "profile fetch rejected"),
            }
            FriendRpcResponse::FriendProfileResult(FriendProfileResponse {
                profile: None,
                error: Some(sanitize_graph_error(&err)),
            })
        }
    }
}

/// Fetch the profile of an accepted friend, with derived counts.
///
/// The accepted-edge guard runs first, so a `requested` or `declined`
/// edge reads as not-found regardless of the profile row's existence.
/// The result is schema-checked before it leaves the handler.
async fn fetch_friend_profile(
    ctx: &SocialProtocolContext,
    raw_friend: &str,
) -> Result<FriendProfile, SocialGraphError> {
    let friend = UserId::parse(raw_friend)?;
    guard::ensure_accepted_friend(ctx.store.as_ref(), &ctx.caller, &friend).await?;

    let profile = ctx
        .store
        .friend_profile(&ctx.caller, &friend)
        .await?
        .ok_or_else(|| SocialGraphError::UnknownUser {
            user_id: friend.to_string(),
        })?;
    profile.validate()?;
    Ok(profile)
}
