//! Friendship request handler.
//!
//! Handles: SendFriendRequest, AcceptFriendRequest, DeclineFriendRequest.

use amity_core::AcceptResultResponse;
use amity_core::DeclineResultResponse;
use amity_core::ErrorClass;
use amity_core::FriendRpcRequest;
use amity_core::FriendRpcResponse;
use amity_core::SendResultResponse;
use amity_core::SocialGraphError;
use amity_core::UserId;
use tracing::debug;
use tracing::warn;

use crate::context::SocialProtocolContext;
use crate::error_sanitization::sanitize_graph_error;
use crate::guard;
use crate::handler::RequestHandler;

/// Handler for the friendship-edge state machine.
pub struct FriendshipHandler;

#[async_trait::async_trait]
impl RequestHandler for FriendshipHandler {
    fn can_handle(&self, request: &FriendRpcRequest) -> bool {
        matches!(
            request,
            FriendRpcRequest::SendFriendRequest { .. }
                | FriendRpcRequest::AcceptFriendRequest { .. }
                | FriendRpcRequest::DeclineFriendRequest { .. }
        )
    }

    async fn handle(
        &self,
        request: FriendRpcRequest,
        ctx: &SocialProtocolContext,
    ) -> anyhow::Result<FriendRpcResponse> {
        match request {
            FriendRpcRequest::SendFriendRequest { friend_user_id } => {
                Ok(handle_send(ctx, friend_user_id).await)
            }
            FriendRpcRequest::AcceptFriendRequest { friend_user_id } => {
                Ok(handle_accept(ctx, friend_user_id).await)
            }
            FriendRpcRequest::DeclineFriendRequest { friend_user_id } => {
                Ok(handle_decline(ctx, friend_user_id).await)
            }
            _ => Err(anyhow::anyhow!("request not handled by FriendshipHandler")),
        }
    }

    fn name(&self) -> &'static str {
        "FriendshipHandler"
    }
}

/// Log a rejected or failed operation; internal failures get the louder
/// level and the full error, clients only ever see the sanitized text.
fn report_failure(operation: &'static str, err: &SocialGraphError) -> String {
    match err.class() {
        ErrorClass::Internal => warn!(%err, operation, "friendship operation failed"),
        _ => debug!(%err, operation, "friendship operation rejected"),
    }
    sanitize_graph_error(err)
}

async fn handle_send(ctx: &SocialProtocolContext, friend_user_id: String) -> FriendRpcResponse {
    match send_friend_request(ctx, &friend_user_id).await {
        Ok(()) => FriendRpcResponse::SendResult(SendResultResponse {
            success: true,
            error: None,
        }),
        Err(err) => FriendRpcResponse::SendResult(SendResultResponse {
            success: false,
            error: Some(report_failure("send", &err)),
        }),
    }
}

async fn handle_accept(ctx: &SocialProtocolContext, friend_user_id: String) -> FriendRpcResponse {
    match accept_friend_request(ctx, &friend_user_id).await {
        Ok(()) => FriendRpcResponse::AcceptResult(AcceptResultResponse {
            success: true,
            error: None,
        }),
        Err(err) => FriendRpcResponse::AcceptResult(AcceptResultResponse {
            success: false,
            error: Some(report_failure("accept", &err)),
        }),
    }
}

async fn handle_decline(ctx: &SocialProtocolContext, friend_user_id: String) -> FriendRpcResponse {
    match decline_friend_request(ctx, &friend_user_id).await {
        Ok(()) => FriendRpcResponse::DeclineResult(DeclineResultResponse {
            success: true,
            error: None,
        }),
        Err(err) => FriendRpcResponse::DeclineResult(DeclineResultResponse {
            success: false,
            error: Some(report_failure("decline", &err)),
        }),
    }
}

/// Send (or re-send) a friend request from the caller to `raw_target`.
///
/// A prior declined edge for the pair is overwritten back to
/// `requested`; the store's pair constraint keeps the write race-free.
async fn send_friend_request(
    ctx: &SocialProtocolContext,
    raw_target: &str,
) -> Result<(), SocialGraphError> {
    let target = UserId::parse(raw_target)?;
    guard::ensure_not_self(&ctx.caller, &target)?;
    guard::ensure_target_user_exists(ctx.store.as_ref(), &target).await?;
    ctx.store.upsert_friend_request(&ctx.caller, &target).await
}

/// Accept the pending request sent by `raw_requester` to the caller.
async fn accept_friend_request(
    ctx: &SocialProtocolContext,
    raw_requester: &str,
) -> Result<(), SocialGraphError> {
    let requester = UserId::parse(raw_requester)?;
    guard::ensure_pending_request(ctx.store.as_ref(), &requester, &ctx.caller).await?;
    ctx.store.accept_friend_request(&ctx.caller, &requester).await
}

/// Decline the pending request sent by `raw_requester` to the caller.
async fn decline_friend_request(
    ctx: &SocialProtocolContext,
    raw_requester: &str,
) -> Result<(), SocialGraphError> {
    let requester = UserId::parse(raw_requester)?;
    guard::ensure_pending_request(ctx.store.as_ref(), &requester, &ctx.caller).await?;
    ctx.store.decline_friend_request(&ctx.caller, &requester).await
}
