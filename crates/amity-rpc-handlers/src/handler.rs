//! Request handler trait for domain-specific friendship handlers.

use amity_core::FriendRpcRequest;
use amity_core::FriendRpcResponse;
use anyhow::Result;
use async_trait::async_trait;

use crate::context::SocialProtocolContext;

/// Trait for domain-specific request handlers.
///
/// Each handler is responsible for a subset of [`FriendRpcRequest`]
/// variants. Handlers must not hold state across requests; all state
/// comes from [`SocialProtocolContext`].
#[async_trait]
pub trait RequestHandler: Send + Sync {
    /// Returns true if this handler can process the given request.
    ///
    /// Must be fast and perform no I/O; the registry uses it to pick a
    /// handler.
    fn can_handle(&self, request: &FriendRpcRequest) -> bool;

    /// Process the request and return a response.
    ///
    /// Client-correctable failures are reported in-band on the response
    /// with sanitized text. An `Err` from this method means the request
    /// could not be processed at all.
    async fn handle(
        &self,
        request: FriendRpcRequest,
        ctx: &SocialProtocolContext,
    ) -> Result<FriendRpcResponse>;

    /// Handler name for logging.
    fn name(&self) -> &'static str;
}
