//! Handler registry for dispatching friendship RPC requests.
//!
//! The handler set here is closed and static, so registration is a
//! fixed list rather than a plugin mechanism. Dispatch is
//! first-`can_handle`-wins over a small, ordered list.

use std::sync::Arc;

use amity_core::FriendRpcRequest;
use amity_core::FriendRpcResponse;
use tracing::debug;

use crate::context::SocialProtocolContext;
use crate::handler::RequestHandler;
use crate::handlers::FriendshipHandler;
use crate::handlers::ProfileHandler;

/// Registry of request handlers.
///
/// Dispatches requests to the appropriate handler based on request
/// type. Handlers are tried in order; the first handler that
/// `can_handle` the request processes it.
pub struct HandlerRegistry {
    handlers: Vec<Arc<dyn RequestHandler>>,
}

impl HandlerRegistry {
    /// Create a registry with both domain handlers registered.
    pub fn new() -> Self {
        let handlers: Vec<Arc<dyn RequestHandler>> =
            vec![Arc::new(FriendshipHandler), Arc::new(ProfileHandler)];
        debug!(count = handlers.len(), "handler registry initialized");
        HandlerRegistry { handlers }
    }

    /// Names of the registered handlers, in dispatch order.
    pub fn handler_names(&self) -> Vec<&'static str> {
        self.handlers.iter().map(|h| h.name()).collect()
    }

    /// Dispatch a request to the first matching handler.
    pub async fn dispatch(
        &self,
        request: FriendRpcRequest,
        ctx: &SocialProtocolContext,
    ) -> anyhow::Result<FriendRpcResponse> {
        for handler in &self.handlers {
            if handler.can_handle(&request) {
                debug!(handler = handler.name(), caller = %ctx.caller, "dispatching request");
                return handler.handle(request, ctx).await;
            }
        }
        anyhow::bail!("no handler registered for request")
    }
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        HandlerRegistry::new()
    }
}
