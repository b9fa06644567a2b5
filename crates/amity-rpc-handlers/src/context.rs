//! Per-call context for friendship handlers.

use std::sync::Arc;

use amity_core::SocialGraphStore;
use amity_core::UserId;

/// Context for one authenticated call, with all handler dependencies.
#[derive(Clone)]
pub struct SocialProtocolContext {
    /// The authenticated caller. The session layer owns authentication;
    /// handlers trust this identity.
    pub caller: UserId,
    /// Friendship graph store.
    pub store: Arc<dyn SocialGraphStore>,
}

impl SocialProtocolContext {
    /// Build a context for `caller` over `store`.
    pub fn new(caller: UserId, store: Arc<dyn SocialGraphStore>) -> Self {
        SocialProtocolContext { caller, store }
    }
}

impl std::fmt::Debug for SocialProtocolContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SocialProtocolContext")
            .field("caller", &self.caller)
            .finish_non_exhaustive()
    }
}
