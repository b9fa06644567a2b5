//! Request handlers for the amity friendship graph.
//!
//! This crate turns authenticated, decoded [`FriendRpcRequest`]s into
//! [`FriendRpcResponse`]s. The surrounding framework owns transport,
//! session issuance, and request decoding; by the time a request reaches
//! [`HandlerRegistry::dispatch`] the caller is authenticated and the
//! input is shape-correct.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │              HandlerRegistry                 │
//! │   (first handler whose can_handle matches)   │
//! └──────────────────────────────────────────────┘
//!          │                       │
//!          ▼                       ▼
//! ┌──────────────────┐   ┌──────────────────┐
//! │ FriendshipHandler│   │  ProfileHandler  │
//! │ send/accept/     │   │  profile + counts│
//! │ decline          │   │                  │
//! └──────────────────┘   └──────────────────┘
//!          │                       │
//!          └──────────┬────────────┘
//!                     ▼
//!          Arc<dyn SocialGraphStore>
//! ```
//!
//! Handlers hold no state; everything comes from
//! [`SocialProtocolContext`]. Precondition guards run before any
//! mutation, and every error leaving a handler is sanitized first.
//!
//! [`FriendRpcRequest`]: amity_core::FriendRpcRequest
//! [`FriendRpcResponse`]: amity_core::FriendRpcResponse

#![forbid(unsafe_code)]

mod context;
mod error_sanitization;
pub mod guard;
mod handler;
mod handlers;
mod registry;

pub use context::SocialProtocolContext;
pub use error_sanitization::sanitize_graph_error;
pub use handler::RequestHandler;
pub use handlers::FriendshipHandler;
pub use handlers::ProfileHandler;
pub use registry::HandlerRegistry;
