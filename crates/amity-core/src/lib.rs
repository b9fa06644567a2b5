//! Core types and contracts for the amity friendship graph.
//!
//! This crate defines everything the rest of the workspace agrees on:
//!
//! - Domain types: [`UserId`], [`FriendshipStatus`], [`FriendshipEdge`],
//!   [`FriendProfile`]
//! - The RPC surface: [`FriendRpcRequest`] and [`FriendRpcResponse`]
//! - The error taxonomy: [`SocialGraphError`] and [`ErrorClass`]
//! - The storage contract: [`SocialGraphStore`]
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────┐
//! │   amity-rpc-handlers    │  dispatch, guards, sanitization
//! └─────────────────────────┘
//!          │ FriendRpcRequest / FriendRpcResponse
//!          ▼
//! ┌─────────────────────────┐
//! │       amity-core        │  types, errors, SocialGraphStore trait
//! └─────────────────────────┘
//!          ▲ implements
//!          │
//! ┌─────────────────────────┐
//! │  amity-sqlite-storage   │  SQLite edge table + aggregation queries
//! └─────────────────────────┘
//! ```
//!
//! The crate performs no I/O; storage backends implement
//! [`SocialGraphStore`] and handlers consume it through `Arc<dyn ...>`.

#![forbid(unsafe_code)]

pub mod constants;
pub mod error;
pub mod rpc;
pub mod store;
pub mod types;

pub use constants::MAX_USER_ID_BYTES;
pub use constants::validate_user_id;
pub use error::ErrorClass;
pub use error::SocialGraphError;
pub use rpc::AcceptResultResponse;
pub use rpc::DeclineResultResponse;
pub use rpc::FriendProfileResponse;
pub use rpc::FriendRpcRequest;
pub use rpc::FriendRpcResponse;
pub use rpc::SendResultResponse;
pub use store::SocialGraphStore;
pub use types::FriendProfile;
pub use types::FriendshipEdge;
pub use types::FriendshipStatus;
pub use types::UserId;
