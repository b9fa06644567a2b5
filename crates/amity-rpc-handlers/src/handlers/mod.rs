//! Domain-specific request handlers.
//!
//!   Friendship mutations → `friendship::FriendshipHandler`
//!   Profile reads        → `profile::ProfileHandler`

mod friendship;
mod profile;

pub use friendship::FriendshipHandler;
pub use profile::ProfileHandler;
