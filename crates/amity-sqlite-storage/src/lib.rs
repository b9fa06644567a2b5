//! SQLite-backed storage for the amity friendship graph.
//!
//! Implements [`amity_core::SocialGraphStore`] over a `sqlx` SQLite pool.
//!
//! # Schema
//!
//! ```text
//! users(id TEXT PRIMARY KEY, full_name TEXT NOT NULL, phone_number TEXT NOT NULL)
//! friendships(id INTEGER PRIMARY KEY,
//!             user_id TEXT NOT NULL REFERENCES users(id),
//!             friend_user_id TEXT NOT NULL REFERENCES users(id),
//!             status TEXT NOT NULL,
//!             UNIQUE (user_id, friend_user_id))
//! ```
//!
//! The UNIQUE pair constraint is load-bearing: sends and the accept
//! flow's reciprocal write are `INSERT ... ON CONFLICT DO UPDATE`
//! upserts keyed on it, so concurrent identical calls serialize at the
//! row level instead of racing a read-then-write.
//!
//! # Write pattern
//!
//! Single-row transitions (send, decline) run as one statement against
//! the pool. Accept runs both of its edge writes inside one transaction;
//! a failure after the first write rolls the whole thing back, so a
//! half-accepted pair is never observable.

#![forbid(unsafe_code)]

mod config;
pub mod queries;
mod store;

pub use config::StoreConfig;
pub use store::SqliteSocialGraph;
