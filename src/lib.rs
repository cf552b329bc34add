//! Peerstate - per-session user model for a messaging client.
//!
//! Keeps one entity per user id, merges partial server updates into it
//! without losing information and broadcasts what changed.
//!
//! ## Architecture
//!
//! - `config` - Environment configuration
//! - `data` - User entities, value types and the session arena
//! - `merge` - Folding transport payloads into entities
//! - `transport` - Typed update payloads
//! - `cache` - LRU-based lookup caches with Moka
//! - `runtime` - Replays recorded updates into a session
//! - `error` - Crate error type

pub mod cache;
pub mod config;
pub mod data;
pub mod error;
pub mod merge;
pub mod runtime;
pub mod transport;
