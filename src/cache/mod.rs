//! Lookup caches built on Moka.
//!
//! Caches here only accelerate lookups; the session's entity arena stays
//! the source of truth and every cache hit is re-checked against it.
//!
//! ```rust,ignore
//! let by_username: TypedCache<String, UserId> =
//!     TypedCache::new("users_by_username", &CacheConfig::username_index());
//! by_username.insert("durov".into(), user_id);
//! ```

mod config;
mod typed;

pub use config::CacheConfig;
pub use typed::TypedCache;
