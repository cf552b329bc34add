//! Configuration for the replay runtime.
//!
//! Loads configuration from environment variables (and `.env`).

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::cache::CacheConfig;
use crate::data::{MAX_EVENT_BUFFER, UserId};
use crate::error::{Error, Result};

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Id of the account the session belongs to.
    pub self_user_id: UserId,

    /// File with newline-delimited JSON updates; stdin when unset.
    pub replay_input: Option<PathBuf>,

    /// Capacity of the change-event channel.
    pub event_buffer: usize,

    /// Username -> user id lookup cache.
    pub username_cache: CacheConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            self_user_id: UserId(0),
            replay_input: None,
            event_buffer: 256,
            username_cache: CacheConfig::username_index(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    /// Fails if `SELF_USER_ID` is missing or any variable does not parse.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let self_user_id = env::var("SELF_USER_ID")
            .map_err(|_| Error::MissingEnv("SELF_USER_ID"))
            .and_then(|value| parse_var("SELF_USER_ID", &value))
            .map(UserId)?;

        let replay_input = env::var("REPLAY_INPUT")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        let defaults = Self::default();
        let event_buffer = match env::var("EVENT_BUFFER") {
            Ok(value) if !value.trim().is_empty() => parse_event_buffer(&value)?,
            _ => defaults.event_buffer,
        };

        let mut username_cache = defaults.username_cache;
        if let Some(capacity) = optional_var("USERNAME_CACHE_CAPACITY")? {
            username_cache.max_capacity = capacity;
        }
        if let Ok(value) = env::var("USERNAME_CACHE_TTL_SECS")
            && !value.trim().is_empty()
        {
            username_cache = username_cache.ttl(parse_cache_ttl(&value)?);
        }

        Ok(Self {
            self_user_id,
            replay_input,
            event_buffer,
            username_cache,
        })
    }
}

fn parse_var<T: FromStr>(key: &'static str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| Error::InvalidEnv {
        key,
        value: value.to_string(),
    })
}

fn parse_event_buffer(value: &str) -> Result<usize> {
    let buffer: usize = parse_var("EVENT_BUFFER", value)?;
    if buffer == 0 || buffer > MAX_EVENT_BUFFER {
        return Err(Error::InvalidEnv {
            key: "EVENT_BUFFER",
            value: value.to_string(),
        });
    }
    Ok(buffer)
}

/// Longest username cache TTL accepted: one year.
const MAX_CACHE_TTL_SECS: u64 = 365 * 24 * 60 * 60;

fn parse_cache_ttl(value: &str) -> Result<Duration> {
    let secs: u64 = parse_var("USERNAME_CACHE_TTL_SECS", value)?;
    if secs > MAX_CACHE_TTL_SECS {
        return Err(Error::InvalidEnv {
            key: "USERNAME_CACHE_TTL_SECS",
            value: value.to_string(),
        });
    }
    Ok(Duration::from_secs(secs))
}

fn optional_var<T: FromStr>(key: &'static str) -> Result<Option<T>> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => parse_var(key, &value).map(Some),
        _ => Ok(None),
    }
}
