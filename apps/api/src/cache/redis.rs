//! Redis cache backend.
//!
//! Uses Redis' native `SET ... EX` TTL, which reclaims stale entries server
//! side. From the caller's perspective the observable contract is identical
//! to the in-process store: a `get` after the TTL elapses returns `None` and
//! the entry is gone.

use std::time::Duration;

use async_trait::async_trait;
use redis::AsyncCommands;
use serde_json::Value;

use crate::cache::{CacheError, CacheStore};

pub struct RedisStore {
    client: redis::Client,
}

impl RedisStore {
    pub fn connect(url: &str) -> Result<Self, CacheError> {
        let client = redis::Client::open(url).map_err(backend)?;
        Ok(Self { client })
    }
}

#[async_trait]
impl CacheStore for RedisStore {
    async fn put(&self, key: &str, payload: Value, ttl: Duration) -> Result<(), CacheError> {
        let body = serde_json::to_string(&payload)?;
        let mut con = self
            .client
            .get_multiplexed_async_connection()
            .await
            .map_err(backend)?;
        // EX takes whole seconds; never pass 0, which Redis rejects.
        let () = con
            .set_ex(key, body, ttl.as_secs().max(1))
            .await
            .map_err(backend)?;
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<Value>, CacheError> {
        let mut con = self
            .client
            .get_multiplexed_async_connection()
            .await
            .map_err(backend)?;
        let body: Option<String> = con.get(key).await.map_err(backend)?;
        match body {
            Some(s) => Ok(Some(serde_json::from_str(&s)?)),
            None => Ok(None),
        }
    }
}

fn backend(e: redis::RedisError) -> CacheError {
    CacheError::Backend(e.to_string())
}
