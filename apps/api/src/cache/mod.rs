//! Cache Layer — two content-addressed entry spaces (resume records, match
//! results) behind one two-operation store contract.
//!
//! Expiry is lazy: an entry is checked and evicted only by the read that
//! finds it stale. There is no background sweep, so an expired entry that is
//! never read again occupies storage until overwritten — acceptable for the
//! default in-process store, and moot for Redis, whose native TTL reclaims
//! it while preserving the same observable semantics.

pub mod memory;
pub mod redis;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::identity::{match_cache_key, resume_cache_key};
use crate::models::matching::MatchResult;
use crate::models::resume::ResumeRecord;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Cache backend error: {0}")]
    Backend(String),

    #[error("Cache serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// The pluggable store contract. Payloads cross the boundary as
/// `serde_json::Value` so any backend can persist them as self-describing
/// JSON and hand them back symmetrically.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Stores a payload, overwriting any existing entry for the key and
    /// resetting its creation time.
    async fn put(&self, key: &str, payload: Value, ttl: Duration) -> Result<(), CacheError>;

    /// Returns the live payload for a key, or `None` when the key is absent
    /// or its entry has expired (expired entries are evicted on this read).
    async fn get(&self, key: &str) -> Result<Option<Value>, CacheError>;
}

/// Typed facade over the store: resume records and match results live in
/// disjoint key prefixes with independent TTLs. The handle exclusively owns
/// entry lifetime — callers never mutate a stored payload in place, updates
/// are whole-entry replacements.
#[derive(Clone)]
pub struct CacheHandle {
    store: Arc<dyn CacheStore>,
    resume_ttl: Duration,
    match_ttl: Duration,
}

impl CacheHandle {
    pub fn new(store: Arc<dyn CacheStore>, resume_ttl: Duration, match_ttl: Duration) -> Self {
        Self {
            store,
            resume_ttl,
            match_ttl,
        }
    }

    pub async fn put_resume(&self, record: &ResumeRecord) -> Result<(), CacheError> {
        let key = resume_cache_key(&record.resume_id);
        self.store
            .put(&key, serde_json::to_value(record)?, self.resume_ttl)
            .await
    }

    pub async fn get_resume(&self, resume_id: &str) -> Result<Option<ResumeRecord>, CacheError> {
        match self.store.get(&resume_cache_key(resume_id)).await? {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    pub async fn put_match(
        &self,
        resume_id: &str,
        job_description: &str,
        result: &MatchResult,
    ) -> Result<(), CacheError> {
        let key = match_cache_key(resume_id, job_description);
        self.store
            .put(&key, serde_json::to_value(result)?, self.match_ttl)
            .await
    }

    pub async fn get_match(
        &self,
        resume_id: &str,
        job_description: &str,
    ) -> Result<Option<MatchResult>, CacheError> {
        let key = match_cache_key(resume_id, job_description);
        match self.store.get(&key).await? {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }
}
