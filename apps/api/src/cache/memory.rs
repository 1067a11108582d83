//! In-process cache backend: a `HashMap` of timestamped entries behind an
//! async mutex.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Mutex;

use crate::cache::{CacheError, CacheStore};

struct StoredEntry {
    payload: Value,
    created_at: Instant,
    ttl: Duration,
}

impl StoredEntry {
    fn is_expired(&self) -> bool {
        self.created_at.elapsed() > self.ttl
    }
}

/// Default cache backend. Lazy expiry only: entries are evicted by the read
/// that observes them stale, never by a sweeper.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, StoredEntry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }
}

#[async_trait]
impl CacheStore for MemoryStore {
    async fn put(&self, key: &str, payload: Value, ttl: Duration) -> Result<(), CacheError> {
        let entry = StoredEntry {
            payload,
            created_at: Instant::now(),
            ttl,
        };
        self.entries.lock().await.insert(key.to_string(), entry);
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<Value>, CacheError> {
        let mut entries = self.entries.lock().await;
        match entries.get(key) {
            Some(entry) if entry.is_expired() => {
                entries.remove(key);
                Ok(None)
            }
            Some(entry) => Ok(Some(entry.payload.clone())),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const LONG_TTL: Duration = Duration::from_secs(60);

    #[tokio::test]
    async fn test_put_get_round_trip() {
        let store = MemoryStore::new();
        let payload = json!({"resume_id": "abc", "nested": {"years": 5.0}, "tags": ["rust"]});
        store.put("k", payload.clone(), LONG_TTL).await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), Some(payload));
    }

    #[tokio::test]
    async fn test_get_absent_key() {
        let store = MemoryStore::new();
        assert_eq!(store.get("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_put_overwrites_existing_entry() {
        let store = MemoryStore::new();
        store.put("k", json!(1), LONG_TTL).await.unwrap();
        store.put("k", json!(2), LONG_TTL).await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), Some(json!(2)));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_expired_entry_is_evicted_not_hidden() {
        let store = MemoryStore::new();
        store
            .put("k", json!("v"), Duration::from_millis(30))
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(60)).await;

        assert_eq!(store.get("k").await.unwrap(), None);
        // The read deleted the entry; a second read still misses and the
        // store no longer holds it.
        assert_eq!(store.get("k").await.unwrap(), None);
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn test_entry_live_within_ttl() {
        let store = MemoryStore::new();
        store
            .put("k", json!("v"), Duration::from_secs(5))
            .await
            .unwrap();
        assert_eq!(store.get("k").await.unwrap(), Some(json!("v")));
    }

    #[tokio::test]
    async fn test_overwrite_resets_creation_time() {
        let store = MemoryStore::new();
        store
            .put("k", json!("old"), Duration::from_millis(40))
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(25)).await;
        // Rewrite just before expiry; the fresh TTL starts now.
        store
            .put("k", json!("new"), Duration::from_millis(40))
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(25)).await;

        assert_eq!(store.get("k").await.unwrap(), Some(json!("new")));
    }

    #[tokio::test]
    async fn test_unread_expired_entry_stays_until_read() {
        let store = MemoryStore::new();
        store
            .put("k", json!("v"), Duration::from_millis(10))
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(30)).await;

        // No sweeper: the stale entry still occupies the map until a read
        // or overwrite touches it.
        assert_eq!(store.len().await, 1);
        assert_eq!(store.get("k").await.unwrap(), None);
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn test_concurrent_puts_last_write_wins() {
        let store = std::sync::Arc::new(MemoryStore::new());
        let mut tasks = Vec::new();
        for i in 0..16 {
            let store = store.clone();
            tasks.push(tokio::spawn(async move {
                store.put("k", json!(i), LONG_TTL).await.unwrap();
            }));
        }
        for t in tasks {
            t.await.unwrap();
        }

        // The surviving value is whichever write landed last, but it must be
        // exactly one of the written values.
        let value = store.get("k").await.unwrap().unwrap();
        let n = value.as_i64().unwrap();
        assert!((0..16).contains(&n));
    }
}
