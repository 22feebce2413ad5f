//! In-process response cache with TTL expiry.
//!
//! Caches rendered responses keyed by request string
//! (`bookmarks:{user}:{variant}`), so a repeat request can be served without
//! touching the entity store. The resolution core never sees this cache.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use tracing::debug;

struct CacheEntry {
    payload: String,
    expires_at: Instant,
}

pub struct ResponseCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
    ttl: Duration,
}

impl ResponseCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    /// Conventional key for a user's bookmark listing.
    pub fn bookmarks_key(user_id: &str, detailed: bool) -> String {
        let variant = if detailed { "detailed" } else { "full" };
        format!("bookmarks:{user_id}:{variant}")
    }

    pub fn get(&self, key: &str) -> Option<String> {
        let mut entries = self.entries.lock().unwrap();
        match entries.get(key) {
            Some(entry) if entry.expires_at > Instant::now() => {
                debug!(key, "cache hit");
                Some(entry.payload.clone())
            }
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    pub fn put(&self, key: &str, payload: String) {
        let mut entries = self.entries.lock().unwrap();
        entries.insert(
            key.to_string(),
            CacheEntry {
                payload,
                expires_at: Instant::now() + self.ttl,
            },
        );
    }

    /// Drop every cached rendering for a user (called after a bookmark
    /// write, so stale listings are not served).
    pub fn invalidate_user(&self, user_id: &str) {
        let prefix = format!("bookmarks:{user_id}:");
        let mut entries = self.entries.lock().unwrap();
        entries.retain(|key, _| !key.starts_with(&prefix));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_then_get() {
        let cache = ResponseCache::new(Duration::from_secs(60));
        cache.put("k", "payload".into());
        assert_eq!(cache.get("k").as_deref(), Some("payload"));
    }

    #[test]
    fn test_zero_ttl_expires_immediately() {
        let cache = ResponseCache::new(Duration::ZERO);
        cache.put("k", "payload".into());
        assert_eq!(cache.get("k"), None);
    }

    #[test]
    fn test_invalidate_user_drops_both_variants() {
        let cache = ResponseCache::new(Duration::from_secs(60));
        cache.put(&ResponseCache::bookmarks_key("u1", false), "full".into());
        cache.put(&ResponseCache::bookmarks_key("u1", true), "detailed".into());
        cache.put(&ResponseCache::bookmarks_key("u2", false), "other".into());

        cache.invalidate_user("u1");
        assert!(cache.get(&ResponseCache::bookmarks_key("u1", false)).is_none());
        assert!(cache.get(&ResponseCache::bookmarks_key("u1", true)).is_none());
        assert!(cache.get(&ResponseCache::bookmarks_key("u2", false)).is_some());
    }
}
