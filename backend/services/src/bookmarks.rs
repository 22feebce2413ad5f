//! Request-level bookmark service: cache in front of the resolution pipeline.
//!
//! A cache hit short-circuits before any bookmark or entity fetch happens.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use verseforge_core::BookmarkStore;
use verseforge_resolver::Resolver;

use crate::cache::ResponseCache;

pub struct BookmarkService {
    bookmark_store: Arc<dyn BookmarkStore>,
    resolver: Resolver,
    cache: ResponseCache,
}

impl BookmarkService {
    pub fn new(
        bookmark_store: Arc<dyn BookmarkStore>,
        resolver: Resolver,
        cache: ResponseCache,
    ) -> Self {
        Self {
            bookmark_store,
            resolver,
            cache,
        }
    }

    /// A user's bookmarks as a rendered JSON payload, served from cache when
    /// fresh.
    pub async fn formatted_for_user(&self, user_id: &str, detailed: bool) -> Result<String> {
        let key = ResponseCache::bookmarks_key(user_id, detailed);
        if let Some(cached) = self.cache.get(&key) {
            return Ok(cached);
        }

        let bookmarks = self
            .bookmark_store
            .bookmarks_for_user(user_id)
            .await
            .context("failed to load bookmarks")?;
        info!(user_id, count = bookmarks.len(), detailed, "resolving bookmarks");

        let payload = if detailed {
            let resolved = self.resolver.resolve_detailed(&bookmarks).await?;
            serde_json::to_string_pretty(&resolved)?
        } else {
            let resolved = self.resolver.resolve(&bookmarks).await?;
            serde_json::to_string_pretty(&resolved)?
        };
        self.cache.put(&key, payload.clone());
        Ok(payload)
    }

    /// Invalidate cached renderings after a bookmark write.
    pub fn invalidate_user(&self, user_id: &str) {
        self.cache.invalidate_user(user_id);
    }
}
