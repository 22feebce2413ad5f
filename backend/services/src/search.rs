//! Client for the external full-text search service.
//!
//! Index construction and query syntax live on the service side; this is
//! just the wire call.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use verseforge_core::ContentType;

/// One search match: an entity id plus the content type it belongs to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub id: String,
    pub content_type: ContentType,
    pub score: f32,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    hits: Vec<SearchHit>,
}

pub struct SearchClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl SearchClient {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key,
        }
    }

    pub async fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchHit>> {
        let body = serde_json::json!({ "query": query, "limit": limit });
        let mut request = self
            .client
            .post(format!("{}/search", self.base_url))
            .json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }
        let resp = request.send().await?;
        if !resp.status().is_success() {
            bail!("search service error: {}", resp.text().await.unwrap_or_default());
        }
        let parsed: SearchResponse = resp.json().await?;
        Ok(parsed.hits)
    }
}
