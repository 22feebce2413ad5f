//! Transactional email client.

use anyhow::{bail, Result};
use tracing::warn;

pub struct Mailer {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    from: String,
}

impl Mailer {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        from: impl Into<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
            from: from.into(),
        }
    }

    pub async fn send(&self, to: &str, subject: &str, body: &str) -> Result<()> {
        let payload = serde_json::json!({
            "from": self.from,
            "to": to,
            "subject": subject,
            "text": body,
        });
        let resp = self
            .client
            .post(format!("{}/messages", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;
        if !resp.status().is_success() {
            bail!("mail service error: {}", resp.text().await.unwrap_or_default());
        }
        Ok(())
    }

    /// Fire-and-forget variant: a lost notification is not worth failing the
    /// request that triggered it.
    pub async fn send_quietly(&self, to: &str, subject: &str, body: &str) {
        if let Err(e) = self.send(to, subject, body).await {
            warn!(to, subject, "failed to send notification: {e:#}");
        }
    }
}
