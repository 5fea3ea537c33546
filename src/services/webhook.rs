use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

use crate::error::{PickupError, Result};

/// Delivers a finished message somewhere people will read it.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, text: &str) -> Result<()>;
}

/// Slack-style incoming webhook: POST `{"text": ...}`.
#[derive(Clone)]
pub struct WebhookNotifier {
    http: Client,
    url: String,
}

impl WebhookNotifier {
    pub fn new(url: String) -> Self {
        Self {
            http: Client::new(),
            url,
        }
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    async fn notify(&self, text: &str) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(PickupError::Config(
                "PICKUPNEWS_WEBHOOKURL is missing".to_string(),
            ));
        }

        let res = self
            .http
            .post(&self.url)
            .json(&json!({ "text": text }))
            .send()
            .await?;

        let status = res.status();
        if status != reqwest::StatusCode::OK {
            let body = res.text().await.unwrap_or_default();
            tracing::warn!(%status, body = %body, "webhook post was not accepted");
            return Ok(());
        }

        tracing::info!("notification posted");
        Ok(())
    }
}
