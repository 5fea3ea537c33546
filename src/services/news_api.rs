use async_trait::async_trait;
use reqwest::Client;

use crate::{
    error::{PickupError, Result},
    models::{DateRange, NewsApiResponse},
};

/// Title search over a news index.
#[async_trait]
pub trait NewsSearch: Send + Sync {
    async fn search_in_title(&self, keyword: &str, range: &DateRange) -> Result<NewsApiResponse>;
}

#[derive(Clone)]
pub struct NewsApiClient {
    http: Client,
    url: String,
    api_key: String,
}

impl NewsApiClient {
    pub fn new(url: String, api_key: String) -> Self {
        Self {
            http: Client::new(),
            url,
            api_key,
        }
    }

    fn has_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

#[async_trait]
impl NewsSearch for NewsApiClient {
    async fn search_in_title(&self, keyword: &str, range: &DateRange) -> Result<NewsApiResponse> {
        if !self.has_key() {
            return Err(PickupError::Config(
                "PICKUPNEWS_APIKEY is missing".to_string(),
            ));
        }

        let res = self
            .http
            .get(&self.url)
            .query(&[
                ("qInTitle", keyword),
                ("from", range.from.as_str()),
                ("to", range.to.as_str()),
                ("apiKey", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = res.status();
        if status != reqwest::StatusCode::OK {
            tracing::warn!(%status, keyword, "news api answered with non-200 status");
        }

        // decode regardless of status; an unusable body fails here
        let body = res.text().await?;
        let resp: NewsApiResponse = serde_json::from_str(&body).map_err(|source| {
            PickupError::Decode {
                context: "news api response",
                source,
            }
        })?;

        if resp.is_error() {
            tracing::warn!(
                code = resp.code.as_deref().unwrap_or_default(),
                message = resp.message.as_deref().unwrap_or_default(),
                "news api reported an error"
            );
        }

        Ok(resp)
    }
}
