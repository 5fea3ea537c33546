use std::env;

use chrono::{FixedOffset, Offset, Utc};

const DEFAULT_NEWS_API_URL: &str = "http://newsapi.org/v2/everything";
const DEFAULT_UTC_OFFSET_HOURS: i32 = 9;

#[derive(Debug, Clone)]
pub struct Settings {
    pub news_api_key: String,
    pub news_api_url: String,
    pub webhook_url: String,

    // reports are dated in this offset (JST by default)
    pub utc_offset_hours: i32,

    pub s3_region: String,
    pub s3_endpoint: Option<String>,
    pub aws_profile: Option<String>,

    pub host: String,
    pub port: u16,
}

impl Settings {
    /// Offset used to decide what "today" means for a run.
    ///
    /// An out-of-range configured value falls back to UTC+9.
    pub fn report_offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_hours * 3600)
            .or_else(|| {
                tracing::warn!(
                    "invalid utc offset {}h, falling back to +{}h",
                    self.utc_offset_hours,
                    DEFAULT_UTC_OFFSET_HOURS
                );
                FixedOffset::east_opt(DEFAULT_UTC_OFFSET_HOURS * 3600)
            })
            .unwrap_or_else(|| Utc.fix())
    }
}

fn optional(name: &str) -> Option<String> {
    env::var(name).ok().filter(|s| !s.trim().is_empty())
}

pub fn load() -> Settings {
    // Loads .env if present (no crash if missing)
    dotenvy::dotenv().ok();

    let news_api_key = env::var("PICKUPNEWS_APIKEY").unwrap_or_default();
    if news_api_key.trim().is_empty() {
        tracing::warn!("PICKUPNEWS_APIKEY is not set");
    }

    let webhook_url = env::var("PICKUPNEWS_WEBHOOKURL").unwrap_or_default();
    if webhook_url.trim().is_empty() {
        tracing::warn!("PICKUPNEWS_WEBHOOKURL is not set");
    }

    let news_api_url = env::var("PICKUPNEWS_NEWSAPI_URL")
        .unwrap_or_else(|_| DEFAULT_NEWS_API_URL.to_string());

    let utc_offset_hours = env::var("PICKUPNEWS_UTC_OFFSET_HOURS")
        .ok()
        .and_then(|s| s.trim().parse::<i32>().ok())
        .unwrap_or(DEFAULT_UTC_OFFSET_HOURS);

    let s3_region = env::var("PICKUPNEWS_S3_REGION")
        .unwrap_or_else(|_| "ap-northeast-1".to_string());

    let host = env::var("HOST")
        .unwrap_or_else(|_| "127.0.0.1".to_string());

    let port = env::var("PORT")
        .ok()
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    Settings {
        news_api_key,
        news_api_url,
        webhook_url,
        utc_offset_hours,
        s3_region,
        s3_endpoint: optional("PICKUPNEWS_S3_ENDPOINT"),
        aws_profile: optional("PICKUPNEWS_AWS_PROFILE"),
        host,
        port,
    }
}
