#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use pickupnews::{
    config::Settings,
    error::{PickupError, Result},
    models::{Article, DateRange, NewsApiResponse},
    services::{news_api::NewsSearch, object_store::ObjectStore, webhook::Notifier},
    AppState,
};

pub fn test_settings() -> Settings {
    Settings {
        news_api_key: "test-key".to_string(),
        news_api_url: "http://127.0.0.1:9/v2/everything".to_string(),
        webhook_url: "http://127.0.0.1:9/hook".to_string(),
        utc_offset_hours: 9,
        s3_region: "ap-northeast-1".to_string(),
        s3_endpoint: None,
        aws_profile: None,
        host: "127.0.0.1".to_string(),
        port: 0,
    }
}

pub fn response(total_results: i64, articles: &[(&str, &str)]) -> NewsApiResponse {
    NewsApiResponse {
        status: "ok".to_string(),
        total_results,
        articles: articles
            .iter()
            .map(|(title, url)| Article {
                title: Some(title.to_string()),
                url: Some(url.to_string()),
                ..Default::default()
            })
            .collect(),
        ..Default::default()
    }
}

/// Canned answers per keyword; records every query it sees.
#[derive(Default)]
pub struct FakeNews {
    pub answers: HashMap<String, NewsApiResponse>,
    pub queries: Mutex<Vec<(String, DateRange)>>,
}

impl FakeNews {
    pub fn with(answers: Vec<(&str, NewsApiResponse)>) -> Self {
        Self {
            answers: answers
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn queried_keywords(&self) -> Vec<String> {
        self.queries
            .lock()
            .unwrap()
            .iter()
            .map(|(k, _)| k.clone())
            .collect()
    }
}

#[async_trait]
impl NewsSearch for FakeNews {
    async fn search_in_title(&self, keyword: &str, range: &DateRange) -> Result<NewsApiResponse> {
        self.queries
            .lock()
            .unwrap()
            .push((keyword.to_string(), range.clone()));

        Ok(self.answers.get(keyword).cloned().unwrap_or_default())
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub sent: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, text: &str) -> Result<()> {
        self.sent.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

/// Serves fixed blobs keyed by "bucket/key".
#[derive(Default)]
pub struct MemoryStore {
    pub objects: HashMap<String, Vec<u8>>,
}

impl MemoryStore {
    pub fn with(bucket: &str, key: &str, body: &str) -> Self {
        let mut objects = HashMap::new();
        objects.insert(format!("{bucket}/{key}"), body.as_bytes().to_vec());
        Self { objects }
    }
}

#[async_trait]
impl ObjectStore for MemoryStore {
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>> {
        self.objects
            .get(&format!("{bucket}/{key}"))
            .cloned()
            .ok_or_else(|| PickupError::ObjectStore(format!("NoSuchKey: {bucket}/{key}")))
    }
}

pub fn test_state(
    news: Arc<dyn NewsSearch>,
    notifier: Arc<dyn Notifier>,
    object_store: Arc<dyn ObjectStore>,
) -> AppState {
    AppState {
        settings: test_settings(),
        news,
        notifier,
        object_store,
    }
}
