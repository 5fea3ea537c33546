//! Library entrypoint for pickupnews.
//!
//! The binary is a thin shell around this; integration tests under `tests/`
//! build an `AppState` with their own seams and drive runs or the router.

use std::sync::Arc;

pub mod config;
pub mod error;
pub mod models;

pub mod services;

pub mod controllers;
pub mod routes;

use services::{
    news_api::{NewsApiClient, NewsSearch},
    object_store::{ObjectStore, S3ObjectStore},
    webhook::{Notifier, WebhookNotifier},
};

#[derive(Clone)]
pub struct AppState {
    pub settings: config::Settings,
    pub news: Arc<dyn NewsSearch>,
    pub notifier: Arc<dyn Notifier>,
    pub object_store: Arc<dyn ObjectStore>,
}

impl AppState {
    /// Wire the real HTTP/S3 backends from settings.
    pub fn from_settings(settings: config::Settings) -> error::Result<Self> {
        let news = NewsApiClient::new(settings.news_api_url.clone(), settings.news_api_key.clone());
        let notifier = WebhookNotifier::new(settings.webhook_url.clone());
        let object_store = S3ObjectStore::from_settings(&settings)?;

        Ok(Self {
            settings,
            news: Arc::new(news),
            notifier: Arc::new(notifier),
            object_store: Arc::new(object_store),
        })
    }
}
