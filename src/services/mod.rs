pub mod news_api;
pub mod webhook;
pub mod object_store;

pub mod request_resolver;
pub mod formatter;
pub mod pickup_service;
