use thiserror::Error;

/// Anything that aborts a run.
///
/// Non-200 answers from the news API or the webhook are not errors; they
/// are logged and the run carries on.
#[derive(Error, Debug)]
pub enum PickupError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to decode {context}: {source}")]
    Decode {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("object store error: {0}")]
    ObjectStore(String),
}

pub type Result<T> = std::result::Result<T, PickupError>;
