use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

// null decodes like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of a `/v2/everything` answer.
///
/// Error answers (`status: "error"`) decode too: they carry `code` and
/// `message` and no results.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NewsApiResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,

    pub code: Option<String>,
    pub message: Option<String>,

    #[serde(rename = "totalResults", default, deserialize_with = "null_as_default")]
    pub total_results: i64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub articles: Vec<Article>,
}

impl NewsApiResponse {
    pub fn is_error(&self) -> bool {
        self.status == "error"
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Article {
    #[serde(default, deserialize_with = "null_as_default")]
    pub source: Source,
    pub author: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,

    #[serde(rename = "urlToImage")]
    pub url_to_image: Option<String>,

    #[serde(rename = "publishedAt")]
    pub published_at: Option<DateTime<Utc>>,

    pub content: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Source {
    pub id: Option<String>,
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_everything_response() {
        let body = serde_json::json!({
            "status": "ok",
            "totalResults": 2,
            "articles": [
                {
                    "source": { "id": null, "name": "Example Times" },
                    "author": "Jane Smith",
                    "title": "Rust 2024 released",
                    "description": "An edition",
                    "url": "https://example.com/a1",
                    "urlToImage": null,
                    "publishedAt": "2024-03-01T09:30:00Z",
                    "content": "..."
                },
                {
                    "source": { "id": "tech", "name": "Tech" },
                    "author": null,
                    "title": null,
                    "description": null,
                    "url": "https://example.com/a2",
                    "urlToImage": null,
                    "publishedAt": "2024-03-01T10:00:00Z",
                    "content": null
                }
            ]
        });

        let resp: NewsApiResponse = serde_json::from_value(body).unwrap();
        assert!(!resp.is_error());
        assert_eq!(resp.total_results, 2);
        assert_eq!(resp.articles[0].title.as_deref(), Some("Rust 2024 released"));
        assert_eq!(resp.articles[0].source.name.as_deref(), Some("Example Times"));
        assert!(resp.articles[0].published_at.is_some());
        assert_eq!(resp.articles[1].title, None);
    }

    #[test]
    fn null_source_and_articles_decode_as_empty() {
        let resp: NewsApiResponse = serde_json::from_str(
            r#"{"status":"ok","totalResults":null,"articles":null}"#,
        )
        .unwrap();
        assert_eq!(resp.total_results, 0);
        assert!(resp.articles.is_empty());

        let resp: NewsApiResponse = serde_json::from_str(
            r#"{"status":"ok","totalResults":1,"articles":[{"source":null,"title":"t","url":"u"}]}"#,
        )
        .unwrap();
        assert_eq!(resp.articles[0].source.name, None);
        assert_eq!(resp.articles[0].title.as_deref(), Some("t"));
    }

    #[test]
    fn decodes_error_response_with_no_results() {
        let resp: NewsApiResponse = serde_json::from_str(
            r#"{"status":"error","code":"apiKeyInvalid","message":"Your API key is invalid"}"#,
        )
        .unwrap();

        assert!(resp.is_error());
        assert_eq!(resp.code.as_deref(), Some("apiKeyInvalid"));
        assert_eq!(resp.total_results, 0);
        assert!(resp.articles.is_empty());
    }
}
