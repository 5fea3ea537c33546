use crate::models::{DateRange, NewsApiResponse, NotificationMessage, PickupKey};

pub fn build_message(
    key: &PickupKey,
    range: &DateRange,
    resp: &NewsApiResponse,
) -> NotificationMessage {
    let header = format!(
        "<!channel> Keyword: {} resultCount: {} from: {} to: {}\n",
        key.keyword, resp.total_results, range.from, range.to
    );

    let mut body = String::new();
    for (i, article) in resp.articles.iter().enumerate() {
        body.push_str(&format!(
            "No.{}, {}, {}\n",
            i + 1,
            article.title.as_deref().unwrap_or_default(),
            article.url.as_deref().unwrap_or_default()
        ));
    }

    NotificationMessage { header, body }
}

pub fn below_limit_message(total_results: i64, notice_lower_limit: i64) -> String {
    format!(
        "TotalResult is lower NoticeLowerLimit. TotalResult:{}, NoticeLowerLimit:{}\n",
        total_results, notice_lower_limit
    )
}
