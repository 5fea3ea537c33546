use chrono::{DateTime, Utc};

use crate::{
    error::Result,
    models::{DateRange, PickupKey, RequestParameter},
    services::{formatter, request_resolver},
    AppState,
};

pub const SUCCESS_MESSAGE: &str = "Success notification.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeywordOutcome {
    Notified,
    BelowLimit {
        total_results: i64,
        notice_lower_limit: i64,
    },
}

/// One full run with "now" taken from the system clock.
pub async fn run(state: &AppState, params: &RequestParameter) -> Result<String> {
    run_at(state, params, Utc::now()).await
}

/// Query every keyword in order and notify the ones above their limit.
///
/// Any fatal error stops the run where it happens; keywords already
/// notified stay notified. When nothing was sent, the result describes the
/// first keyword that stayed at or below its limit.
pub async fn run_at(
    state: &AppState,
    params: &RequestParameter,
    now: DateTime<Utc>,
) -> Result<String> {
    let range = request_resolver::resolve_date_range(params, now, state.settings.report_offset());
    let keys = request_resolver::load_pickup_keys(state.object_store.as_ref(), params).await?;

    tracing::info!(
        from = %range.from,
        to = %range.to,
        keywords = keys.len(),
        "starting pickup run"
    );

    let mut notified = 0usize;
    let mut first_below: Option<(i64, i64)> = None;

    for key in &keys {
        match pickup_keyword(state, key, &range).await? {
            KeywordOutcome::Notified => notified += 1,
            KeywordOutcome::BelowLimit {
                total_results,
                notice_lower_limit,
            } => {
                if first_below.is_none() {
                    first_below = Some((total_results, notice_lower_limit));
                }
            }
        }
    }

    match first_below {
        Some((total, limit)) if notified == 0 => Ok(formatter::below_limit_message(total, limit)),
        _ => Ok(SUCCESS_MESSAGE.to_string()),
    }
}

pub async fn pickup_keyword(
    state: &AppState,
    key: &PickupKey,
    range: &DateRange,
) -> Result<KeywordOutcome> {
    let resp = state.news.search_in_title(&key.keyword, range).await?;

    tracing::info!(
        keyword = %key.keyword,
        total_results = resp.total_results,
        notice_lower_limit = key.notice_lower_limit,
        "news query done"
    );

    if resp.total_results <= key.notice_lower_limit {
        tracing::info!(keyword = %key.keyword, "below notice lower limit, skipping");
        return Ok(KeywordOutcome::BelowLimit {
            total_results: resp.total_results,
            notice_lower_limit: key.notice_lower_limit,
        });
    }

    let message = formatter::build_message(key, range, &resp);
    state.notifier.notify(&message.text()).await?;

    Ok(KeywordOutcome::Notified)
}
