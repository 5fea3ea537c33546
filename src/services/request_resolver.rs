use chrono::{DateTime, Duration, FixedOffset, Utc};

use crate::{
    error::{PickupError, Result},
    models::{DateRange, PickupKey, RequestParameter},
    services::object_store::ObjectStore,
};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Fill in missing dates: `from` defaults to yesterday and `to` to today,
/// both as seen in `offset`.
pub fn resolve_date_range(
    params: &RequestParameter,
    now: DateTime<Utc>,
    offset: FixedOffset,
) -> DateRange {
    let today = now.with_timezone(&offset).date_naive();

    let from = if params.from.is_empty() {
        (today - Duration::days(1)).format(DATE_FORMAT).to_string()
    } else {
        params.from.clone()
    };

    let to = if params.to.is_empty() {
        today.format(DATE_FORMAT).to_string()
    } else {
        params.to.clone()
    };

    DateRange { from, to }
}

/// Keywords for this run: the JSON list stored at bucket/key when both are
/// given, otherwise the single inline keyword.
pub async fn load_pickup_keys(
    store: &dyn ObjectStore,
    params: &RequestParameter,
) -> Result<Vec<PickupKey>> {
    let Some((bucket, key)) = params.object_location() else {
        return Ok(vec![PickupKey {
            keyword: params.keyword.clone(),
            notice_lower_limit: params.notice_lower_limit,
        }]);
    };

    let bytes = store.get_object(bucket, key).await?;
    let keys: Vec<PickupKey> =
        serde_json::from_slice(&bytes).map_err(|source| PickupError::Decode {
            context: "pickup key list",
            source,
        })?;

    tracing::info!(bucket, key, count = keys.len(), "loaded pickup keys");
    Ok(keys)
}
