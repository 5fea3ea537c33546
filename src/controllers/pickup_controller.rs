use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};

use crate::{models::RequestParameter, services::pickup_service, AppState};

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.trim_start().to_ascii_lowercase().starts_with("application/json"))
        .unwrap_or(false)
}

// POST /pickup
//
// An empty body runs with defaults (yesterday..today, inline keyword).
// Anything else must be a JSON RequestParameter.
pub async fn post_pickup(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let params = if body.iter().all(u8::is_ascii_whitespace) {
        RequestParameter::default()
    } else {
        if !is_json(&headers) {
            return (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "expected content-type application/json".to_string(),
            )
                .into_response();
        }

        match serde_json::from_slice::<RequestParameter>(&body) {
            Ok(p) => p,
            Err(e) => {
                tracing::warn!("rejected pickup payload: {e}");
                return (StatusCode::BAD_REQUEST, format!("invalid request: {e}")).into_response();
            }
        }
    };

    match pickup_service::run(&state, &params).await {
        Ok(status) => (StatusCode::OK, status).into_response(),
        Err(e) => {
            tracing::error!("pickup run failed: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}
