//! Echo endpoint.

use axum::Json;
use axum::http::{StatusCode, Uri};
use percent_encoding::percent_decode_str;
use serde::Serialize;

#[derive(Serialize)]
pub struct EchoResponse {
    pub message: String,
}

/// GET /echo/{msg} — reflects the decoded path segment back.
///
/// The segment is read from the raw request path and decoded lossily, so
/// bytes that are not valid UTF-8 become U+FFFD instead of failing the
/// request. A decoded `/` would make this a two-segment path, which answers
/// 404 like any other unmatched route.
pub async fn echo(uri: Uri) -> Result<Json<EchoResponse>, StatusCode> {
    let raw = uri.path().rsplit('/').next().unwrap_or_default();
    let message = decode_segment(raw);
    if message.contains('/') {
        return Err(StatusCode::NOT_FOUND);
    }

    metrics::counter!("http_requests_total", "route" => "/echo").increment(1);
    tracing::debug!(len = message.len(), "echoing message");
    Ok(Json(EchoResponse { message }))
}

fn decode_segment(raw: &str) -> String {
    percent_decode_str(raw).decode_utf8_lossy().into_owned()
}
