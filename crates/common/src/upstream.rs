//! Outbound call to the hosted keyword function.

use axum::body::Bytes;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use crate::CoreError;

/// Upstream body plus its declared content type, relayed as-is.
#[derive(Debug, Clone)]
pub struct UpstreamReply {
    pub content_type: Option<String>,
    pub body: Bytes,
}

/// Issue a single GET against `url`, passing `keyword` as a query parameter when present.
///
/// Non-2xx statuses are errors; there is no retry.
pub async fn fetch_keyword(
    client: &reqwest::Client,
    url: &str,
    keyword: Option<&str>,
) -> Result<UpstreamReply, CoreError> {
    let mut req = client.get(url);
    if let Some(k) = keyword {
        req = req.query(&[("keyword", k)]);
    }
    let resp = req
        .send()
        .await
        .map_err(|e| CoreError::Network(e.to_string()))?;

    let status = resp.status();
    if !status.is_success() {
        return Err(CoreError::Upstream(status.as_u16()));
    }

    let content_type = resp
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let body = resp
        .bytes()
        .await
        .map_err(|e| CoreError::Body(e.to_string()))?;
    debug!(%url, bytes = body.len(), "upstream replied");
    Ok(UpstreamReply { content_type, body })
}
