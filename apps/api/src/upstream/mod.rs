//! Upstream clients: the one place this service talks to the auth, career,
//! evaluation, chat and networking services and to the GNews and Adzuna APIs.
//!
//! No retries. A failed call surfaces once as an `UpstreamError`.

use std::time::Duration;

use bytes::Bytes;
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use crate::config::Config;

pub mod auth;
pub mod career;
pub mod chat;
pub mod listings;

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{0} returned empty content")]
    EmptyContent(&'static str),

    #[error("{0} is not configured")]
    MissingCredentials(&'static str),

    #[error("Invalid upstream URL: {0}")]
    InvalidUrl(String),
}

/// Base URL of every collaborator.
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub auth: String,
    pub career: String,
    pub evaluation: String,
    pub chat: String,
    pub network: String,
    pub gnews: String,
    pub adzuna: String,
}

#[derive(Debug, Clone)]
pub struct AdzunaCredentials {
    pub app_id: String,
    pub app_key: String,
}

/// A file received from the caller, forwarded as a multipart part.
#[derive(Debug, Clone)]
pub struct Upload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Bytes,
}

#[derive(Clone)]
pub struct UpstreamClient {
    client: Client,
    endpoints: Endpoints,
    gnews_api_key: Option<String>,
    adzuna: Option<AdzunaCredentials>,
}

impl UpstreamClient {
    pub fn new(config: &Config) -> Result<Self, UpstreamError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.upstream_timeout_secs))
            .build()?;
        Ok(Self {
            client,
            endpoints: config.endpoints.clone(),
            gnews_api_key: config.gnews_api_key.clone(),
            adzuna: config.adzuna.clone(),
        })
    }

    /// Joins `segments` onto `base`, percent-encoding each one. A trailing
    /// empty segment produces a trailing slash.
    fn url(base: &str, segments: &[&str]) -> Result<Url, UpstreamError> {
        let mut url = Url::parse(base).map_err(|e| UpstreamError::InvalidUrl(format!("{base}: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| UpstreamError::InvalidUrl(base.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

/// Passes 2xx responses through; anything else becomes `UpstreamError::Api`
/// carrying the best message the body offers, or `fallback`.
async fn check(response: Response, fallback: &str) -> Result<Response, UpstreamError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let url = response.url().clone();
    let body = response.text().await.unwrap_or_default();
    let message = body_message(&body).unwrap_or_else(|| fallback.to_string());
    warn!(%url, status = status.as_u16(), "upstream call failed: {message}");
    Err(UpstreamError::Api {
        status: status.as_u16(),
        message,
    })
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, UpstreamError> {
    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}

/// Human-readable text from a response body, success or failure: JSON
/// `message`, `error` or `detail` (first non-blank string wins), else the
/// body itself when it is not JSON.
pub fn body_message(body: &str) -> Option<String> {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => ["message", "error", "detail"]
            .iter()
            .filter_map(|key| map.get(*key).and_then(Value::as_str))
            .map(str::trim)
            .find(|s| !s.is_empty())
            .map(String::from),
        Ok(Value::String(s)) => Some(s.trim().to_string()).filter(|s| !s.is_empty()),
        Ok(_) => None,
        Err(_) => Some(body.trim().to_string()).filter(|s| !s.is_empty()),
    }
}
