use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;
use reqwest::redirect;
use serde_json::Value;
use thiserror::Error;

/// Failure modes of one fetch attempt. The `Display` text is the
/// user-visible message carried into the error document.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("API URL is not configured.")]
    UrlNotConfigured,

    #[error("Failed to fetch data from API: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to fetch data from API: {source}")]
    InvalidJson {
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to fetch data from API: response has no \"data\" collection")]
    MissingData,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchErrorKind {
    Configuration,
    Transport,
    Parse,
}

impl FetchError {
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::UrlNotConfigured => FetchErrorKind::Configuration,
            FetchError::Transport { .. } => FetchErrorKind::Transport,
            FetchError::InvalidJson { .. } | FetchError::MissingData => FetchErrorKind::Parse,
        }
    }
}

/// Builds the blocking HTTP client shared by render calls. The request
/// timeout is a bounded safety margin on top of the endpoint contract.
pub fn build_client(timeout_seconds: u64) -> Result<Client, reqwest::Error> {
    let mut headers = reqwest::header::HeaderMap::new();
    headers.insert(
        reqwest::header::ACCEPT,
        reqwest::header::HeaderValue::from_static("application/json"),
    );
    Client::builder()
        .default_headers(headers)
        .redirect(redirect::Policy::limited(10))
        .timeout(Duration::from_secs(timeout_seconds))
        .build()
}

/// Issues exactly one GET against `url` and extracts the top-level `"data"`
/// array. Status codes are deliberately not checked: any response whose body
/// parses and carries `"data"` counts as success.
pub fn fetch_raw(client: &Client, url: &str) -> Result<Vec<Value>, FetchError> {
    if url.is_empty() {
        return Err(FetchError::UrlNotConfigured);
    }
    debug!("fetching user collection from {url}");
    let response = client
        .get(url)
        .send()
        .map_err(|e| FetchError::Transport { source: e })?;
    let body = response
        .text()
        .map_err(|e| FetchError::Transport { source: e })?;
    let parsed: Value =
        serde_json::from_str(&body).map_err(|e| FetchError::InvalidJson { source: e })?;
    match parsed.get("data").and_then(Value::as_array) {
        Some(items) => Ok(items.clone()),
        None => Err(FetchError::MissingData),
    }
}
