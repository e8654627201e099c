//! HTTP transport shared by the browser and desktop builds.

use reqwest::{Method, Url};
use serde_json::Value;
use thiserror::Error;

use crate::config::ApiConfig;
use crate::wasm_utils;

pub const API_KEY_HEADER: &str = "X-Api-Key";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Server error: {status}")]
    Status { status: u16, message: Option<String> },
    #[error("Failed to parse response: {0}")]
    Decode(String),
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// The `message` field of the server's error body, when it sent one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

/// A raw response: status plus the body text, which may be empty.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn json(&self) -> Result<Value> {
        serde_json::from_str(&self.body).map_err(|e| {
            ApiError::Decode(format!("{} - Response was: {}", e, self.body))
        })
    }
}

#[derive(Clone)]
pub struct HttpClient {
    base_url: Url,
    api_key: Option<String>,
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;

        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .connect_timeout(std::time::Duration::from_secs(config.timeout_secs.min(10)));

        let client = builder.build().unwrap_or_else(|_| reqwest::Client::new());

        Ok(Self {
            base_url,
            api_key: config.api_key.clone().filter(|k| !k.is_empty()),
            client,
        })
    }

    /// Joins unencoded path segments onto the base URL. Each segment is
    /// percent-encoded on its own, so `open box` becomes `open%20box`.
    pub fn url_for(&self, segments: &[String], query: &[(String, String)]) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| ApiError::InvalidUrl(self.base_url.to_string()))?;
            path.pop_if_empty();
            path.extend(segments);
        }
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    /// Sends one request. Non-2xx statuses become `ApiError::Status`, with
    /// the server's `message` field extracted when the body carries one.
    pub async fn send(
        &self,
        method: Method,
        segments: &[String],
        query: &[(String, String)],
        body: Option<&Value>,
    ) -> Result<RawResponse> {
        let url = self.url_for(segments, query)?;
        wasm_utils::console_log(&format!("Making {} request to: {}", method, url));

        let mut request = self.client.request(method, url);
        if let Some(key) = &self.api_key {
            request = request.header(API_KEY_HEADER, key);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Network(format!("Failed to read response text: {}", e)))?;

        if !status.is_success() {
            log::warn!("HTTP request failed with status: {}", status);
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: error_message(&text),
            });
        }

        Ok(RawResponse {
            status: status.as_u16(),
            body: text,
        })
    }
}

fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<Value>(body)
        .ok()?
        .get("message")?
        .as_str()
        .map(str::to_string)
}
