//! REST helper for the rover-list endpoint.
//!
//! The request is described as plain data ([`HttpRequest`]) and sent through
//! an [`HttpTransport`]. In the browser (`hydrate`) the transport is
//! [`BrowserTransport`] backed by `gloo-net`; tests substitute a recording
//! transport.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here panics. Transport failures, non-2xx statuses and bodies that
//! are not JSON surface as [`FetchError`]. A JSON body without a `rovers`
//! field decodes to an empty list and logs a warning.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::collections::BTreeMap;

use super::types::{Rover, RoverList};
use crate::config::RoverApiConfig;

pub const CONTENT_TYPE_HEADER: &str = "content-type";
pub const JSON_CONTENT_TYPE: &str = "application/json";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("malformed rover list: {0}")]
    Decode(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
        }
    }
}

/// An outbound request, independent of the transport that sends it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends an [`HttpRequest`] and returns the raw response.
#[allow(async_fn_in_trait)]
pub trait HttpTransport {
    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, FetchError>;
}

/// `fetch`-backed transport for the browser.
#[cfg(feature = "hydrate")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTransport;

#[cfg(feature = "hydrate")]
impl HttpTransport for BrowserTransport {
    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, FetchError> {
        log::debug!("{} {}", request.method.as_str(), request.url);
        let mut builder = match request.method {
            HttpMethod::Get => gloo_net::http::Request::get(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        let resp = builder
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        Ok(HttpResponse { status, body })
    }
}

/// Build the rover-list request: `GET <base url>` with a JSON content type.
pub fn rovers_request(config: &RoverApiConfig) -> HttpRequest {
    let mut headers = BTreeMap::new();
    headers.insert(CONTENT_TYPE_HEADER.to_owned(), JSON_CONTENT_TYPE.to_owned());
    HttpRequest { method: HttpMethod::Get, url: config.rovers_url(), headers }
}

/// Fetch and decode the rover list. Issues exactly one request.
///
/// # Errors
///
/// Returns the transport's error, [`FetchError::Status`] for a non-2xx
/// response, or [`FetchError::Decode`] for a body that is not a rover list.
pub async fn fetch_rovers<T: HttpTransport>(transport: &T, config: &RoverApiConfig) -> Result<Vec<Rover>, FetchError> {
    let request = rovers_request(config);
    log::debug!("fetching rovers from {}", request.url);

    let response = transport.send(&request).await?;
    if !response.is_success() {
        return Err(FetchError::Status(response.status));
    }
    decode_rover_list(&response.body)
}

/// Decode a rover-list body.
///
/// A valid JSON document with a missing or `null` `rovers` field (or one
/// that is not an object) yields an empty list with a warning; invalid JSON and malformed
/// entries are errors.
///
/// # Errors
///
/// Returns [`FetchError::Decode`] when the body is not JSON or a rover entry
/// does not match [`Rover`].
pub fn decode_rover_list(body: &str) -> Result<Vec<Rover>, FetchError> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;
    if value.get("rovers").is_none_or(serde_json::Value::is_null) {
        log::warn!("rover list response has no `rovers` field; treating as empty");
        return Ok(Vec::new());
    }
    let list: RoverList = serde_json::from_value(value).map_err(|e| FetchError::Decode(e.to_string()))?;
    Ok(list.rovers)
}
