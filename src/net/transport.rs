//! JSON-over-HTTP transport used by the API client.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: `HttpTransport` reports `Unavailable`; tests substitute
//! their own `Transport`.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is a `TransportError`. Callers above this layer pass it
//! through untouched.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ClientConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
        }
    }
}

/// One request against the backend. `path` is relative to the API base URL.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub path: &'static str,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(path: &'static str) -> Self {
        Self { method: HttpMethod::Get, path, body: None }
    }

    pub fn post(path: &'static str, body: Option<Value>) -> Self {
        Self { method: HttpMethod::Post, path, body }
    }

    pub fn put(path: &'static str, body: Value) -> Self {
        Self { method: HttpMethod::Put, path, body: Some(body) }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("invalid request body: {0}")]
    Encode(String),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("http transport not available outside the browser")]
    Unavailable,
}

/// Sends a request and yields the decoded JSON response body.
///
/// Non-2xx responses must surface as `TransportError::Status`.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<Value, TransportError>;
}

/// Convert a response body into the operation's result type.
///
/// # Errors
///
/// Returns `TransportError::Decode` when the JSON does not match `T`.
pub fn decode<T: DeserializeOwned>(value: Value) -> Result<T, TransportError> {
    serde_json::from_value(value).map_err(|e| TransportError::Decode(e.to_string()))
}

/// Encode a request body.
///
/// # Errors
///
/// Returns `TransportError::Encode` if `value` cannot be represented as JSON.
pub fn encode<T: serde::Serialize>(value: &T) -> Result<Value, TransportError> {
    serde_json::to_value(value).map_err(|e| TransportError::Encode(e.to_string()))
}

fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Browser transport. Attaches the session token as a bearer credential.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    config: ClientConfig,
    token: Option<String>,
}

impl HttpTransport {
    pub fn new(config: ClientConfig, token: Option<String>) -> Self {
        Self { config, token }
    }

    pub fn url_for(&self, request: &ApiRequest) -> String {
        self.config.endpoint(request.path)
    }

    pub fn authorization(&self) -> Option<String> {
        self.token.as_deref().filter(|t| !t.is_empty()).map(bearer_header)
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value, TransportError> {
        #[cfg(feature = "csr")]
        {
            use gloo_net::http::Request;

            let url = self.url_for(&request);
            let mut builder = match request.method {
                HttpMethod::Get => Request::get(&url),
                HttpMethod::Post => Request::post(&url),
                HttpMethod::Put => Request::put(&url),
            };
            if let Some(auth) = self.authorization() {
                builder = builder.header("Authorization", &auth);
            }

            let sent = match &request.body {
                Some(body) => builder
                    .json(body)
                    .map_err(|e| TransportError::Network(e.to_string()))?
                    .send()
                    .await,
                None => builder.send().await,
            };
            let resp = sent.map_err(|e| TransportError::Network(e.to_string()))?;

            if !resp.ok() {
                let status = resp.status();
                let body = resp.text().await.unwrap_or_default();
                log::warn!("{} {url} -> {status}", request.method.as_str());
                return Err(TransportError::Status { status, body });
            }

            let text = resp.text().await.map_err(|e| TransportError::Network(e.to_string()))?;
            if text.trim().is_empty() {
                return Ok(Value::Null);
            }
            serde_json::from_str(&text).map_err(|e| TransportError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(TransportError::Unavailable)
        }
    }
}
