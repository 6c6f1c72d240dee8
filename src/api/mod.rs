//! Storefront API Client
//!
//! Typed bindings to the storefront HTTP API, organized by resource.
//! Every endpoint answers with an envelope `{status, data?, message?}`;
//! only `status == "success"` counts as success.

mod auth;
mod categories;
mod http;
mod orders;
mod products;

#[cfg(test)]
pub mod testing;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::PAGE_SIZE;
use crate::error::{ApiError, ApiResult};

pub use http::HttpTransport;
pub use orders::OrderFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// A planned request, relative to the API base
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self { method: Method::Get, path: path.into(), body: None }
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self { method: Method::Post, path: path.into(), body: None }
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self { method: Method::Put, path: path.into(), body: None }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self { method: Method::Delete, path: path.into(), body: None }
    }

    pub fn json<B: Serialize>(mut self, body: &B) -> ApiResult<Self> {
        let value = serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.body = Some(value);
        Ok(self)
    }
}

/// Moves a request over the wire and hands back the raw response body.
///
/// The body is returned whatever the HTTP status; error envelopes ride on
/// 4xx/5xx responses too.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> ApiResult<String>;
}

#[derive(Debug, Deserialize)]
struct Envelope {
    status: String,
    #[serde(default)]
    data: Option<serde_json::Value>,
    #[serde(default)]
    message: Option<String>,
}

impl Envelope {
    fn is_success(&self) -> bool {
        self.status == "success"
    }

    fn decode_data<D: DeserializeOwned>(self) -> ApiResult<D> {
        let data = self
            .data
            .ok_or_else(|| ApiError::Decode("missing data".to_string()))?;
        serde_json::from_value(data).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Typed API surface over any transport
#[derive(Debug, Clone)]
pub struct ApiClient<T> {
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    #[cfg(test)]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn envelope(&self, request: ApiRequest) -> ApiResult<Envelope> {
        log::debug!("{} {}", request.method.as_str(), request.path);
        let raw = self.transport.send(request).await?;
        serde_json::from_str(&raw).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Send a request and return its `data` payload on success
    async fn fetch<D: DeserializeOwned>(&self, request: ApiRequest) -> ApiResult<D> {
        let envelope = self.envelope(request).await?;
        if !envelope.is_success() {
            return Err(ApiError::rejected(envelope.message));
        }
        envelope.decode_data()
    }

    /// Send a request whose payload, if any, is not needed
    async fn execute(&self, request: ApiRequest) -> ApiResult<()> {
        let envelope = self.envelope(request).await?;
        if envelope.is_success() {
            Ok(())
        } else {
            Err(ApiError::rejected(envelope.message))
        }
    }
}

fn list_path(resource: &str, page: u32) -> String {
    format!("/api/{}?page={}&page_size={}", resource, page.max(1), PAGE_SIZE)
}

#[cfg(test)]
mod tests {
    use super::testing::RecordingTransport;
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_non_success_status_is_rejected() {
        let transport = RecordingTransport::new();
        transport.respond(r#"{"status":"error","message":"already shipped"}"#);
        let api = ApiClient::new(transport);
        let err = block_on(api.execute(ApiRequest::post("/api/x"))).unwrap_err();
        assert_eq!(err, ApiError::Rejected("already shipped".to_string()));
    }

    #[test]
    fn test_malformed_body_is_decode_error() {
        let transport = RecordingTransport::new();
        transport.respond("<html>502</html>");
        let api = ApiClient::new(transport);
        let err = block_on(api.execute(ApiRequest::get("/api/x"))).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_list_path_has_fixed_page_size() {
        assert_eq!(list_path("orders", 3), "/api/orders?page=3&page_size=10");
        assert_eq!(list_path("orders", 0), "/api/orders?page=1&page_size=10");
    }
}
