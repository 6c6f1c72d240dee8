//! Browser HTTP Transport
//!
//! `fetch`-backed transport built on gloo-net.

use async_trait::async_trait;
use gloo_net::http::Request;

use super::{ApiRequest, Method, Transport};
use crate::error::{ApiError, ApiResult};

#[derive(Debug, Clone, PartialEq)]
pub struct HttpTransport {
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn map_network_error(error: gloo_net::Error) -> ApiError {
    ApiError::Network(error.to_string())
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> ApiResult<String> {
        let url = self.url(&request.path);
        let builder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        };

        let response = match request.body {
            Some(body) => {
                let body = serde_json::to_string(&body).map_err(|e| ApiError::Encode(e.to_string()))?;
                builder
                    .header("content-type", "application/json")
                    .body(body)
                    .map_err(map_network_error)?
                    .send()
                    .await
                    .map_err(map_network_error)?
            }
            None => builder.send().await.map_err(map_network_error)?,
        };

        let status = response.status();
        if !(200..=299).contains(&status) {
            log::warn!("{} {} -> HTTP {}", request.method.as_str(), request.path, status);
        }
        response.text().await.map_err(map_network_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base_and_path() {
        let transport = HttpTransport::new("https://shop.example.com");
        assert_eq!(transport.url("/api/products"), "https://shop.example.com/api/products");
        let same_origin = HttpTransport::new("");
        assert_eq!(same_origin.url("/api/orders/5/ship"), "/api/orders/5/ship");
    }
}
