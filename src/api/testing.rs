//! In-memory transport for tests
//!
//! Records every request and replays queued response bodies in order.

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;

use super::{ApiRequest, Method, Transport};
use crate::error::{ApiError, ApiResult};

#[derive(Default)]
pub struct RecordingTransport {
    requests: RefCell<Vec<ApiRequest>>,
    responses: RefCell<VecDeque<ApiResult<String>>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a raw response body
    pub fn respond(&self, body: &str) {
        self.responses.borrow_mut().push_back(Ok(body.to_string()));
    }

    /// Queue a transport failure
    pub fn fail(&self, message: &str) {
        self.responses
            .borrow_mut()
            .push_back(Err(ApiError::Network(message.to_string())));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    /// `(method, path)` of every request sent so far
    pub fn calls(&self) -> Vec<(Method, String)> {
        self.requests
            .borrow()
            .iter()
            .map(|r| (r.method, r.path.clone()))
            .collect()
    }
}

#[async_trait(?Send)]
impl Transport for RecordingTransport {
    async fn send(&self, request: ApiRequest) -> ApiResult<String> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no response queued".to_string())))
    }
}
