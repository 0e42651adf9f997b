//! Test support: an in-process transport
//!
//! `MockTransport` returns canned responses in order and records every
//! request it executes. The guards and app crates drive their tests
//! through it as well.

use crate::error::{ClientError, Result};
use crate::transport::{HttpRequest, HttpTransport};
use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::time::Duration;

/// Transport that replays canned responses and records requests
#[derive(Debug, Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<String>>>,
    requests: Mutex<Vec<HttpRequest>>,
    delay: Option<Duration>,
}

impl MockTransport {
    /// Create an empty mock
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that sleeps before answering each request
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::default()
        }
    }

    /// Queue a success envelope wrapping `payload`
    pub fn push_data(&self, payload: Value) {
        self.push_body(json!({ "code": 200, "data": payload }).to_string());
    }

    /// Queue a raw body, verbatim
    pub fn push_body(&self, body: String) {
        self.responses.lock().push_back(Ok(body));
    }

    /// Queue a transport failure
    pub fn push_transport_error(&self, message: impl Into<String>) {
        self.responses
            .lock()
            .push_back(Err(ClientError::transport(message)));
    }

    /// Every request executed so far, in order
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().clone()
    }

    /// Number of requests executed so far
    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn execute(&self, request: HttpRequest) -> Result<String> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.requests.lock().push(request);
        self.responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::transport("no canned response queued")))
    }
}
