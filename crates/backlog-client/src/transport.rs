//! HTTP transport seam
//!
//! The client assembles requests; a transport executes them. Keeping the
//! seam here lets tests drive the whole client contract with an
//! in-process mock (see [`crate::testing`]).

use crate::error::{ClientError, Result};
use async_trait::async_trait;
use std::fmt;

/// HTTP method for an outbound request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// DELETE
    Delete,
}

impl Method {
    /// Wire name of the method
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A fully assembled outbound request
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method
    pub method: Method,
    /// Absolute or service-relative URL
    pub url: String,
    /// Header name/value pairs, already merged and overridden
    pub headers: Vec<(String, String)>,
    /// JSON body text, if any
    pub body: Option<String>,
}

impl HttpRequest {
    /// Look up a header value by exact name
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Executes an assembled request and returns the raw body text
///
/// Transport-level failures (network error, connection refused) surface as
/// [`ClientError::Transport`]; interpreting the body is the caller's job.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Execute the request to completion
    async fn execute(&self, request: HttpRequest) -> Result<String>;
}

/// Production transport backed by a shared reqwest client
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport with a fresh connection pool
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<String> {
        let mut builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url),
            Method::Put => self.client.put(&request.url),
            Method::Delete => self.client.delete(&request.url),
        };

        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(ClientError::from)?;
        response.text().await.map_err(ClientError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_wire_names() {
        assert_eq!(Method::Get.as_str(), "GET");
        assert_eq!(Method::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_header_lookup() {
        let request = HttpRequest {
            method: Method::Get,
            url: "/api/users".into(),
            headers: vec![("Content-Type".into(), "application/json".into())],
            body: None,
        };
        assert_eq!(request.header("Content-Type"), Some("application/json"));
        assert_eq!(request.header("Authorization"), None);
    }
}
