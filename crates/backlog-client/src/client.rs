//! The authenticated request client
//!
//! One `ApiClient` per logical API (primary service vs. permission
//! authority), same contract. Header assembly reads the identity session
//! at call time, so a login or logout is reflected by the very next
//! request.

use crate::envelope::unwrap_envelope;
use crate::error::Result;
use crate::transport::{HttpRequest, HttpTransport, Method};
use backlog_session::IdentitySession;
use serde_json::Value;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Standard authorization header
pub const AUTHORIZATION_HEADER: &str = "Authorization";
/// Permission-service access token header
pub const CERBERUS_ACCESS_HEADER: &str = "CerberusAccessToken";
/// Permission-service refresh token header
pub const CERBERUS_REFRESH_HEADER: &str = "CerberusRefreshToken";
/// Content type header
pub const CONTENT_TYPE_HEADER: &str = "Content-Type";

/// Authenticated request client bound to one base address
///
/// Clones share the loading flag and identity handle, so a view and the
/// workflow driving it observe the same in-flight state.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    transport: Arc<dyn HttpTransport>,
    identity: IdentitySession,
    loading: Arc<AtomicBool>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("loading", &self.loading())
            .finish()
    }
}

impl ApiClient {
    /// Create a client for the given base address
    pub fn new(
        base_url: impl Into<String>,
        transport: Arc<dyn HttpTransport>,
        identity: IdentitySession,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
            identity,
            loading: Arc::new(AtomicBool::new(false)),
        }
    }

    /// The base address requests are issued against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The identity session this client reads credentials from
    pub fn identity(&self) -> &IdentitySession {
        &self.identity
    }

    /// True while a call on this instance is in flight
    ///
    /// Overlapping calls interleave this flag; it reflects the most
    /// recently settled call. Views issue at most one call at a time.
    #[must_use]
    pub fn loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// GET a path, unwrapping the success envelope
    pub async fn get(&self, path: &str, extra_headers: &[(&str, &str)]) -> Result<Value> {
        self.dispatch(Method::Get, path, None, extra_headers).await
    }

    /// POST a JSON body to a path, unwrapping the success envelope
    pub async fn post(
        &self,
        path: &str,
        body: Value,
        extra_headers: &[(&str, &str)],
    ) -> Result<Value> {
        self.dispatch(Method::Post, path, Some(body), extra_headers)
            .await
    }

    /// PUT a JSON body to a path, unwrapping the success envelope
    pub async fn put(
        &self,
        path: &str,
        body: Value,
        extra_headers: &[(&str, &str)],
    ) -> Result<Value> {
        self.dispatch(Method::Put, path, Some(body), extra_headers)
            .await
    }

    /// DELETE a path, unwrapping the success envelope
    pub async fn del(&self, path: &str, extra_headers: &[(&str, &str)]) -> Result<Value> {
        self.dispatch(Method::Delete, path, None, extra_headers)
            .await
    }

    /// Default header set for the current identity state
    ///
    /// Content type always; the bearer token and both permission-service
    /// tokens only when a user is authenticated.
    fn default_headers(&self) -> Vec<(String, String)> {
        let mut headers = vec![(
            CONTENT_TYPE_HEADER.to_string(),
            "application/json".to_string(),
        )];
        if let Some(user) = self.identity.user() {
            headers.push((
                AUTHORIZATION_HEADER.to_string(),
                format!("Bearer {}", user.token),
            ));
            headers.push((
                CERBERUS_ACCESS_HEADER.to_string(),
                user.cerberus_token_pair.access_token,
            ));
            headers.push((
                CERBERUS_REFRESH_HEADER.to_string(),
                user.cerberus_token_pair.refresh_token,
            ));
        }
        headers
    }

    /// Merge caller headers over the defaults; caller wins on name clash
    fn merge_headers(&self, extra: &[(&str, &str)]) -> Vec<(String, String)> {
        let mut headers = self.default_headers();
        for (name, value) in extra {
            if let Some(slot) = headers.iter_mut().find(|(n, _)| n == name) {
                slot.1 = (*value).to_string();
            } else {
                headers.push(((*name).to_string(), (*value).to_string()));
            }
        }
        headers
    }

    async fn dispatch(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        extra_headers: &[(&str, &str)],
    ) -> Result<Value> {
        let request = HttpRequest {
            method,
            url: format!("{}{}", self.base_url, path),
            headers: self.merge_headers(extra_headers),
            body: body.map(|b| b.to_string()),
        };
        tracing::debug!(method = %method, url = %request.url, "Dispatching request");

        self.loading.store(true, Ordering::SeqCst);
        let outcome = self.transport.execute(request).await;
        self.loading.store(false, Ordering::SeqCst);

        let text = outcome?;
        let payload = unwrap_envelope(&text);
        if let Err(err) = &payload {
            tracing::warn!(method = %method, path = %path, error = %err, "Request failed");
        }
        payload
    }
}
