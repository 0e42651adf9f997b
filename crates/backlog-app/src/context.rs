//! Application composition root
//!
//! One `AppContext` per running application. It wires a single identity
//! session into every client, so a login is visible to the primary API,
//! the auth endpoints, and the permission authority at once, and a logout
//! strips credentials from all of them at once.

use crate::config::AppConfig;
use backlog_client::{api, ApiClient, HttpTransport};
use backlog_core::UserRecord;
use backlog_guards::{AccessCheck, AccessGuard, AuthGate, PermissionAuthority};
use backlog_session::{SessionBackend, SessionContext};
use std::sync::Arc;

/// The wired application core
#[derive(Debug, Clone)]
pub struct AppContext {
    session: SessionContext,
    api: ApiClient,
    auth_api: ApiClient,
    authority: PermissionAuthority,
}

impl AppContext {
    /// Wire the core over one session backend and one transport
    ///
    /// All three clients share the session's identity; the transport is
    /// shared so a host supplies exactly one HTTP implementation.
    pub fn new(
        config: &AppConfig,
        backend: Arc<dyn SessionBackend>,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        let session = SessionContext::new(backend);
        let identity = session.identity().clone();
        let api = ApiClient::new(
            config.api_base.clone(),
            Arc::clone(&transport),
            identity.clone(),
        );
        let auth_api = ApiClient::new(
            config.auth_base.clone(),
            Arc::clone(&transport),
            identity.clone(),
        );
        let authority = PermissionAuthority::new(ApiClient::new(
            config.authority_base.clone(),
            transport,
            identity,
        ));
        Self {
            session,
            api,
            auth_api,
            authority,
        }
    }

    /// The session context
    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    /// Client for the primary API
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Client for the auth endpoints
    pub fn auth_api(&self) -> &ApiClient {
        &self.auth_api
    }

    /// Client for the permission authority
    pub fn authority(&self) -> &PermissionAuthority {
        &self.authority
    }

    /// Authenticate and store the returned credential record
    ///
    /// On success the very next request on any client carries the new
    /// credentials. On failure the session is left untouched.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> backlog_client::Result<UserRecord> {
        let user = api::auth::login(&self.auth_api, email, password).await?;
        tracing::info!(user = %user.email, "Login succeeded");
        self.session.identity().login(user.clone());
        Ok(user)
    }

    /// Register a new account and log its first user in
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> backlog_client::Result<UserRecord> {
        let user = api::auth::register(&self.auth_api, name, email, password).await?;
        tracing::info!(user = %user.email, "Registration succeeded");
        self.session.identity().login(user.clone());
        Ok(user)
    }

    /// End the session, clearing identity and both selections
    pub fn logout(&self) {
        self.session.end_session();
    }

    /// An authentication gate over this context's identity
    pub fn auth_gate(&self) -> AuthGate {
        AuthGate::new(self.session.identity().clone())
    }

    /// A fresh fail-closed check for `(resource_id, action)`
    pub fn access_check(
        &self,
        resource_id: impl Into<String>,
        action: impl Into<String>,
    ) -> AccessCheck {
        AccessCheck::new(
            self.authority.clone(),
            self.session.identity().clone(),
            resource_id,
            action,
        )
    }

    /// A guard for conditionally mounting an element behind a permission
    pub fn access_guard(
        &self,
        resource_id: impl Into<String>,
        action: impl Into<String>,
    ) -> AccessGuard {
        AccessGuard::new(
            self.authority.clone(),
            self.session.identity().clone(),
            resource_id,
            action,
        )
    }
}
