//! Access guard: gated mounting decision
//!
//! Maps an access check onto the render/fallback choice a conditional
//! mount needs. The decision is fail-closed: only a resolved grant
//! renders the protected children.

use crate::access::{AccessCheck, AccessState};
use crate::authority::PermissionAuthority;
use backlog_session::IdentitySession;

/// What a gated mount should show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the protected children
    Render,
    /// Render the configured fallback (or nothing)
    Fallback,
}

/// Guard for conditionally mounting an element behind a permission
#[derive(Debug, Clone)]
pub struct AccessGuard {
    check: AccessCheck,
}

impl AccessGuard {
    /// Mount a guard for `(resource_id, action)`
    pub fn new(
        authority: PermissionAuthority,
        identity: IdentitySession,
        resource_id: impl Into<String>,
        action: impl Into<String>,
    ) -> Self {
        Self {
            check: AccessCheck::new(authority, identity, resource_id, action),
        }
    }

    /// The decision for the current state, without resolving
    pub fn decision(&self) -> GuardDecision {
        if self.check.is_allowed() {
            GuardDecision::Render
        } else {
            GuardDecision::Fallback
        }
    }

    /// Resolve the underlying check and return the decision
    pub async fn decide(&mut self) -> GuardDecision {
        match self.check.resolve().await {
            AccessState::Granted => GuardDecision::Render,
            _ => GuardDecision::Fallback,
        }
    }

    /// The underlying check, for retargeting on dependency change
    pub fn check_mut(&mut self) -> &mut AccessCheck {
        &mut self.check
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use backlog_client::testing::MockTransport;
    use backlog_client::ApiClient;
    use backlog_core::{AccountId, TokenPair, UserId, UserRecord};
    use backlog_session::MemoryBackend;
    use serde_json::json;
    use std::sync::Arc;
    use std::time::Duration;

    fn identity() -> IdentitySession {
        IdentitySession::new(Arc::new(MemoryBackend::new()))
    }

    fn login(identity: &IdentitySession) {
        identity.login(UserRecord {
            token: "app-jwt".into(),
            cerberus_token_pair: TokenPair::new("cat", "crt"),
            id: UserId::new("u-1"),
            account_id: AccountId::new("a-1"),
            name: "Alice".into(),
            email: "alice@example.com".into(),
        });
    }

    fn guard(transport: Arc<MockTransport>, identity: IdentitySession) -> AccessGuard {
        let authority = PermissionAuthority::new(ApiClient::new(
            "https://authority.test/api/",
            transport,
            identity.clone(),
        ));
        AccessGuard::new(authority, identity, "p-1", "CreateProject")
    }

    #[tokio::test]
    async fn test_unauthenticated_renders_fallback_without_query() {
        let transport = Arc::new(MockTransport::new());
        let mut guard = guard(Arc::clone(&transport), identity());

        assert_eq!(guard.decide().await, GuardDecision::Fallback);
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_denied_while_pending_then_granted_never_reverse() {
        // Delayed transport: the guard must read Fallback before the query
        // resolves and Render only after.
        let transport = Arc::new(MockTransport::with_delay(Duration::from_millis(10)));
        transport.push_data(json!(true));
        let identity = identity();
        login(&identity);
        let mut guard = guard(Arc::clone(&transport), identity);

        assert_eq!(guard.decision(), GuardDecision::Fallback);
        assert_eq!(guard.decide().await, GuardDecision::Render);
        assert_eq!(guard.decision(), GuardDecision::Render);
    }

    #[tokio::test]
    async fn test_denied_answer_renders_fallback() {
        let transport = Arc::new(MockTransport::new());
        transport.push_data(json!(false));
        let identity = identity();
        login(&identity);
        let mut guard = guard(Arc::clone(&transport), identity);

        assert_eq!(guard.decide().await, GuardDecision::Fallback);
    }
}
