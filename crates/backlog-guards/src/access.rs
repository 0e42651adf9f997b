//! Asynchronous resource/action access check
//!
//! One `AccessCheck` per mounted gated element. The state machine is
//! `Pending -> Granted | Denied`, terminal for that mount; a change of
//! resource, action, or identity re-enters `Pending`, indistinguishable
//! from a fresh mount. `Pending` reads as denied.

use crate::authority::PermissionAuthority;
use backlog_session::IdentitySession;

/// State of a mounted access check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessState {
    /// Query not yet resolved; renders as denied
    Pending,
    /// The authority answered `true`
    Granted,
    /// The authority answered `false`, errored, or there is no subject
    Denied,
}

impl AccessState {
    /// True only for a resolved grant; `Pending` is fail-closed
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Granted)
    }
}

/// The dependency key a resolution is valid for
#[derive(Debug, Clone, PartialEq, Eq)]
struct SubjectKey {
    resource_id: String,
    action: String,
    access_token: Option<String>,
}

/// Per-mount access check against the permission authority
#[derive(Debug, Clone)]
pub struct AccessCheck {
    authority: PermissionAuthority,
    identity: IdentitySession,
    resource_id: String,
    action: String,
    state: AccessState,
    resolved_for: Option<SubjectKey>,
}

impl AccessCheck {
    /// Mount a check for `(resource_id, action)` under the current identity
    pub fn new(
        authority: PermissionAuthority,
        identity: IdentitySession,
        resource_id: impl Into<String>,
        action: impl Into<String>,
    ) -> Self {
        Self {
            authority,
            identity,
            resource_id: resource_id.into(),
            action: action.into(),
            state: AccessState::Pending,
            resolved_for: None,
        }
    }

    /// Current state; `Pending` until [`resolve`](Self::resolve) settles
    pub fn state(&self) -> AccessState {
        self.state
    }

    /// Fail-closed view of the current state
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        self.state.is_allowed()
    }

    /// Point the check at a different resource or action
    ///
    /// A changed target re-enters `Pending`; re-targeting to the current
    /// target keeps the resolved state.
    pub fn retarget(&mut self, resource_id: impl Into<String>, action: impl Into<String>) {
        let resource_id = resource_id.into();
        let action = action.into();
        if resource_id != self.resource_id || action != self.action {
            self.resource_id = resource_id;
            self.action = action;
            self.state = AccessState::Pending;
        }
    }

    fn current_key(&self) -> SubjectKey {
        SubjectKey {
            resource_id: self.resource_id.clone(),
            action: self.action.clone(),
            access_token: self
                .identity
                .token_pair()
                .map(|pair| pair.access_token),
        }
    }

    /// Resolve the check, issuing a query when needed
    ///
    /// No query is issued when the subject is unauthenticated or when the
    /// previous resolution is still valid for the current dependencies.
    /// A query error resolves to `Denied`.
    pub async fn resolve(&mut self) -> AccessState {
        let key = self.current_key();
        if self.resolved_for.as_ref() == Some(&key) && self.state != AccessState::Pending {
            return self.state;
        }

        self.state = if key.access_token.is_none() {
            AccessState::Denied
        } else {
            match self
                .authority
                .has_access(&self.resource_id, &self.action)
                .await
            {
                Ok(true) => AccessState::Granted,
                Ok(false) => AccessState::Denied,
                Err(err) => {
                    tracing::warn!(
                        resource = %self.resource_id,
                        action = %self.action,
                        error = %err,
                        "Access query failed; denying"
                    );
                    AccessState::Denied
                }
            }
        };
        self.resolved_for = Some(key);
        self.state
    }
}
