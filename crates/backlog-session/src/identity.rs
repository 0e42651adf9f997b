//! Identity session manager
//!
//! Holds the logged-in user and, through it, the permission-service token
//! pair. The pair is a field of the stored record, so it is present exactly
//! when the user is: login and logout move both in one assignment.

use crate::store::{SessionBackend, SessionCell};
use backlog_core::{TokenPair, UserRecord};
use std::sync::Arc;

/// Storage key for the persisted identity session
pub const SESSION_USER_KEY: &str = "session-user";

/// The authenticated identity for the current session
///
/// Cheaply cloneable; clones share the same persisted state, so a clone
/// handed to a request client observes login and logout immediately.
#[derive(Debug, Clone)]
pub struct IdentitySession {
    cell: SessionCell<UserRecord>,
}

impl IdentitySession {
    /// Create an identity session over the given backend
    ///
    /// Reads nothing eagerly: a persisted user from a previous navigation
    /// is simply visible through `user()`.
    pub fn new(backend: Arc<dyn SessionBackend>) -> Self {
        Self {
            cell: SessionCell::new(backend, SESSION_USER_KEY),
        }
    }

    /// Store the user delivered by a successful login response
    ///
    /// Pure state assignment; any failure happened upstream in the network
    /// call that produced the record.
    pub fn login(&self, user: UserRecord) {
        tracing::info!(user = %user.id, account = %user.account_id, "Identity session established");
        self.cell.set(&user);
    }

    /// Clear the identity
    ///
    /// Callers end the whole session through
    /// [`SessionContext::end_session`](crate::context::SessionContext::end_session),
    /// which also clears the selection cells.
    pub fn logout(&self) {
        tracing::info!("Identity session cleared");
        self.cell.clear();
    }

    /// The current user, if any
    pub fn user(&self) -> Option<UserRecord> {
        self.cell.get()
    }

    /// True iff a user is present
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user().is_some()
    }

    /// The permission-service token pair, present iff a user is
    pub fn token_pair(&self) -> Option<TokenPair> {
        self.user().map(|u| u.cerberus_token_pair)
    }

    /// The application bearer token, present iff a user is
    pub fn bearer_token(&self) -> Option<String> {
        self.user().map(|u| u.token)
    }
}
