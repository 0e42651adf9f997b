//! Synchronous authentication gate
//!
//! A pure function of identity presence: render children iff a user is
//! authenticated, otherwise render nothing or redirect when configured
//! with a target. No network call is ever involved.

use backlog_session::IdentitySession;

/// Outcome of evaluating the authentication gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateOutcome {
    /// A user is present; render the protected children
    Allow,
    /// No user and no redirect target; render nothing
    Hidden,
    /// No user; navigate to the configured target
    Redirect(String),
}

/// Authentication gate over the identity session
#[derive(Debug, Clone)]
pub struct AuthGate {
    identity: IdentitySession,
    redirect_to: Option<String>,
}

impl AuthGate {
    /// Gate that hides its children when unauthenticated
    pub fn new(identity: IdentitySession) -> Self {
        Self {
            identity,
            redirect_to: None,
        }
    }

    /// Gate that redirects to `target` when unauthenticated
    pub fn with_redirect(mut self, target: impl Into<String>) -> Self {
        self.redirect_to = Some(target.into());
        self
    }

    /// Evaluate against the current identity state
    pub fn evaluate(&self) -> GateOutcome {
        if self.identity.is_authenticated() {
            GateOutcome::Allow
        } else {
            match &self.redirect_to {
                Some(target) => GateOutcome::Redirect(target.clone()),
                None => GateOutcome::Hidden,
            }
        }
    }

    /// True iff the gate currently allows rendering
    #[must_use]
    pub fn allows(&self) -> bool {
        self.evaluate() == GateOutcome::Allow
    }
}
