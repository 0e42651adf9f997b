//! Session context composition root
//!
//! One `SessionContext` per session scope. It is the only owner of the
//! logout cascade list: a future fourth stateful cell gets added here and
//! nowhere else.

use crate::identity::IdentitySession;
use crate::selection::{SelectionCell, SESSION_PROJECT_KEY, SESSION_SPRINT_KEY};
use crate::store::SessionBackend;
use backlog_core::{Project, Sprint};
use std::sync::Arc;

/// The three session-scoped cells, wired over one backend
#[derive(Debug, Clone)]
pub struct SessionContext {
    identity: IdentitySession,
    project: SelectionCell<Project>,
    sprint: SelectionCell<Sprint>,
}

impl SessionContext {
    /// Build a session context over the given backend
    ///
    /// Each cell reads its own persisted state independently; a reload
    /// within the same session scope restores identity and selections.
    pub fn new(backend: Arc<dyn SessionBackend>) -> Self {
        Self {
            identity: IdentitySession::new(Arc::clone(&backend)),
            project: SelectionCell::new(Arc::clone(&backend), SESSION_PROJECT_KEY),
            sprint: SelectionCell::new(backend, SESSION_SPRINT_KEY),
        }
    }

    /// The identity session
    pub fn identity(&self) -> &IdentitySession {
        &self.identity
    }

    /// The persisted project selection
    pub fn project_selection(&self) -> &SelectionCell<Project> {
        &self.project
    }

    /// The persisted sprint selection
    pub fn sprint_selection(&self) -> &SelectionCell<Sprint> {
        &self.sprint
    }

    /// End the session: clear identity and both selections in one operation
    ///
    /// Leaving any one of the three populated would expose a stale
    /// authorization context to the next user of the same session scope.
    pub fn end_session(&self) {
        tracing::info!("Ending session");
        self.identity.logout();
        self.project.clear();
        self.sprint.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryBackend;
    use backlog_core::{AccountId, ProjectId, SprintId, TokenPair, UserId, UserRecord};

    fn context() -> SessionContext {
        SessionContext::new(Arc::new(MemoryBackend::new()))
    }

    fn sample_user() -> UserRecord {
        UserRecord {
            token: "app-jwt".into(),
            cerberus_token_pair: TokenPair::new("at", "rt"),
            id: UserId::new("u-1"),
            account_id: AccountId::new("a-1"),
            name: "Alice".into(),
            email: "alice@example.com".into(),
        }
    }

    fn sample_project() -> Project {
        Project {
            id: ProjectId::new("p-1"),
            account_id: AccountId::new("a-1"),
            name: "Apollo".into(),
            description: String::new(),
        }
    }

    fn sample_sprint() -> Sprint {
        Sprint {
            id: SprintId::new("sp-1"),
            project_id: ProjectId::new("p-1"),
            sprint_number: 1,
            goal: "walk".into(),
            start_date: 0,
            end_date: 0,
        }
    }

    #[test]
    fn test_end_session_clears_all_three_cells() {
        let ctx = context();
        ctx.identity().login(sample_user());
        ctx.project_selection().select(sample_project());
        ctx.sprint_selection().select(sample_sprint());

        ctx.end_session();

        assert!(!ctx.identity().is_authenticated());
        assert!(ctx.project_selection().selected().is_none());
        assert!(ctx.sprint_selection().selected().is_none());
    }

    #[test]
    fn test_end_session_on_empty_session_is_noop() {
        let ctx = context();
        ctx.end_session();
        assert!(!ctx.identity().is_authenticated());
    }

    #[test]
    fn test_selecting_project_keeps_sprint_selection() {
        // Source behavior: a project change does not invalidate the
        // persisted sprint selection.
        let ctx = context();
        ctx.sprint_selection().select(sample_sprint());
        ctx.project_selection().select(sample_project());
        assert!(ctx.sprint_selection().selected().is_some());
    }

    #[test]
    fn test_selections_survive_reload_until_logout() {
        let backend: Arc<dyn crate::store::SessionBackend> = Arc::new(MemoryBackend::new());
        let first = SessionContext::new(Arc::clone(&backend));
        first.identity().login(sample_user());
        first.project_selection().select(sample_project());

        let reloaded = SessionContext::new(Arc::clone(&backend));
        assert!(reloaded.identity().is_authenticated());
        assert!(reloaded.project_selection().selected().is_some());

        reloaded.end_session();
        let after_logout = SessionContext::new(backend);
        assert!(!after_logout.identity().is_authenticated());
        assert!(after_logout.project_selection().selected().is_none());
    }
}
