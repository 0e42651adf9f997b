//! Resource selection cells
//!
//! At most one resource of each kind is "selected" at a time. Selecting the
//! already-selected resource deselects it. Project and sprint selections
//! persist for the session; story selection is transient view state.
//!
//! Selecting a new project does not clear the persisted sprint selection.
//! If sprint identifiers were reused across projects a stale selection
//! could leak into the new project's view; the dependent fetch then fails
//! and the view falls back to its empty state.

use crate::store::{SessionBackend, SessionCell};
use backlog_core::{Project, Sprint, Story, UserRecord};
use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// Storage key for the persisted project selection
pub const SESSION_PROJECT_KEY: &str = "session-project";

/// Storage key for the persisted sprint selection
pub const SESSION_SPRINT_KEY: &str = "session-sprint";

/// A resource that can occupy a selection cell
pub trait Selectable {
    /// Stable identifier the toggle rule compares on
    fn selectable_id(&self) -> &str;
}

impl Selectable for Project {
    fn selectable_id(&self) -> &str {
        self.id.as_str()
    }
}

impl Selectable for Sprint {
    fn selectable_id(&self) -> &str {
        self.id.as_str()
    }
}

impl Selectable for Story {
    fn selectable_id(&self) -> &str {
        self.id.as_str()
    }
}

impl Selectable for UserRecord {
    fn selectable_id(&self) -> &str {
        self.id.as_str()
    }
}

/// Persisted "currently chosen resource" slot with toggle semantics
#[derive(Debug, Clone)]
pub struct SelectionCell<T> {
    cell: SessionCell<T>,
}

impl<T: Selectable + Serialize + DeserializeOwned> SelectionCell<T> {
    /// Create a selection cell persisted under `key`
    pub fn new(backend: Arc<dyn SessionBackend>, key: impl Into<String>) -> Self {
        Self {
            cell: SessionCell::new(backend, key),
        }
    }

    /// Toggle-select: same id deselects, anything else replaces
    pub fn select(&self, candidate: T) {
        match self.cell.get() {
            Some(current) if current.selectable_id() == candidate.selectable_id() => {
                tracing::debug!(key = %self.cell.key(), id = %candidate.selectable_id(), "Deselected");
                self.cell.clear();
            }
            _ => {
                tracing::debug!(key = %self.cell.key(), id = %candidate.selectable_id(), "Selected");
                self.cell.set(&candidate);
            }
        }
    }

    /// The currently selected resource, if any
    pub fn selected(&self) -> Option<T> {
        self.cell.get()
    }

    /// True iff the resource with `id` is currently selected
    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected()
            .map(|current| current.selectable_id() == id)
            .unwrap_or(false)
    }

    /// Clear the selection (logout cascade)
    pub fn clear(&self) {
        self.cell.clear();
    }
}

/// Memory-only selection slot with the same toggle rule
///
/// Used for story selection inside the story list view: local, transient,
/// lost on navigation away.
#[derive(Debug, Default)]
pub struct TransientSelection<T> {
    slot: RwLock<Option<T>>,
}

impl<T: Selectable + Clone> TransientSelection<T> {
    /// Create an empty transient selection
    pub fn new() -> Self {
        Self {
            slot: RwLock::new(None),
        }
    }

    /// Toggle-select: same id deselects, anything else replaces
    pub fn select(&self, candidate: T) {
        let mut slot = self.slot.write();
        match slot.as_ref() {
            Some(current) if current.selectable_id() == candidate.selectable_id() => *slot = None,
            _ => *slot = Some(candidate),
        }
    }

    /// The currently selected resource, if any
    pub fn selected(&self) -> Option<T> {
        self.slot.read().clone()
    }

    /// Clear the selection
    pub fn clear(&self) {
        *self.slot.write() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryBackend;
    use backlog_core::{AccountId, ProjectId};
    use proptest::prelude::*;

    fn project(id: &str) -> Project {
        Project {
            id: ProjectId::new(id),
            account_id: AccountId::new("a-1"),
            name: format!("project {id}"),
            description: String::new(),
        }
    }

    fn cell() -> SelectionCell<Project> {
        SelectionCell::new(Arc::new(MemoryBackend::new()), SESSION_PROJECT_KEY)
    }

    #[test]
    fn test_select_then_reselect_toggles_off() {
        let cell = cell();
        cell.select(project("p-1"));
        assert!(cell.is_selected("p-1"));
        cell.select(project("p-1"));
        assert!(cell.selected().is_none());
    }

    #[test]
    fn test_selecting_other_replaces() {
        let cell = cell();
        cell.select(project("p-1"));
        cell.select(project("p-2"));
        assert!(cell.is_selected("p-2"));
        assert!(!cell.is_selected("p-1"));
    }

    #[test]
    fn test_double_select_is_idempotent_from_empty() {
        let cell = cell();
        cell.select(project("p-1"));
        cell.select(project("p-1"));
        assert!(cell.selected().is_none());
        cell.select(project("p-1"));
        assert!(cell.is_selected("p-1"));
    }

    #[test]
    fn test_double_select_of_other_ends_empty() {
        // Replacing p-1 with p-2 and toggling p-2 off leaves nothing
        // selected; the earlier selection is not restored.
        let cell = cell();
        cell.select(project("p-1"));
        cell.select(project("p-2"));
        cell.select(project("p-2"));
        assert!(cell.selected().is_none());
    }

    #[test]
    fn test_transient_selection_same_toggle_rule() {
        let stories = TransientSelection::new();
        stories.select(project("p-1"));
        stories.select(project("p-1"));
        assert!(stories.selected().is_none());
        stories.select(project("p-2"));
        assert_eq!(
            stories.selected().map(|p| p.id),
            Some(ProjectId::new("p-2"))
        );
    }

    proptest! {
        /// After any sequence of selects the cell holds at most one value,
        /// and it matches a reference fold of the toggle rule.
        #[test]
        fn prop_at_most_one_selected(ids in proptest::collection::vec(0u8..4, 1..24)) {
            let cell = cell();
            let mut expected: Option<String> = None;
            for n in ids {
                let id = format!("p-{n}");
                if expected.as_deref() == Some(id.as_str()) {
                    expected = None;
                } else {
                    expected = Some(id.clone());
                }
                cell.select(project(&id));
            }
            prop_assert_eq!(
                cell.selected().map(|p| p.id.as_str().to_string()),
                expected
            );
        }
    }
}
