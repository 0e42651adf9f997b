//! # Backlog Session - Session-Scoped State
//!
//! **Purpose**: Own every piece of state that lives for one browser-session
//! equivalent: the authenticated identity, the persisted resource
//! selections, and the logout cascade that clears them together.
//!
//! ## Core Concepts
//!
//! - **Session store**: a key-scoped storage cell that survives reloads
//!   within one session and is explicitly clearable.
//! - **Identity session**: the logged-in user record plus the embedded
//!   permission-service token pair, set and cleared atomically.
//! - **Selection cells**: one persisted "currently chosen resource" slot
//!   per resource kind, with toggle semantics.
//! - **Session context**: the composition root that owns the list of cells
//!   participating in the logout cascade. Ending the session always clears
//!   identity, project selection, and sprint selection in one operation;
//!   no call site carries that list.
//!
//! ## What's NOT in this crate
//!
//! - Network calls (belong in `backlog-client`)
//! - Permission decisions (belong in `backlog-guards`)

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod context;
pub mod identity;
pub mod selection;
pub mod store;

pub use context::SessionContext;
pub use identity::{IdentitySession, SESSION_USER_KEY};
pub use selection::{
    Selectable, SelectionCell, TransientSelection, SESSION_PROJECT_KEY, SESSION_SPRINT_KEY,
};
pub use store::{MemoryBackend, SessionBackend, SessionCell};
