//! # Backlog Core - Foundation Crate
//!
//! **Purpose**: Define the identifier types, domain records, and the unified
//! error type shared by every crate in the Backlog client core.
//!
//! This crate is pure data: no I/O, no async, no session state.
//!
//! ## Core Concepts
//!
//! - **Typed identifiers**: accounts, users, projects, sprints, and stories
//!   each get their own newtype so a sprint id cannot be passed where a
//!   project id is expected.
//! - **Domain records**: the wire shapes served by the Backlog service,
//!   including the composite credential delivered by a successful login.
//! - **Unified errors**: a single `BacklogError` with constructor helpers.
//!
//! ## What's NOT in this crate
//!
//! - Session persistence (belongs in `backlog-session`)
//! - Request dispatch and envelope handling (belongs in `backlog-client`)
//! - Permission gating (belongs in `backlog-guards`)

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod errors;
pub mod identifiers;
pub mod records;

pub use errors::{BacklogError, Result};
pub use identifiers::{AccountId, ProjectId, SprintId, StoryId, UserId};
pub use records::{
    AccountUser, Project, Role, Sprint, Story, StoryStatus, TokenPair, UserRecord,
};
