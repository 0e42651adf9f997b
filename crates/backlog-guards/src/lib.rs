//! # Backlog Guards - Permission Gate Protocol
//!
//! **Purpose**: Decide what the view layer may render or enable, from two
//! primitives:
//!
//! - a synchronous authentication gate, a pure function of identity
//!   presence, and
//! - an asynchronous resource/action check against the remote permission
//!   authority, fail-closed by default.
//!
//! ## Fail-closed contract
//!
//! A gated element reads as denied until a check resolves `true` for the
//! current `(resource, action, identity)`. Pending checks, query errors,
//! and unauthenticated subjects all render as denied; an unauthenticated
//! subject is denied without a query ever leaving the process.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod access;
pub mod authority;
pub mod gate;
pub mod guard;

pub use access::{AccessCheck, AccessState};
pub use authority::PermissionAuthority;
pub use gate::{AuthGate, GateOutcome};
pub use guard::{AccessGuard, GuardDecision};
