//! # Backlog App - Headless Application Core
//!
//! **Purpose**: Compose the session, client, and guard layers into one
//! portable application core a host shell (web view, terminal, test
//! harness) drives through workflows.
//!
//! ## Core Concepts
//!
//! - **Config**: the addresses of the primary API, the auth endpoints, and
//!   the permission authority, with file and environment overrides.
//! - **App context**: the composition root. One session context, one
//!   primary API client, one auth client, one permission authority, all
//!   sharing the same identity session.
//! - **Workflows**: login, register, and logout as single entry points, so
//!   no host shell re-implements the credential or cascade sequence.
//!
//! The core is headless: it renders nothing and owns no event loop.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod context;
pub mod telemetry;

pub use config::AppConfig;
pub use context::AppContext;
pub use telemetry::init_tracing;
