//! Typed API surface over the request client
//!
//! Thin functions, one per service operation. Paths are relative to the
//! client's base address: resource operations expect a client based at
//! `/api/`, the auth operations a client based at `/` (no session exists
//! yet when they run).

pub mod auth;
pub mod projects;
pub mod sprints;
pub mod stories;
pub mod users;
