//! # Backlog Client - Authenticated Request Client
//!
//! **Purpose**: Build outbound requests carrying the dual credential set,
//! unwrap the service's success envelope, and expose a uniform
//! loading/error contract to callers.
//!
//! ## Core Concepts
//!
//! - **Transport seam**: `HttpTransport` executes an assembled request;
//!   production uses reqwest, tests use an in-process mock.
//! - **Dual credentials**: when a user is authenticated every request
//!   carries the application bearer token plus the permission-service
//!   access/refresh token pair. No user, no credential headers.
//! - **Envelope**: success bodies are `{"data": <payload>}`. A parsed body
//!   without `data` is the service's rejection and is surfaced verbatim.
//! - **Loading flag**: one boolean per client instance, true strictly for
//!   the duration of a call.
//! - **Typed API**: thin functions over the client for every service
//!   resource (auth, projects, sprints, stories, users).
//!
//! No retry, no timeout, no request cancellation: each call is
//! fire-and-resolve-once.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod client;
pub mod envelope;
pub mod error;
pub mod testing;
pub mod transport;

pub use client::{
    ApiClient, AUTHORIZATION_HEADER, CERBERUS_ACCESS_HEADER, CERBERUS_REFRESH_HEADER,
    CONTENT_TYPE_HEADER,
};
pub use envelope::{decode, unwrap_envelope};
pub use error::{ClientError, Result};
pub use transport::{HttpRequest, HttpTransport, Method, ReqwestTransport};
