//! Domain records served by the Backlog service
//!
//! Wire shapes use camelCase field names. `UserRecord` is the composite
//! credential: the application bearer token and the permission-service
//! token pair arrive together in the login response and are stored
//! together, so one can never be present without the other.

use crate::identifiers::{AccountId, ProjectId, SprintId, StoryId, UserId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Permission-service token pair issued alongside the application token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    /// Short-lived access token presented on every permission query
    pub access_token: String,
    /// Refresh token the permission service uses to renew access
    pub refresh_token: String,
}

impl TokenPair {
    /// Create a token pair
    pub fn new(access_token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
        }
    }
}

/// Authenticated user as delivered by the login/register response
///
/// Immutable once stored; replaced wholesale on re-login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Application bearer token
    pub token: String,
    /// Embedded permission-service token pair
    pub cerberus_token_pair: TokenPair,
    /// User identifier
    pub id: UserId,
    /// Account (tenant) the user belongs to
    pub account_id: AccountId,
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
}

/// Project within an account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Project identifier
    pub id: ProjectId,
    /// Owning account
    pub account_id: AccountId,
    /// Project name
    pub name: String,
    /// Free-form description
    pub description: String,
}

/// Sprint within a project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sprint {
    /// Sprint identifier
    pub id: SprintId,
    /// Owning project
    pub project_id: ProjectId,
    /// Ordinal within the project
    pub sprint_number: u32,
    /// Sprint goal
    pub goal: String,
    /// Start timestamp (unix seconds, 0 until started)
    pub start_date: i64,
    /// End timestamp (unix seconds, 0 until ended)
    pub end_date: i64,
}

/// Story workflow status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoryStatus {
    /// Not started
    #[default]
    Todo,
    /// In progress
    Busy,
    /// Completed
    Done,
}

impl StoryStatus {
    /// Wire name of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::Busy => "busy",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for StoryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Story within a sprint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    /// Story identifier
    pub id: StoryId,
    /// Owning sprint. The service serializes this field under `projectId`.
    #[serde(rename = "projectId")]
    pub sprint_id: SprintId,
    /// Story points, 0 until estimated
    pub estimation: u32,
    /// Story description
    pub description: String,
    /// Workflow status
    pub status: StoryStatus,
    /// Assigned user id, empty until assigned
    pub assignee: String,
}

/// Directory entry from the account user listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountUser {
    /// User identifier
    pub id: UserId,
    /// Email address
    pub email: String,
    /// Display name
    pub name: String,
}

/// Role as listed by the permission authority
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    /// Role identifier
    pub id: String,
    /// Role name
    pub name: String,
}
