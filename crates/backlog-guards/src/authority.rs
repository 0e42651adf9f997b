//! Permission authority client
//!
//! The external authority answers "can the current subject perform action
//! A on resource R". Queries ride on an [`ApiClient`] pointed at the
//! authority's base address, so they carry the permission-service token
//! pair exactly like primary-API requests carry it.

use backlog_client::{decode, ApiClient, Result};
use backlog_core::Role;
use serde_json::json;

/// Client for the remote permission authority
#[derive(Debug, Clone)]
pub struct PermissionAuthority {
    client: ApiClient,
}

impl PermissionAuthority {
    /// Wrap a client based at the authority's API address
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Ask whether the current subject may perform `action` on the resource
    ///
    /// A plain boolean outcome: `false` is a normal answer, not an error.
    pub async fn has_access(&self, resource_id: &str, action: &str) -> Result<bool> {
        let payload = self
            .client
            .post(
                "access",
                json!({ "resourceId": resource_id, "action": action }),
                &[],
            )
            .await?;
        decode(payload)
    }

    /// List the roles defined for the account (settings tooling)
    pub async fn roles(&self) -> Result<Vec<Role>> {
        let payload = self.client.get("roles", &[]).await?;
        decode(payload)
    }
}
