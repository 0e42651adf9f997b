//! Project operations

use crate::client::ApiClient;
use crate::envelope::decode;
use crate::error::Result;
use backlog_core::{AccountId, Project, ProjectId};
use serde_json::json;

/// List the projects visible in an account
pub async fn for_account(client: &ApiClient, account_id: &AccountId) -> Result<Vec<Project>> {
    let payload = client
        .get(&format!("accounts/{account_id}/projects"), &[])
        .await?;
    decode(payload)
}

/// Fetch one project
pub async fn get(client: &ApiClient, id: &ProjectId) -> Result<Project> {
    let payload = client.get(&format!("projects/{id}"), &[]).await?;
    decode(payload)
}

/// Create a project in an account
pub async fn create(
    client: &ApiClient,
    account_id: &AccountId,
    name: &str,
    description: &str,
) -> Result<Project> {
    let payload = client
        .post(
            &format!("accounts/{account_id}/projects"),
            json!({ "name": name, "description": description }),
            &[],
        )
        .await?;
    decode(payload)
}

/// Delete a project
pub async fn delete(client: &ApiClient, id: &ProjectId) -> Result<bool> {
    let payload = client.del(&format!("projects/{id}"), &[]).await?;
    decode(payload)
}
