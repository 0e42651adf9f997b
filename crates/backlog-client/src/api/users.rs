//! Account user directory operations

use crate::client::ApiClient;
use crate::envelope::decode;
use crate::error::Result;
use backlog_core::AccountUser;
use serde_json::json;

/// List the users of the current account
pub async fn all(client: &ApiClient) -> Result<Vec<AccountUser>> {
    let payload = client.get("users", &[]).await?;
    decode(payload)
}

/// Add a user to the current account
pub async fn add(
    client: &ApiClient,
    email: &str,
    password: &str,
    name: &str,
) -> Result<AccountUser> {
    let payload = client
        .post(
            "users",
            json!({ "email": email, "password": password, "name": name }),
            &[],
        )
        .await?;
    decode(payload)
}
