//! Story operations

use crate::client::ApiClient;
use crate::envelope::decode;
use crate::error::Result;
use backlog_core::{SprintId, Story, StoryId, StoryStatus, UserId};
use serde_json::json;

/// List the stories of a sprint
pub async fn for_sprint(client: &ApiClient, sprint_id: &SprintId) -> Result<Vec<Story>> {
    let payload = client
        .get(&format!("sprints/{sprint_id}/stories"), &[])
        .await?;
    decode(payload)
}

/// Fetch one story
pub async fn get(client: &ApiClient, id: &StoryId) -> Result<Story> {
    let payload = client.get(&format!("stories/{id}"), &[]).await?;
    decode(payload)
}

/// Create a story in a sprint
pub async fn create(client: &ApiClient, sprint_id: &SprintId, description: &str) -> Result<Story> {
    let payload = client
        .post(
            &format!("sprints/{sprint_id}/stories"),
            json!({ "description": description }),
            &[],
        )
        .await?;
    decode(payload)
}

/// Estimate a story. The service expects the points as a JSON string.
pub async fn estimate(client: &ApiClient, id: &StoryId, points: u32) -> Result<Story> {
    let payload = client
        .post(
            &format!("stories/{id}/estimate"),
            json!({ "estimation": points.to_string() }),
            &[],
        )
        .await?;
    decode(payload)
}

/// Move a story to a new workflow status
pub async fn set_status(client: &ApiClient, id: &StoryId, status: StoryStatus) -> Result<Story> {
    let payload = client
        .post(
            &format!("stories/{id}/status"),
            json!({ "status": status.as_str() }),
            &[],
        )
        .await?;
    decode(payload)
}

/// Assign a story to a user
pub async fn assign(client: &ApiClient, id: &StoryId, user_id: &UserId) -> Result<Story> {
    let payload = client
        .post(
            &format!("stories/{id}/assign"),
            json!({ "userId": user_id }),
            &[],
        )
        .await?;
    decode(payload)
}
