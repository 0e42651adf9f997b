//! Sprint operations

use crate::client::ApiClient;
use crate::envelope::decode;
use crate::error::Result;
use backlog_core::{ProjectId, Sprint, SprintId};
use serde_json::json;

/// List the sprints of a project
pub async fn for_project(client: &ApiClient, project_id: &ProjectId) -> Result<Vec<Sprint>> {
    let payload = client
        .get(&format!("projects/{project_id}/sprints"), &[])
        .await?;
    decode(payload)
}

/// Fetch one sprint
pub async fn get(client: &ApiClient, id: &SprintId) -> Result<Sprint> {
    let payload = client.get(&format!("sprints/{id}"), &[]).await?;
    decode(payload)
}

/// Create a sprint with a goal; the service assigns the sprint number
pub async fn create(client: &ApiClient, project_id: &ProjectId, goal: &str) -> Result<Sprint> {
    let payload = client
        .post(
            &format!("projects/{project_id}/sprints"),
            json!({ "goal": goal }),
            &[],
        )
        .await?;
    decode(payload)
}

/// Start a sprint; returns it with the start date set
pub async fn start(client: &ApiClient, id: &SprintId) -> Result<Sprint> {
    let payload = client
        .post(&format!("sprints/{id}/start"), json!({}), &[])
        .await?;
    decode(payload)
}

/// End a sprint; returns it with the end date set
pub async fn end(client: &ApiClient, id: &SprintId) -> Result<Sprint> {
    let payload = client
        .post(&format!("sprints/{id}/end"), json!({}), &[])
        .await?;
    decode(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockTransport;
    use crate::transport::Method;
    use backlog_session::{IdentitySession, MemoryBackend};
    use serde_json::json;
    use std::sync::Arc;

    fn client(transport: Arc<MockTransport>) -> ApiClient {
        ApiClient::new(
            "/api/",
            transport,
            IdentitySession::new(Arc::new(MemoryBackend::new())),
        )
    }

    fn sprint_json(id: &str) -> serde_json::Value {
        json!({
            "id": id,
            "projectId": "p-1",
            "sprintNumber": 3,
            "goal": "ship it",
            "startDate": 0,
            "endDate": 0
        })
    }

    #[tokio::test]
    async fn test_for_project_path() {
        let transport = Arc::new(MockTransport::new());
        transport.push_data(json!([sprint_json("sp-1")]));
        let client = client(Arc::clone(&transport));

        let sprints = for_project(&client, &ProjectId::new("p-1")).await.unwrap();
        assert_eq!(sprints[0].sprint_number, 3);
        assert_eq!(transport.requests()[0].url, "/api/projects/p-1/sprints");
    }

    #[tokio::test]
    async fn test_create_posts_goal() {
        let transport = Arc::new(MockTransport::new());
        transport.push_data(sprint_json("sp-2"));
        let client = client(Arc::clone(&transport));

        create(&client, &ProjectId::new("p-1"), "ship it").await.unwrap();

        let sent = &transport.requests()[0];
        let body: serde_json::Value = serde_json::from_str(sent.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!({"goal": "ship it"}));
    }

    #[tokio::test]
    async fn test_start_and_end_are_posts() {
        let transport = Arc::new(MockTransport::new());
        transport.push_data(sprint_json("sp-1"));
        transport.push_data(sprint_json("sp-1"));
        let client = client(Arc::clone(&transport));

        start(&client, &SprintId::new("sp-1")).await.unwrap();
        end(&client, &SprintId::new("sp-1")).await.unwrap();

        let sent = transport.requests();
        assert_eq!(sent[0].url, "/api/sprints/sp-1/start");
        assert_eq!(sent[1].url, "/api/sprints/sp-1/end");
        assert!(sent.iter().all(|r| r.method == Method::Post));
    }
}
