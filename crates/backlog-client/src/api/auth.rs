//! Login and register
//!
//! Both send a one-time `Authorization: Basic` credential; no session
//! tokens exist yet. The response is the composite credential record the
//! identity session stores.

use crate::client::{ApiClient, AUTHORIZATION_HEADER};
use crate::envelope::decode;
use crate::error::Result;
use backlog_core::UserRecord;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde_json::json;

fn basic_credential(email: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{email}:{password}")))
}

/// Authenticate and return the user record with both token sets
pub async fn login(client: &ApiClient, email: &str, password: &str) -> Result<UserRecord> {
    let basic = basic_credential(email, password);
    let payload = client
        .post(
            "auth/login",
            json!({ "email": email, "password": password }),
            &[(AUTHORIZATION_HEADER, basic.as_str())],
        )
        .await?;
    decode(payload)
}

/// Register a new account and its first user
pub async fn register(
    client: &ApiClient,
    name: &str,
    email: &str,
    password: &str,
) -> Result<UserRecord> {
    let basic = basic_credential(email, password);
    let payload = client
        .post(
            "auth/register",
            json!({ "name": name, "email": email, "password": password }),
            &[(AUTHORIZATION_HEADER, basic.as_str())],
        )
        .await?;
    decode(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockTransport;
    use backlog_session::{IdentitySession, MemoryBackend};
    use serde_json::json;
    use std::sync::Arc;

    fn auth_client(transport: Arc<MockTransport>) -> ApiClient {
        ApiClient::new(
            "/",
            transport,
            IdentitySession::new(Arc::new(MemoryBackend::new())),
        )
    }

    #[tokio::test]
    async fn test_login_sends_basic_credential_and_decodes_user() {
        let transport = Arc::new(MockTransport::new());
        transport.push_data(json!({
            "token": "app-jwt",
            "cerberusTokenPair": {"accessToken": "at", "refreshToken": "rt"},
            "id": "u-1",
            "accountId": "a-1",
            "name": "Alice",
            "email": "alice@example.com"
        }));
        let client = auth_client(Arc::clone(&transport));

        let user = login(&client, "alice@example.com", "hunter2").await.unwrap();
        assert_eq!(user.name, "Alice");

        let sent = transport.requests();
        assert_eq!(sent[0].url, "/auth/login");
        // base64("alice@example.com:hunter2")
        assert_eq!(
            sent[0].header(AUTHORIZATION_HEADER),
            Some("Basic YWxpY2VAZXhhbXBsZS5jb206aHVudGVyMg==")
        );
        assert_eq!(sent[0].header("CerberusAccessToken"), None);
    }

    #[tokio::test]
    async fn test_login_rejection_surfaces_body() {
        let transport = Arc::new(MockTransport::new());
        transport.push_body(r#"{"code": 400, "message": "invalid credentials"}"#.to_string());
        let client = auth_client(Arc::clone(&transport));

        let err = login(&client, "alice@example.com", "wrong").await.unwrap_err();
        assert_eq!(
            err.rejection_body().and_then(|b| b.get("message")),
            Some(&json!("invalid credentials"))
        );
    }

    #[tokio::test]
    async fn test_register_posts_name_email_password() {
        let transport = Arc::new(MockTransport::new());
        transport.push_data(json!({
            "token": "t",
            "cerberusTokenPair": {"accessToken": "", "refreshToken": ""},
            "id": "u-2",
            "accountId": "a-2",
            "name": "Bob",
            "email": "bob@example.com"
        }));
        let client = auth_client(Arc::clone(&transport));

        register(&client, "Bob", "bob@example.com", "pw").await.unwrap();

        let sent = transport.requests();
        assert_eq!(sent[0].url, "/auth/register");
        let body: serde_json::Value =
            serde_json::from_str(sent[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!({"name": "Bob", "email": "bob@example.com", "password": "pw"}));
    }
}
