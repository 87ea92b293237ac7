//! Integration tests for the update flow against a mock transport.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{Value, json};

use ghmodel::{ModelError, Session, Transport, User, from_value};

/// Records every update call and replies with a canned response.
struct MockTransport {
    calls: Mutex<Vec<(String, Value)>>,
    response: Value,
}

impl MockTransport {
    fn replying_with(response: Value) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            response,
        })
    }

    fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().expect("mock lock poisoned").clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn update(&self, endpoint: &str, payload: Value) -> Result<Value, ModelError> {
        self.calls
            .lock()
            .expect("mock lock poisoned")
            .push((endpoint.to_string(), payload));
        Ok(self.response.clone())
    }
}

/// Always fails, as a transport with a dead connection would.
struct FailingTransport;

#[async_trait]
impl Transport for FailingTransport {
    async fn update(&self, _endpoint: &str, _payload: Value) -> Result<Value, ModelError> {
        Err(ModelError::transport("connection refused"))
    }
}

fn attached_user(session: Session) -> User {
    let raw = json!({
        "login": "octocat",
        "id": 1,
        "name": "The Octocat",
        "email": "octocat@github.com",
        "hireable": true,
        "created_at": "2008-01-14T04:33:35Z"
    });
    from_value(raw.as_object().unwrap(), Some(session)).expect("valid fixture")
}

#[tokio::test]
async fn test_update_submits_writable_payload() {
    let mock = MockTransport::replying_with(json!({
        "login": "octocat",
        "id": 1,
        "name": "The Octocat",
        "email": "octocat@github.com",
        "hireable": true
    }));
    let user = attached_user(mock.clone());

    let updated = user.update().await.unwrap();

    let calls = mock.calls();
    assert_eq!(calls.len(), 1);
    let (endpoint, payload) = &calls[0];
    assert_eq!(endpoint, "/user");

    let payload = payload.as_object().unwrap();
    assert_eq!(payload.get("name"), Some(&json!("The Octocat")));
    assert_eq!(payload.get("email"), Some(&json!("octocat@github.com")));
    assert_eq!(payload.get("hireable"), Some(&json!(true)));
    assert!(!payload.contains_key("id"));
    assert!(!payload.contains_key("login"));
    assert!(!payload.contains_key("created_at"));

    assert_eq!(updated.name.as_deref(), Some("The Octocat"));
    assert_eq!(updated.id, Some(1));
}

#[tokio::test]
async fn test_update_response_keeps_session_attached() {
    let mock = MockTransport::replying_with(json!({"login": "octocat", "name": "Renamed"}));
    let user = attached_user(mock.clone());

    let updated = user.update().await.unwrap();
    assert!(updated.is_attached());

    // The refreshed instance can submit again through the same handle.
    updated.update().await.unwrap();
    assert_eq!(mock.calls().len(), 2);
}

#[tokio::test]
async fn test_update_forwards_transport_failure() {
    let user = attached_user(Arc::new(FailingTransport));

    let err = user.update().await.unwrap_err();
    match err {
        ModelError::Transport { message } => assert!(message.contains("connection refused")),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_update_rejects_malformed_response() {
    let mock = MockTransport::replying_with(json!({"id": "not-a-number"}));
    let user = attached_user(mock);

    let err = user.update().await.unwrap_err();
    assert!(err.is_schema_mismatch());
}

#[tokio::test]
async fn test_detached_user_cannot_update() {
    let raw = json!({"login": "octocat"});
    let user: User = from_value(raw.as_object().unwrap(), None).unwrap();
    assert!(!user.is_attached());

    let err = user.update().await.unwrap_err();
    assert!(matches!(err, ModelError::NoSession));
}
