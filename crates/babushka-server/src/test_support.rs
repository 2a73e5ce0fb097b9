//! Shared test fixtures: a stub advisor, state builders, and body helpers.

use std::sync::Arc;

use async_trait::async_trait;
use http_body_util::BodyExt;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::Serialize;

use babushka::domain::{AdvisorError, AdvisorProfile};
use babushka::ports::AdviceProvider;
use babushka::services::memory::InMemoryConversationStore;

use crate::AppState;

/// Canned advisor behaviors for exercising the handler error mapping
pub enum StubAdvisor {
    Advice(&'static str),
    AuthFailed,
    RateLimited,
    Upstream,
    Transport,
}

#[async_trait]
impl AdviceProvider for StubAdvisor {
    async fn generate(&self, _prompt: &str) -> Result<String, AdvisorError> {
        match self {
            StubAdvisor::Advice(text) => Ok(text.to_string()),
            StubAdvisor::AuthFailed => Err(AdvisorError::AuthFailed),
            StubAdvisor::RateLimited => Err(AdvisorError::RateLimited),
            StubAdvisor::Upstream => Err(AdvisorError::api(500, "Overloaded")),
            StubAdvisor::Transport => Err(AdvisorError::Request("connection reset".to_string())),
        }
    }
}

fn state(advisor: StubAdvisor, jwt_secret: Option<String>) -> (AppState, Arc<InMemoryConversationStore>) {
    let store = Arc::new(InMemoryConversationStore::new());
    let state = AppState {
        advisor: Arc::new(advisor),
        store: store.clone(),
        profile: Arc::new(AdvisorProfile::default()),
        jwt_secret,
    };
    (state, store)
}

/// State with identity resolution enabled
pub fn authed_state(advisor: StubAdvisor) -> (AppState, Arc<InMemoryConversationStore>) {
    state(advisor, Some("test-secret".to_string()))
}

/// State with no JWT secret configured (identity resolution disabled)
pub fn anonymous_state(advisor: StubAdvisor) -> (AppState, Arc<InMemoryConversationStore>) {
    state(advisor, None)
}

#[derive(Serialize)]
struct TestClaims {
    sub: String,
}

/// A JWT for `sub`, signed with a key unrelated to the configured secret.
/// Resolution accepts it anyway because signatures are not verified.
pub fn bearer_token(sub: &str) -> String {
    encode(
        &Header::default(),
        &TestClaims {
            sub: sub.to_string(),
        },
        &EncodingKey::from_secret(b"unrelated-test-key"),
    )
    .unwrap()
}

/// Collect a response body as JSON
pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
