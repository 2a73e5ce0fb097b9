//! Anthropic Advisor Client
//!
//! Sends the rendered prompt to the Anthropic Messages API and returns the
//! generated text. One outbound call per invocation: no retry, no caching,
//! and no client-side timeout (the process waits on a hung upstream unless
//! the hosting server enforces one).

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::domain::errors::AdvisorError;
use crate::ports::AdviceProvider;

const API_URL: &str = "https://api.anthropic.com/v1/messages";
const API_VERSION: &str = "2023-06-01";
const DEFAULT_MODEL: &str = "claude-3-5-haiku-20241022";
const DEFAULT_MAX_TOKENS: u32 = 300;

/// Messages API client implementing [`AdviceProvider`]
#[derive(Clone)]
pub struct AnthropicAdvisor {
    client: Client,
    api_key: String,
    model: String,
    max_tokens: u32,
}

impl AnthropicAdvisor {
    /// Creates a new advisor using the provided API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    /// Overrides the model identifier if needed.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Overrides the maximum output length.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

#[async_trait]
impl AdviceProvider for AnthropicAdvisor {
    async fn generate(&self, prompt: &str) -> Result<String, AdvisorError> {
        let request = MessagesRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            messages: vec![RequestMessage {
                role: "user",
                content: prompt,
            }],
        };

        tracing::debug!(model = %self.model, "Calling Anthropic Messages API");

        let response = self
            .client
            .post(API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&request)
            .send()
            .await
            .map_err(|err| AdvisorError::Request(err.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(map_http_error(status, body));
        }

        let payload: MessagesResponse = response
            .json()
            .await
            .map_err(|err| AdvisorError::InvalidResponse(err.to_string()))?;

        extract_text(&payload)
            .ok_or_else(|| AdvisorError::InvalidResponse("no text content in response".to_string()))
    }
}

// ============================================
// Request/Response Types
// ============================================

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<RequestMessage<'a>>,
}

#[derive(Serialize)]
struct RequestMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

// ============================================
// Helper Functions
// ============================================

/// Map a non-success upstream status to the advisor error taxonomy,
/// pulling the message from the Anthropic error body when parseable.
fn map_http_error(status: StatusCode, body: String) -> AdvisorError {
    match status {
        StatusCode::UNAUTHORIZED => AdvisorError::AuthFailed,
        StatusCode::TOO_MANY_REQUESTS => AdvisorError::RateLimited,
        _ => {
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|parsed| parsed.error.message)
                .unwrap_or(body);
            AdvisorError::api(status.as_u16(), message)
        }
    }
}

/// Concatenate the text content blocks of a Messages API response.
fn extract_text(response: &MessagesResponse) -> Option<String> {
    let collected: Vec<&str> = response
        .content
        .iter()
        .filter(|block| block.kind == "text")
        .filter_map(|block| block.text.as_deref())
        .collect();

    if collected.is_empty() {
        None
    } else {
        Some(collected.join(""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_401_maps_to_auth_failed() {
        let err = map_http_error(StatusCode::UNAUTHORIZED, "{}".to_string());
        assert!(matches!(err, AdvisorError::AuthFailed));
    }

    #[test]
    fn test_429_maps_to_rate_limited() {
        let err = map_http_error(StatusCode::TOO_MANY_REQUESTS, "{}".to_string());
        assert!(matches!(err, AdvisorError::RateLimited));
    }

    #[test]
    fn test_other_status_maps_to_api_error_with_parsed_message() {
        let body = json!({"type": "error", "error": {"type": "overloaded_error", "message": "Overloaded"}});
        let err = map_http_error(StatusCode::INTERNAL_SERVER_ERROR, body.to_string());
        match err {
            AdvisorError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "Overloaded");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unparseable_error_body_kept_verbatim() {
        let err = map_http_error(StatusCode::BAD_GATEWAY, "upstream went away".to_string());
        match err {
            AdvisorError::Api { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "upstream went away");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_extract_text_concatenates_text_blocks() {
        let payload = json!({
            "id": "msg_01",
            "type": "message",
            "role": "assistant",
            "content": [
                {"type": "text", "text": "Dearest child, "},
                {"type": "tool_use", "id": "tu_01", "name": "noop", "input": {}},
                {"type": "text", "text": "listen to your heart."}
            ],
            "model": "claude-3-5-haiku-20241022",
            "stop_reason": "end_turn"
        });
        let response: MessagesResponse = serde_json::from_value(payload).unwrap();
        assert_eq!(
            extract_text(&response).unwrap(),
            "Dearest child, listen to your heart."
        );
    }

    #[test]
    fn test_extract_text_none_without_text_blocks() {
        let payload = json!({"content": []});
        let response: MessagesResponse = serde_json::from_value(payload).unwrap();
        assert!(extract_text(&response).is_none());
    }
}
