//! Domain Errors
//!
//! Error types for the advisor call and the conversation store. The advisor
//! taxonomy keeps upstream auth, rate-limit, API, transport, and
//! malformed-body failures distinct so the HTTP layer can map each to its
//! own status code.

use thiserror::Error;

/// Errors surfaced by an [`AdviceProvider`](crate::ports::AdviceProvider)
#[derive(Debug, Error)]
pub enum AdvisorError {
    /// Upstream rejected the configured credential (HTTP 401)
    #[error("Upstream authentication failed")]
    AuthFailed,

    /// Upstream rejected the call as rate limited (HTTP 429)
    #[error("Upstream rate limited")]
    RateLimited,

    /// Any other non-success upstream status
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Transport failure before a status was received
    #[error("Request failed: {0}")]
    Request(String),

    /// Upstream replied 2xx but the body was not the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl AdvisorError {
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }
}

/// Errors surfaced by a [`ConversationStore`](crate::ports::ConversationStore)
#[derive(Debug, Error)]
pub enum StoreError {
    /// Backing store failure (the in-memory store never produces this;
    /// durable implementations can)
    #[error("Store error: {0}")]
    Backend(String),
}
