//! Conversation-history DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use babushka::domain::ConversationRecord;

/// One ledger entry on the wire
#[derive(Debug, Serialize, ToSchema)]
pub struct ConversationRecordResponse {
    pub timestamp: DateTime<Utc>,
    /// "user_message" or "bot_response"
    pub kind: String,
    pub content: String,
}

impl From<ConversationRecord> for ConversationRecordResponse {
    fn from(record: ConversationRecord) -> Self {
        Self {
            timestamp: record.timestamp,
            kind: record.kind.as_str().to_string(),
            content: record.content,
        }
    }
}

/// A user's full conversation history
#[derive(Debug, Serialize, ToSchema)]
pub struct ConversationHistoryResponse {
    pub user_id: String,
    pub conversations: Vec<ConversationRecordResponse>,
}
