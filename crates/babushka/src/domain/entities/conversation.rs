//! Conversation Record Entity
//!
//! One entry in a user's conversation ledger. Records are appended in
//! chronological order and never mutated or deleted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::RecordKind;

/// A single timestamped ledger entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationRecord {
    /// When the record was appended (RFC 3339 on the wire)
    pub timestamp: DateTime<Utc>,
    /// Whether this came from the user or the advisor
    pub kind: RecordKind,
    /// Message content
    pub content: String,
}

impl ConversationRecord {
    /// Record an inbound user message, stamped now
    pub fn user_message(content: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            kind: RecordKind::UserMessage,
            content: content.into(),
        }
    }

    /// Record the advisor's reply, stamped now
    pub fn bot_response(content: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            kind: RecordKind::BotResponse,
            content: content.into(),
        }
    }
}

/// Aggregate counts across the whole ledger
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct StoreStats {
    /// Number of distinct user keys
    pub total_users: usize,
    /// Sum of record counts across all users
    pub total_records: usize,
}
