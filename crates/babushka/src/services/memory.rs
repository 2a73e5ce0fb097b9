//! In-Memory Conversation Store
//!
//! Process-lifetime ledger: a lock-guarded map from user identifier to that
//! user's insertion-ordered record sequence. The lock is what keeps
//! concurrent appends to the same user from losing records. No persistence,
//! no eviction, unbounded growth.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::{ConversationRecord, StoreStats};
use crate::domain::errors::StoreError;
use crate::ports::ConversationStore;

/// Volatile [`ConversationStore`] backed by a `RwLock<HashMap>`
#[derive(Default)]
pub struct InMemoryConversationStore {
    records: RwLock<HashMap<String, Vec<ConversationRecord>>>,
}

impl InMemoryConversationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ConversationStore for InMemoryConversationStore {
    async fn append(&self, user_id: &str, record: ConversationRecord) -> Result<(), StoreError> {
        let mut records = self.records.write().await;
        records.entry(user_id.to_string()).or_default().push(record);
        Ok(())
    }

    async fn read(&self, user_id: &str) -> Result<Vec<ConversationRecord>, StoreError> {
        let records = self.records.read().await;
        Ok(records.get(user_id).cloned().unwrap_or_default())
    }

    async fn stats(&self) -> Result<StoreStats, StoreError> {
        let records = self.records.read().await;
        Ok(StoreStats {
            total_users: records.len(),
            total_records: records.values().map(|seq| seq.len()).sum(),
        })
    }
}
