//! Conversation Store Port
//!
//! Abstract interface over the per-user conversation ledger, so a durable
//! backing store can replace the in-memory map without touching handlers.

use async_trait::async_trait;

use crate::domain::entities::{ConversationRecord, StoreStats};
use crate::domain::errors::StoreError;

/// Append-only per-user conversation ledger
///
/// Sequences are insertion-ordered and unbounded; there is no deletion and
/// no expiry.
#[async_trait]
pub trait ConversationStore: Send + Sync {
    /// Append a record to the user's sequence, creating it on first use
    async fn append(&self, user_id: &str, record: ConversationRecord) -> Result<(), StoreError>;

    /// Read the user's full sequence in insertion order (empty if unknown)
    async fn read(&self, user_id: &str) -> Result<Vec<ConversationRecord>, StoreError>;

    /// Aggregate counts across all users
    async fn stats(&self) -> Result<StoreStats, StoreError>;
}
