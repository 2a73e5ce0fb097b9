//! Ledger stats DTO

use serde::Serialize;
use utoipa::ToSchema;

/// Aggregate ledger counts plus the caller's own view
#[derive(Debug, Serialize, ToSchema)]
pub struct StatsResponse {
    pub total_users: usize,
    pub total_conversations: usize,
    pub authenticated: bool,
    /// Present only for authenticated callers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_conversation_count: Option<usize>,
}
