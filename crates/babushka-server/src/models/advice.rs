//! Advice request/response DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Advice request body
#[derive(Debug, Deserialize, ToSchema)]
pub struct AdviceRequest {
    /// Free-text description of the relationship situation
    pub situation: String,
    /// Accepted for wire compatibility; the ledger is keyed only by the
    /// token-resolved subject, never by this field
    #[serde(default)]
    pub user_id: Option<String>,
}

/// Advice response body
#[derive(Debug, Serialize, ToSchema)]
pub struct AdviceResponse {
    pub advice: String,
    /// Resolved subject, or explicit `null` for anonymous callers
    pub user_id: Option<String>,
}
