//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::error::ErrorBody;
use crate::models::{
    AdviceRequest, AdviceResponse, ConversationHistoryResponse, ConversationRecordResponse,
    PhilosophyMixResponse, StatsResponse, TraditionShare,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::advice::get_advice,
        super::philosophy::get_philosophy_mix,
        super::conversations::get_conversations,
        super::stats::get_stats,
    ),
    components(schemas(
        AdviceRequest,
        AdviceResponse,
        PhilosophyMixResponse,
        TraditionShare,
        ConversationHistoryResponse,
        ConversationRecordResponse,
        StatsResponse,
        ErrorBody,
    )),
    tags(
        (name = "Advice", description = "Persona-voiced relationship advice"),
        (name = "Philosophy", description = "The weighted tradition mix"),
        (name = "Conversations", description = "Per-user conversation history"),
        (name = "Stats", description = "Ledger statistics")
    ),
    info(
        title = "Babushka API",
        description = "Relationship advice voiced by a configurable persona, \
                       flavored by a weighted mix of philosophical traditions."
    )
)]
pub struct ApiDoc;
