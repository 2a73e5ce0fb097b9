//! Conversation-History Route
//!
//! Protected: requires a resolved identity, and the resolved subject must
//! match the requested user. No cross-user access.

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    routing::get,
    Json, Router,
};

use crate::auth::resolve_identity;
use crate::error::{ApiError, ErrorBody};
use crate::models::ConversationHistoryResponse;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/conversations/:user_id", get(get_conversations))
}

/// Read a user's full conversation history
#[utoipa::path(
    get,
    path = "/conversations/{user_id}",
    params(
        ("user_id" = String, Path, description = "User whose history to read")
    ),
    responses(
        (status = 200, description = "Full conversation history", body = ConversationHistoryResponse),
        (status = 401, description = "Not authenticated", body = ErrorBody),
        (status = 403, description = "History belongs to another user", body = ErrorBody)
    ),
    tag = "Conversations"
)]
pub async fn get_conversations(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<ConversationHistoryResponse>, ApiError> {
    let identity = resolve_identity(state.jwt_secret.as_deref(), &headers)
        .ok_or_else(|| ApiError::unauthorized("Not authenticated"))?;

    if identity.subject != user_id {
        return Err(ApiError::forbidden(
            "Access denied: conversations belong to another user",
        ));
    }

    let records = state.store.read(&user_id).await?;

    Ok(Json(ConversationHistoryResponse {
        user_id,
        conversations: records.into_iter().map(Into::into).collect(),
    }))
}
