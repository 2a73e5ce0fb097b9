//! Advice Route
//!
//! The main endpoint: resolve identity (best-effort), pick the tradition
//! flavor, render the prompt, call the advisor, and record the exchange for
//! authenticated callers.

use axum::{extract::State, http::HeaderMap, routing::post, Json, Router};

use babushka::domain::ConversationRecord;
use babushka::services::prompt::render_advice_prompt;
use babushka::services::selection::select_traditions;

use crate::auth::resolve_identity;
use crate::error::{ApiError, ErrorBody};
use crate::models::{AdviceRequest, AdviceResponse};
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/advice", post(get_advice))
}

/// Generate persona-voiced advice for a relationship situation
///
/// The inbound message is recorded before the upstream call, so it survives
/// a failed call; the bot response is only recorded on success.
#[utoipa::path(
    post,
    path = "/advice",
    request_body = AdviceRequest,
    responses(
        (status = 200, description = "Generated advice", body = AdviceResponse),
        (status = 401, description = "Upstream authentication failed", body = ErrorBody),
        (status = 429, description = "Upstream rate limited", body = ErrorBody),
        (status = 502, description = "Upstream API error", body = ErrorBody),
        (status = 500, description = "Advice generation failed", body = ErrorBody)
    ),
    tag = "Advice"
)]
pub async fn get_advice(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<AdviceRequest>,
) -> Result<Json<AdviceResponse>, ApiError> {
    let identity = resolve_identity(state.jwt_secret.as_deref(), &headers);

    if let Some(identity) = &identity {
        tracing::debug!(user = %identity.subject, "Recording inbound situation");
        state
            .store
            .append(
                &identity.subject,
                ConversationRecord::user_message(payload.situation.clone()),
            )
            .await?;
    }

    // ThreadRng is not Send; keep it out of the await points below.
    let prompt = {
        let mut rng = rand::thread_rng();
        let selected = select_traditions(&state.profile.traditions, &mut rng);
        tracing::debug!(
            traditions = ?selected.iter().map(|t| t.key.as_str()).collect::<Vec<_>>(),
            "Selected tradition flavor"
        );
        render_advice_prompt(&state.profile.persona, &selected, &payload.situation)
    };

    let advice = state.advisor.generate(&prompt).await?;

    if let Some(identity) = &identity {
        state
            .store
            .append(
                &identity.subject,
                ConversationRecord::bot_response(advice.clone()),
            )
            .await?;
    }

    Ok(Json(AdviceResponse {
        advice,
        user_id: identity.map(|identity| identity.subject),
    }))
}
