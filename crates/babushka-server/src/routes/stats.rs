//! Stats Route
//!
//! Aggregate ledger counts, plus the caller's own record count when a
//! bearer identity resolves.

use axum::{extract::State, http::HeaderMap, routing::get, Json, Router};

use crate::auth::resolve_identity;
use crate::error::ApiError;
use crate::models::StatsResponse;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/stats", get(get_stats))
}

/// Aggregate conversation-ledger statistics
#[utoipa::path(
    get,
    path = "/stats",
    responses(
        (status = 200, description = "Ledger statistics", body = StatsResponse)
    ),
    tag = "Stats"
)]
pub async fn get_stats(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<StatsResponse>, ApiError> {
    let identity = resolve_identity(state.jwt_secret.as_deref(), &headers);
    let stats = state.store.stats().await?;

    let user_conversation_count = match &identity {
        Some(identity) => Some(state.store.read(&identity.subject).await?.len()),
        None => None,
    };

    Ok(Json(StatsResponse {
        total_users: stats.total_users,
        total_conversations: stats.total_records,
        authenticated: identity.is_some(),
        user_conversation_count,
    }))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use babushka::domain::ConversationRecord;
    use tower::ServiceExt;

    use crate::test_support::{authed_state, bearer_token, body_json, StubAdvisor};

    fn stats_request(token: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri("/stats");
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {}", token));
        }
        builder.body(Body::empty()).unwrap()
    }

    async fn seed(store: &dyn babushka::ports::ConversationStore) {
        store
            .append("olga", ConversationRecord::user_message("We argue"))
            .await
            .unwrap();
        store
            .append("olga", ConversationRecord::bot_response("Dearest child"))
            .await
            .unwrap();
        store
            .append("ivan", ConversationRecord::user_message("Help"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_anonymous_stats_omit_user_count() {
        let (state, store) = authed_state(StubAdvisor::Advice("unused"));
        seed(store.as_ref()).await;
        let app = super::router().with_state(state);

        let response = app.oneshot(stats_request(None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["total_users"], 2);
        assert_eq!(body["total_conversations"], 3);
        assert_eq!(body["authenticated"], false);
        assert!(body.get("user_conversation_count").is_none());
    }

    #[tokio::test]
    async fn test_authenticated_stats_include_own_count() {
        let (state, store) = authed_state(StubAdvisor::Advice("unused"));
        seed(store.as_ref()).await;
        let app = super::router().with_state(state);

        let response = app
            .oneshot(stats_request(Some(&bearer_token("olga"))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["authenticated"], true);
        assert_eq!(body["user_conversation_count"], 2);
    }

    #[tokio::test]
    async fn test_empty_ledger_stats_are_zero() {
        let (state, _store) = authed_state(StubAdvisor::Advice("unused"));
        let app = super::router().with_state(state);

        let response = app.oneshot(stats_request(None)).await.unwrap();
        let body = body_json(response).await;
        assert_eq!(body["total_users"], 0);
        assert_eq!(body["total_conversations"], 0);
    }
}
