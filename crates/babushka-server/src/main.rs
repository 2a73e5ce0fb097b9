use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use babushka::domain::AdvisorProfile;
use babushka::ports::{AdviceProvider, ConversationStore};
use babushka::services::anthropic::AnthropicAdvisor;
use babushka::services::memory::InMemoryConversationStore;

mod auth;
mod config;
mod error;
mod models;
mod routes;
#[cfg(test)]
mod test_support;

use config::AppConfig;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub advisor: Arc<dyn AdviceProvider>,
    pub store: Arc<dyn ConversationStore>,
    pub profile: Arc<AdvisorProfile>,
    /// Presence enables bearer identity resolution; signatures are not
    /// verified either way
    pub jwt_secret: Option<String>,
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "healthy".to_string(),
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("🧿 Babushka API initializing...");

    let config = AppConfig::from_env()?;

    if config.jwt_secret.is_some() {
        tracing::info!("🔐 Bearer identity resolution enabled");
        tracing::warn!(
            "⚠️  Token signatures are NOT verified - resolved identities are caller-controllable"
        );
    } else {
        tracing::warn!("⚠️  No JWT_SECRET set - identity resolution disabled");
    }

    let mut advisor = AnthropicAdvisor::new(config.anthropic_api_key.clone());
    if let Some(model) = &config.anthropic_model {
        advisor = advisor.with_model(model.clone());
        tracing::info!("🧠 Advisor model override: {}", model);
    }
    if let Some(max_tokens) = config.max_tokens {
        advisor = advisor.with_max_tokens(max_tokens);
    }

    tracing::info!(
        "🌍 Persona '{}' with {} traditions loaded",
        config.profile.persona.name,
        config.profile.traditions.len()
    );

    let state = AppState {
        advisor: Arc::new(advisor),
        store: Arc::new(InMemoryConversationStore::new()),
        profile: Arc::new(config.profile.clone()),
        jwt_secret: config.jwt_secret.clone(),
    };

    // OpenAPI documentation
    let openapi = routes::swagger::ApiDoc::openapi();

    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::advice::router())
        .merge(routes::philosophy::router())
        .merge(routes::conversations::router())
        .merge(routes::stats::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Could not bind {}", config.bind_addr))?;

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Babushka API ready on {}", config.bind_addr);

    axum::serve(listener, router).await?;

    Ok(())
}
