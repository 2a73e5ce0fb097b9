//! Server Configuration
//!
//! Everything comes from the environment (after `dotenvy` has run):
//!
//! - `ANTHROPIC_API_KEY` (required; startup fails without it)
//! - `JWT_SECRET` (optional; absence disables identity resolution)
//! - `ANTHROPIC_MODEL`, `ADVICE_MAX_TOKENS`, `BIND_ADDR` (optional overrides)
//! - `PERSONA_CONFIG` (optional path to a TOML file replacing the built-in
//!   persona and tradition mix)

use anyhow::{anyhow, Context, Result};
use babushka::domain::AdvisorProfile;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

/// Resolved startup configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub anthropic_api_key: String,
    pub anthropic_model: Option<String>,
    pub max_tokens: Option<u32>,
    pub jwt_secret: Option<String>,
    pub bind_addr: String,
    pub profile: AdvisorProfile,
}

impl AppConfig {
    /// Read configuration from the environment
    pub fn from_env() -> Result<Self> {
        let anthropic_api_key = std::env::var("ANTHROPIC_API_KEY").map_err(|_| {
            anyhow!("ANTHROPIC_API_KEY not set - the advisor cannot start without it")
        })?;

        let anthropic_model = std::env::var("ANTHROPIC_MODEL").ok();

        let max_tokens = match std::env::var("ADVICE_MAX_TOKENS") {
            Ok(raw) => Some(
                raw.parse::<u32>()
                    .context("ADVICE_MAX_TOKENS must be a positive integer")?,
            ),
            Err(_) => None,
        };

        let jwt_secret = std::env::var("JWT_SECRET").ok().filter(|s| !s.is_empty());

        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        let profile = match std::env::var("PERSONA_CONFIG") {
            Ok(path) => load_profile(&path)?,
            Err(_) => AdvisorProfile::default(),
        };

        Ok(Self {
            anthropic_api_key,
            anthropic_model,
            max_tokens,
            jwt_secret,
            bind_addr,
            profile,
        })
    }
}

/// Load a persona/tradition profile from a TOML file
fn load_profile(path: &str) -> Result<AdvisorProfile> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Could not read persona config at {}", path))?;
    toml::from_str(&raw).with_context(|| format!("Could not parse persona config at {}", path))
}
