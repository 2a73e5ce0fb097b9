//! Philosophy-Mix Route
//!
//! Renders the static tradition table as percentages. No selection happens
//! here; the draw only runs per advice request.

use axum::{extract::State, routing::get, Json, Router};

use crate::models::{PhilosophyMixResponse, TraditionShare};
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/philosophy-mix", get(get_philosophy_mix))
}

/// Describe the weighted tradition mix flavoring the advice
#[utoipa::path(
    get,
    path = "/philosophy-mix",
    responses(
        (status = 200, description = "The configured tradition mix", body = PhilosophyMixResponse)
    ),
    tag = "Philosophy"
)]
pub async fn get_philosophy_mix(State(state): State<AppState>) -> Json<PhilosophyMixResponse> {
    let philosophy_mix = state
        .profile
        .traditions
        .iter()
        .map(|tradition| {
            (
                tradition.key.clone(),
                TraditionShare {
                    name: tradition.display_name.clone(),
                    percentage: (tradition.weight * 1000.0).round() / 10.0,
                    weight: tradition.weight,
                },
            )
        })
        .collect();

    Json(PhilosophyMixResponse {
        philosophy_mix,
        total_traditions: state.profile.traditions.len(),
        description: state.profile.persona.mix_description.clone(),
    })
}
