//! Philosophy-mix DTOs

use std::collections::BTreeMap;

use serde::Serialize;
use utoipa::ToSchema;

/// One tradition's share of the mix
#[derive(Debug, Serialize, ToSchema)]
pub struct TraditionShare {
    pub name: String,
    /// `weight * 100` rounded to one decimal; not normalized, so the sum
    /// only reaches 100.0 when the configured weights sum to 1
    pub percentage: f64,
    pub weight: f64,
}

/// The full tradition mix keyed by tradition identifier
#[derive(Debug, Serialize, ToSchema)]
pub struct PhilosophyMixResponse {
    pub philosophy_mix: BTreeMap<String, TraditionShare>,
    pub total_traditions: usize,
    pub description: String,
}
