//! Tradition Entity
//!
//! A named philosophical perspective with a display name, selection weight,
//! and guidance text injected into the advice prompt. The table is defined
//! once at startup and never mutated.

use serde::{Deserialize, Serialize};

/// A weighted philosophical tradition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tradition {
    /// Stable identifier, used as the wire key ("christian", "stoic", ...)
    pub key: String,
    /// Human-readable name
    pub display_name: String,
    /// Selection weight. Weights need not sum to 1; selection is
    /// proportional among entries with weight > 0.
    pub weight: f64,
    /// Guidance sentence injected into the prompt when selected
    pub guidance: String,
}

impl Tradition {
    pub fn new(
        key: impl Into<String>,
        display_name: impl Into<String>,
        weight: f64,
        guidance: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            display_name: display_name.into(),
            weight,
            guidance: guidance.into(),
        }
    }
}

/// Built-in tradition mix
pub fn default_traditions() -> Vec<Tradition> {
    vec![
        Tradition::new(
            "christian",
            "Christian",
            0.30,
            "Focus on love, forgiveness, patience, and treating others with dignity and respect.",
        ),
        Tradition::new(
            "buddhist",
            "Buddhist",
            0.30,
            "Emphasize compassion, wisdom, truth, emancipation from earthly desires and delusion.",
        ),
        Tradition::new(
            "taoist",
            "Taoist",
            0.10,
            "Emphasize natural flow, balance, not forcing situations, and finding harmony.",
        ),
        Tradition::new(
            "secular_humanist",
            "Secular Humanist",
            0.10,
            "Focus on reason, empathy, human dignity, and evidence-based problem solving.",
        ),
        Tradition::new(
            "stoic",
            "Stoic",
            0.20,
            "Emphasize acceptance of what you cannot control and focusing on your own actions and responses.",
        ),
    ]
}
