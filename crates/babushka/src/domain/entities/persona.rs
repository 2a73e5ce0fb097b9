//! Persona Entity
//!
//! The narrative voice the generated advice is framed as speaking from.
//! Everything here is configuration data, not logic: swapping "Babushka"
//! for another figure requires no code change.

use serde::{Deserialize, Serialize};

use super::tradition::{default_traditions, Tradition};

/// Persona template: intro text, response-quality directives, length
/// bounds, and the address term woven into the closing instruction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Persona {
    /// Display name ("Babushka", "Theotokos", ...)
    pub name: String,
    /// Opening paragraph of the prompt, establishing the voice
    pub intro: String,
    /// Line introducing the numbered directives
    pub directives_intro: String,
    /// Numbered response-quality directives
    pub directives: Vec<String>,
    /// Lower word-count bound for the reply
    pub min_words: u32,
    /// Upper word-count bound for the reply
    pub max_words: u32,
    /// Endearing term the reply should address the reader as
    pub address_term: String,
    /// One-line description of the tradition mix, surfaced on the wire
    pub mix_description: String,
}

impl Default for Persona {
    fn default() -> Self {
        Self {
            name: "Babushka".to_string(),
            intro: "You are Babushka, a wise relationship advisor who draws from the collective \
                    wisdom of many cultures and generations. You speak with the warm, caring \
                    voice of a grandmother who has seen many relationships succeed and fail."
                .to_string(),
            directives_intro: "Provide warm, practical relationship advice that:".to_string(),
            directives: vec![
                "Shows empathy and understanding".to_string(),
                "Offers concrete, actionable steps".to_string(),
                "Draws from traditional wisdom while being relevant to modern relationships"
                    .to_string(),
                "Is encouraging but realistic".to_string(),
                "Uses gentle, grandmother-like language".to_string(),
            ],
            min_words: 100,
            max_words: 200,
            address_term: "dearest child".to_string(),
            mix_description: "Babushka draws wisdom from diverse global traditions.".to_string(),
        }
    }
}

/// The full flavor configuration: one persona plus its tradition table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisorProfile {
    pub persona: Persona,
    pub traditions: Vec<Tradition>,
}

impl Default for AdvisorProfile {
    fn default() -> Self {
        Self {
            persona: Persona::default(),
            traditions: default_traditions(),
        }
    }
}
