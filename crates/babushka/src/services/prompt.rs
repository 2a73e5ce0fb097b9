//! Prompt Rendering
//!
//! Assembles the advice prompt from the persona template, the selected
//! traditions' guidance lines, and the raw situation text. The situation is
//! interpolated verbatim; there is no escaping or sanitization.

use crate::domain::entities::{Persona, Tradition};

/// Render the full advice prompt
///
/// Layout: persona intro, one `- ` bullet per selected tradition's guidance
/// (in draw order, duplicates kept), the verbatim situation, the numbered
/// response-quality directives, and the length/address-term line.
pub fn render_advice_prompt(persona: &Persona, selected: &[&Tradition], situation: &str) -> String {
    let guidance = selected
        .iter()
        .map(|t| format!("- {}", t.guidance))
        .collect::<Vec<_>>()
        .join("\n");

    let directives = persona
        .directives
        .iter()
        .enumerate()
        .map(|(i, d)| format!("{}. {}", i + 1, d))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "{intro}\n\n\
         Your advice should incorporate these philosophical perspectives:\n\
         {guidance}\n\n\
         Situation: {situation}\n\n\
         {directives_intro}\n\
         {directives}\n\n\
         Keep your response between {min}-{max} words. Address the person as \
         \"{address}\" or similar endearing terms.",
        intro = persona.intro,
        guidance = guidance,
        situation = situation,
        directives_intro = persona.directives_intro,
        directives = directives,
        min = persona.min_words,
        max = persona.max_words,
        address = persona.address_term,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::default_traditions;

    #[test]
    fn test_prompt_contains_all_sections() {
        let persona = Persona::default();
        let traditions = default_traditions();
        let selected: Vec<&Tradition> = traditions.iter().take(2).collect();

        let prompt = render_advice_prompt(&persona, &selected, "We keep arguing about money");

        assert!(prompt.starts_with("You are Babushka"));
        assert!(prompt.contains(&format!("- {}", traditions[0].guidance)));
        assert!(prompt.contains(&format!("- {}", traditions[1].guidance)));
        assert!(prompt.contains("Situation: We keep arguing about money"));
        assert!(prompt.contains("1. Shows empathy and understanding"));
        assert!(prompt.contains("5. Uses gentle, grandmother-like language"));
        assert!(prompt.contains("between 100-200 words"));
        assert!(prompt.contains("\"dearest child\""));
    }

    #[test]
    fn test_situation_interpolated_verbatim() {
        let persona = Persona::default();
        let situation = "He said \"<b>never</b>\" & slammed the door\nthen left";
        let prompt = render_advice_prompt(&persona, &[], situation);
        assert!(prompt.contains(&format!("Situation: {}", situation)));
    }

    #[test]
    fn test_duplicate_guidance_lines_kept() {
        let persona = Persona::default();
        let stoic = Tradition::new("stoic", "Stoic", 0.2, "Accept what you cannot control.");
        let prompt = render_advice_prompt(&persona, &[&stoic, &stoic], "Quarrel");
        assert_eq!(prompt.matches("- Accept what you cannot control.").count(), 2);
    }
}
