//! Weighted Tradition Selection
//!
//! Draws up to three traditions to flavor a single prompt. Each draw is an
//! independent weighted pick over the positive-weight entries, sampling
//! with replacement, so the same tradition can appear more than once in one
//! prompt. The bias is cosmetic tone control, not a coverage guarantee.

use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

use crate::domain::entities::Tradition;

/// Number of draws per prompt (capped by the positive-weight entry count)
const DRAWS_PER_PROMPT: usize = 3;

/// Select `min(3, positive-weight entries)` traditions, independently
/// weighted, with replacement. Zero-weight entries are never selected.
/// Returns an empty vec when no entry has positive weight.
pub fn select_traditions<'a, R: Rng + ?Sized>(
    traditions: &'a [Tradition],
    rng: &mut R,
) -> Vec<&'a Tradition> {
    let available: Vec<&Tradition> = traditions.iter().filter(|t| t.weight > 0.0).collect();
    if available.is_empty() {
        return Vec::new();
    }

    let dist = match WeightedIndex::new(available.iter().map(|t| t.weight)) {
        Ok(dist) => dist,
        // Unreachable with a non-empty positive-weight list, but a broken
        // flavor draw should never take the request down.
        Err(_) => return Vec::new(),
    };

    let count = DRAWS_PER_PROMPT.min(available.len());
    (0..count).map(|_| available[dist.sample(rng)]).collect()
}
