//! Babushka Wire Models
//!
//! - Advice: situation in, persona-voiced advice out
//! - Philosophy: the static tradition mix as percentages
//! - Conversation: per-user ledger history
//! - Stats: aggregate ledger counts

mod advice;
mod conversation;
mod philosophy;
mod stats;

pub use advice::*;
pub use conversation::*;
pub use philosophy::*;
pub use stats::*;
