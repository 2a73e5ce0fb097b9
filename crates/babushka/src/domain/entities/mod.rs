//! Domain Entities
//!
//! - Tradition: a weighted philosophical perspective flavoring the prompt
//! - Persona: the narrative voice the advice is framed as speaking from
//! - ConversationRecord: one append-only ledger entry

mod conversation;
mod persona;
mod tradition;

pub use conversation::*;
pub use persona::*;
pub use tradition::*;
