//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the domain layer interacts with
//! external systems. Implementations live in `services/`.

mod advice_provider;
mod conversation_store;

pub use advice_provider::*;
pub use conversation_store::*;
