//! Babushka Domain Library
//!
//! Core domain types and interfaces for the Babushka relationship-advice
//! service.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (Tradition, Persona, ConversationRecord)
//!   - `value_objects/`: Immutable value types (RecordKind)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `AdviceProvider`: the upstream text-generation seam
//!   - `ConversationStore`: the per-user conversation ledger seam
//!
//! - **Services** (`services/`): Concrete implementations
//!   - weighted tradition selection, prompt rendering, the Anthropic
//!     Messages API client, and the in-memory ledger
//!
//! # Usage
//!
//! ```rust,ignore
//! use babushka::domain::{AdvisorProfile, ConversationRecord};
//! use babushka::ports::{AdviceProvider, ConversationStore};
//! ```

pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types
pub use domain::{
    AdvisorError, AdvisorProfile, ConversationRecord, Persona, RecordKind, StoreError, StoreStats,
    Tradition,
};
pub use ports::{AdviceProvider, ConversationStore};
pub use services::{
    anthropic::AnthropicAdvisor, memory::InMemoryConversationStore, prompt::render_advice_prompt,
    selection::select_traditions,
};
