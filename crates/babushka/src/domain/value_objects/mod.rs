//! Value Objects
//!
//! Immutable value types shared across the domain.

mod record_kind;

pub use record_kind::*;
