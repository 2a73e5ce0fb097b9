//! Services
//!
//! Concrete implementations behind the ports, plus the pure flavor logic
//! (weighted tradition selection and prompt rendering).

pub mod anthropic;
pub mod memory;
pub mod prompt;
pub mod selection;
