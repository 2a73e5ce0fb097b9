//! HTTP Routes
//!
//! One module per resource, each exporting a `router()`.

pub mod advice;
pub mod conversations;
pub mod philosophy;
pub mod stats;
pub mod swagger;
