//! Advice Provider Port
//!
//! Abstract interface over the external text-generation service. The
//! concrete implementation speaks the Anthropic Messages API; tests plug in
//! stubs to exercise the error taxonomy without a network.

use async_trait::async_trait;

use crate::domain::errors::AdvisorError;

/// Upstream text-generation seam
///
/// One invocation is one outbound call: no retry, no caching. Identical
/// prompts may yield different advice because upstream generation is
/// non-deterministic.
#[async_trait]
pub trait AdviceProvider: Send + Sync {
    /// Send the rendered prompt and return the generated advice text
    async fn generate(&self, prompt: &str) -> Result<String, AdvisorError>;
}
