//! Transformer gateway trait.

use async_trait::async_trait;
use vasari_error::VasariResult;

/// Uniform capability interface over the two AI-backed transformations.
///
/// Implementations wrap a generative-AI provider; provider identity and
/// credentials are opaque to the rest of the pipeline. Calls are blocking
/// per request (await until the provider answers), retain no state between
/// calls, and may be slow; callers must not assume bounded latency. No
/// retry or timeout is applied here; a failed call surfaces immediately.
#[async_trait]
pub trait ContentTransformer: Send + Sync {
    /// Generate an image from a text prompt.
    ///
    /// Returns encoded image bytes (PNG unless the implementation documents
    /// otherwise).
    ///
    /// # Errors
    ///
    /// `TransformErrorKind::EmptyPrompt` for an empty/invalid prompt,
    /// `TransformErrorKind::Generation` for provider failure.
    async fn text_to_image(&self, prompt: &str) -> VasariResult<Vec<u8>>;

    /// Describe an image as text.
    ///
    /// # Errors
    ///
    /// `TransformErrorKind::Description` for provider failure or an image
    /// the provider cannot read.
    async fn image_to_text(&self, image: &[u8]) -> VasariResult<String>;

    /// Provider name (e.g., "openai", "gemini"), for logging.
    fn provider_name(&self) -> &'static str;
}
