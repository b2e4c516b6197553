//! Quiz generator trait

use async_trait::async_trait;

use crate::error::Result;
use crate::types::quiz::Quiz;

/// Trait for LLM-backed quiz generation.
///
/// The hosted completion dependency sits behind this seam so rendering and
/// grading never touch a concrete API shape.
///
/// Implementations:
/// - `OpenAiQuizClient`: OpenAI chat completions with a forced tool call
#[async_trait]
pub trait QuizGenerator: Send + Sync {
    /// Generate a quiz from a context string. The returned quiz is the
    /// model's structured payload, decoded but otherwise unmodified.
    async fn generate_quiz(&self, context: &str) -> Result<Quiz>;

    /// Check if the provider is healthy and available
    async fn health_check(&self) -> Result<bool>;

    /// Get provider name for logging
    fn name(&self) -> &str;

    /// Get the model being used
    fn model(&self) -> &str;
}
