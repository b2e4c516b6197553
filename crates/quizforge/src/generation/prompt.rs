//! Prompt template for quiz generation

/// Prompt builder for quiz requests
pub struct PromptBuilder;

impl PromptBuilder {
    /// Concatenate chunk texts into a single context string
    pub fn build_context(chunks: &[String]) -> String {
        chunks.join("\n\n")
    }

    /// Render the fixed instruction template around a context string
    pub fn build_quiz_prompt(context: &str) -> String {
        format!(
            r#"You are a helpful assistant that is role playing as a teacher.

Based ONLY on the following context make 4 questions to test the user's knowledge about the text.

Each question should have 3 answers, two of them must be incorrect and one should be correct.

Context: {context}"#,
            context = context
        )
    }
}
