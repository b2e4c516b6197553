//! Quiz generation orchestration

pub mod prompt;
pub mod quiz_cache;

pub use prompt::PromptBuilder;
pub use quiz_cache::QuizCache;

use crate::error::Result;
use crate::providers::QuizGenerator;
use crate::types::quiz::Quiz;
use crate::types::source::SourceDocument;

/// Generate a quiz for a registered source, memoized by label and content
/// fingerprint. Returns the quiz and whether it was served from the cache.
///
/// The provider's structured payload passes through unmodified; a payload
/// that violates the requested shape is rejected before it is cached.
pub async fn generate_quiz(
    provider: &dyn QuizGenerator,
    cache: &QuizCache,
    source: &SourceDocument,
) -> Result<(Quiz, bool)> {
    if let Some(quiz) = cache.get(&source.label, &source.content_hash) {
        tracing::info!("Quiz cache hit for '{}'", source.label);
        return Ok((quiz, true));
    }

    let context = PromptBuilder::build_context(&source.chunks);
    tracing::info!(
        "Generating quiz for '{}' via {} ({} chunks, {} chars of context)",
        source.label,
        provider.name(),
        source.chunks.len(),
        context.len()
    );

    let quiz = provider.generate_quiz(&context).await?;
    quiz.validate()?;

    cache.put(&source.label, &source.content_hash, quiz.clone());
    Ok((quiz, false))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::types::quiz::{QuizAnswer, QuizQuestion};
    use crate::types::source::SourceOrigin;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Stub collaborator returning a fixed payload
    struct StubGenerator {
        quiz: Quiz,
        calls: AtomicUsize,
    }

    impl StubGenerator {
        fn new(quiz: Quiz) -> Self {
            Self {
                quiz,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl QuizGenerator for StubGenerator {
        async fn generate_quiz(&self, _context: &str) -> Result<Quiz> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.quiz.clone())
        }

        async fn health_check(&self) -> Result<bool> {
            Ok(true)
        }

        fn name(&self) -> &str {
            "stub"
        }

        fn model(&self) -> &str {
            "stub-model"
        }
    }

    fn answers(correct: usize) -> Vec<QuizAnswer> {
        (0..3)
            .map(|i| QuizAnswer {
                answer: format!("answer {}", i),
                correct: i == correct,
            })
            .collect()
    }

    fn well_formed_quiz() -> Quiz {
        Quiz {
            questions: (0..4)
                .map(|i| QuizQuestion {
                    question: format!("question {}", i),
                    answers: answers(i % 3),
                })
                .collect(),
        }
    }

    fn source() -> SourceDocument {
        SourceDocument::new(
            "topic",
            SourceOrigin::Wikipedia {
                topic: "topic".to_string(),
                title: "Topic".to_string(),
            },
            vec!["some context".to_string()],
        )
    }

    #[tokio::test]
    async fn test_well_formed_payload_passes_through_unchanged() {
        let provider = StubGenerator::new(well_formed_quiz());
        let cache = QuizCache::new(10, 3600);

        let (quiz, cached) = generate_quiz(&provider, &cache, &source()).await.unwrap();

        assert!(!cached);
        assert_eq!(quiz, well_formed_quiz());
        assert_eq!(quiz.questions.len(), 4);
        assert!(quiz.questions.iter().all(|q| q.answers.len() == 3));
    }

    #[tokio::test]
    async fn test_second_call_hits_cache_without_provider() {
        let provider = StubGenerator::new(well_formed_quiz());
        let cache = QuizCache::new(10, 3600);
        let source = source();

        let (_, first_cached) = generate_quiz(&provider, &cache, &source).await.unwrap();
        let (quiz, second_cached) = generate_quiz(&provider, &cache, &source).await.unwrap();

        assert!(!first_cached);
        assert!(second_cached);
        assert_eq!(quiz, well_formed_quiz());
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_schema_violating_payload_is_rejected_and_not_cached() {
        let mut bad = well_formed_quiz();
        bad.questions[0].answers.pop();

        let provider = StubGenerator::new(bad);
        let cache = QuizCache::new(10, 3600);

        let result = generate_quiz(&provider, &cache, &source()).await;
        assert!(matches!(result, Err(Error::QuizDecode(_))));
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_empty_quiz_is_rejected() {
        let provider = StubGenerator::new(Quiz { questions: vec![] });
        let cache = QuizCache::new(10, 3600);

        let result = generate_quiz(&provider, &cache, &source()).await;
        assert!(matches!(result, Err(Error::QuizDecode(_))));
    }
}
