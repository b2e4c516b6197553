//! Quiz generation and grading endpoints

use axum::{extract::State, Json};

use crate::error::{Error, Result};
use crate::generation;
use crate::scoring;
use crate::server::state::AppState;
use crate::types::response::{GradeRequest, GradeResponse, QuizRequest, QuizResponse};

/// POST /api/quiz - Generate (or re-serve a memoized) quiz for a source
pub async fn generate(
    State(state): State<AppState>,
    Json(request): Json<QuizRequest>,
) -> Result<Json<QuizResponse>> {
    let source = state
        .get_source(&request.source)
        .ok_or_else(|| Error::SourceNotFound(request.source.clone()))?;

    let (quiz, cached) =
        generation::generate_quiz(state.generator().as_ref(), state.quiz_cache(), &source).await?;

    Ok(Json(QuizResponse {
        source: source.label,
        cached,
        quiz,
    }))
}

/// POST /api/quiz/grade - Grade answer selections for a source's quiz
///
/// Grades against the memoized quiz for the source, so the verdicts refer
/// to the same questions the client was shown.
pub async fn grade_submission(
    State(state): State<AppState>,
    Json(request): Json<GradeRequest>,
) -> Result<Json<GradeResponse>> {
    let source = state
        .get_source(&request.source)
        .ok_or_else(|| Error::SourceNotFound(request.source.clone()))?;

    let (quiz, _) =
        generation::generate_quiz(state.generator().as_ref(), state.quiz_cache(), &source).await?;

    let verdicts = scoring::grade(&quiz, &request.selections);

    Ok(Json(GradeResponse {
        source: source.label,
        verdicts,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::QuizConfig;
    use crate::providers::QuizGenerator;
    use crate::scoring::Verdict;
    use crate::types::quiz::{Quiz, QuizAnswer, QuizQuestion};
    use crate::types::source::{SourceDocument, SourceOrigin};
    use async_trait::async_trait;
    use std::sync::Arc;

    struct StubGenerator;

    #[async_trait]
    impl QuizGenerator for StubGenerator {
        async fn generate_quiz(&self, _context: &str) -> crate::error::Result<Quiz> {
            Ok(Quiz {
                questions: vec![QuizQuestion {
                    question: "Capital of France?".to_string(),
                    answers: vec![
                        QuizAnswer {
                            answer: "Berlin".to_string(),
                            correct: false,
                        },
                        QuizAnswer {
                            answer: "Paris".to_string(),
                            correct: true,
                        },
                        QuizAnswer {
                            answer: "Madrid".to_string(),
                            correct: false,
                        },
                    ],
                }],
            })
        }

        async fn health_check(&self) -> crate::error::Result<bool> {
            Ok(true)
        }

        fn name(&self) -> &str {
            "stub"
        }

        fn model(&self) -> &str {
            "stub-model"
        }
    }

    fn state_with_source() -> AppState {
        let state = AppState::with_generator(QuizConfig::default(), Arc::new(StubGenerator));
        state.register_source(SourceDocument::new(
            "france.txt",
            SourceOrigin::Upload {
                filename: "france.txt".to_string(),
            },
            vec!["Paris is the capital of France.".to_string()],
        ));
        state
    }

    #[tokio::test]
    async fn test_generate_unknown_source_is_not_found() {
        let state = state_with_source();
        let result = generate(
            State(state),
            Json(QuizRequest {
                source: "missing".to_string(),
            }),
        )
        .await;

        assert!(matches!(result, Err(Error::SourceNotFound(_))));
    }

    #[tokio::test]
    async fn test_generate_then_regenerate_hits_cache() {
        let state = state_with_source();

        let first = generate(
            State(state.clone()),
            Json(QuizRequest {
                source: "france.txt".to_string(),
            }),
        )
        .await
        .unwrap();
        assert!(!first.0.cached);

        let second = generate(
            State(state),
            Json(QuizRequest {
                source: "france.txt".to_string(),
            }),
        )
        .await
        .unwrap();
        assert!(second.0.cached);
        assert_eq!(first.0.quiz, second.0.quiz);
    }

    #[tokio::test]
    async fn test_grade_scores_against_memoized_quiz() {
        let state = state_with_source();

        let response = grade_submission(
            State(state),
            Json(GradeRequest {
                source: "france.txt".to_string(),
                selections: vec![Some("Paris".to_string())],
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.0.verdicts, vec![Verdict::Correct]);
    }
}
