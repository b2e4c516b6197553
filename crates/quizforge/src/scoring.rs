//! Per-question grading of submitted answer selections
//!
//! A pure, stateless comparison recomputed on every request: no cross
//! question score is held and nothing persists across sessions.

use serde::{Deserialize, Serialize};

use crate::types::quiz::Quiz;

/// Outcome for one question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// The selection matches an answer flagged correct
    Correct,
    /// A selection was made but matches no answer flagged correct
    Incorrect,
    /// No selection was made
    Unanswered,
}

/// Grade selections against a quiz, question by question in order.
/// Missing trailing selections count as unanswered; extra selections
/// beyond the question list are ignored.
pub fn grade(quiz: &Quiz, selections: &[Option<String>]) -> Vec<Verdict> {
    quiz.questions
        .iter()
        .enumerate()
        .map(|(i, question)| {
            match selections.get(i).and_then(|s| s.as_deref()) {
                Some(selected) => {
                    let matches_correct = question
                        .answers
                        .iter()
                        .any(|a| a.correct && a.answer == selected);
                    if matches_correct {
                        Verdict::Correct
                    } else {
                        Verdict::Incorrect
                    }
                }
                None => Verdict::Unanswered,
            }
        })
        .collect()
}
