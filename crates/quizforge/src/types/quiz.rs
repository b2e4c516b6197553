//! Quiz types mirroring the `create_quiz` structured-output schema

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A generated quiz: an ordered list of questions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quiz {
    pub questions: Vec<QuizQuestion>,
}

/// One question with its candidate answers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub answers: Vec<QuizAnswer>,
}

/// One candidate answer with its correctness flag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizAnswer {
    pub answer: String,
    pub correct: bool,
}

/// Answers expected per question
pub const ANSWERS_PER_QUESTION: usize = 3;

impl Quiz {
    /// Validate the shape the model was asked for: a non-empty question
    /// list, three answers per question, exactly one flagged correct.
    pub fn validate(&self) -> Result<()> {
        if self.questions.is_empty() {
            return Err(Error::quiz_decode("quiz contains no questions"));
        }

        for (i, question) in self.questions.iter().enumerate() {
            if question.answers.len() != ANSWERS_PER_QUESTION {
                return Err(Error::quiz_decode(format!(
                    "question {} has {} answers, expected {}",
                    i + 1,
                    question.answers.len(),
                    ANSWERS_PER_QUESTION
                )));
            }

            let correct_count = question.answers.iter().filter(|a| a.correct).count();
            if correct_count != 1 {
                return Err(Error::quiz_decode(format!(
                    "question {} has {} answers flagged correct, expected exactly 1",
                    i + 1,
                    correct_count
                )));
            }
        }

        Ok(())
    }
}

impl QuizQuestion {
    /// The answer flagged correct, if the question carries one
    pub fn correct_answer(&self) -> Option<&QuizAnswer> {
        self.answers.iter().find(|a| a.correct)
    }
}
