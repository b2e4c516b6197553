//! quizforge: multiple-choice quiz generation from documents and Wikipedia
//!
//! This crate provides a small demo web service. A source text is acquired
//! either from an uploaded file (.pdf, .txt, .docx) or from the top-matching
//! Wikipedia article for a topic, split into overlapping chunks, and handed
//! to a hosted language model that is forced to answer through a structured
//! `create_quiz` call. Submitted answers are graded per question.

pub mod config;
pub mod error;
pub mod generation;
pub mod ingestion;
pub mod providers;
pub mod retrieval;
pub mod scoring;
pub mod server;
pub mod types;

pub use config::QuizConfig;
pub use error::{Error, Result};
pub use types::{
    quiz::{Quiz, QuizAnswer, QuizQuestion},
    source::{FileType, SourceDocument, SourceOrigin},
};
