//! Core types for the quiz service

pub mod quiz;
pub mod response;
pub mod source;

pub use quiz::{Quiz, QuizAnswer, QuizQuestion};
pub use response::{
    GradeRequest, GradeResponse, QuizRequest, QuizResponse, SourceSummary, UploadResponse,
    WikipediaRequest, WikipediaResponse,
};
pub use source::{FileType, SourceDocument, SourceOrigin};
