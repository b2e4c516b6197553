//! Provider abstractions for the hosted completion collaborator

pub mod llm;
pub mod openai;

pub use llm::QuizGenerator;
pub use openai::OpenAiQuizClient;
