//! Topic retrieval against external reference collections

pub mod wikipedia;

pub use wikipedia::{WikipediaArticle, WikipediaClient};
