//! Application state for the quiz server

use dashmap::DashMap;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::config::QuizConfig;
use crate::error::Result;
use crate::generation::QuizCache;
use crate::ingestion::{FileCache, TextSplitter};
use crate::providers::{OpenAiQuizClient, QuizGenerator};
use crate::retrieval::WikipediaClient;
use crate::types::source::SourceDocument;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Configuration
    config: QuizConfig,
    /// Scratch cache for uploaded files
    file_cache: FileCache,
    /// Text splitter for uploads
    splitter: TextSplitter,
    /// Wikipedia retrieval client
    wikipedia: WikipediaClient,
    /// Quiz generation provider
    generator: Arc<dyn QuizGenerator>,
    /// Memo cache for generated quizzes
    quiz_cache: QuizCache,
    /// Source registry keyed by label (file name or topic)
    sources: DashMap<String, SourceDocument>,
    /// Ready state
    ready: RwLock<bool>,
}

impl AppState {
    /// Create application state with the configured OpenAI provider
    pub fn new(config: QuizConfig) -> Result<Self> {
        let api_key = config.llm.resolve_api_key().unwrap_or_default();
        if api_key.is_empty() {
            tracing::warn!(
                "No OpenAI API key configured; quiz generation will fail until OPENAI_API_KEY is set"
            );
        }

        let generator: Arc<dyn QuizGenerator> =
            Arc::new(OpenAiQuizClient::new(&config.llm, api_key));
        Ok(Self::with_generator(config, generator))
    }

    /// Create application state around an explicit generator
    pub fn with_generator(config: QuizConfig, generator: Arc<dyn QuizGenerator>) -> Self {
        tracing::info!(
            "Initializing application state (provider: {}, model: {})",
            generator.name(),
            generator.model()
        );

        let file_cache = FileCache::new(config.cache.dir.clone());
        let splitter = TextSplitter::from_config(&config.chunking);
        let wikipedia = WikipediaClient::new(&config.wikipedia);
        let quiz_cache = QuizCache::new(config.cache.quiz_capacity, config.cache.quiz_ttl_secs);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                file_cache,
                splitter,
                wikipedia,
                generator,
                quiz_cache,
                sources: DashMap::new(),
                ready: RwLock::new(true),
            }),
        }
    }

    /// Get configuration
    pub fn config(&self) -> &QuizConfig {
        &self.inner.config
    }

    /// Get the scratch file cache
    pub fn file_cache(&self) -> &FileCache {
        &self.inner.file_cache
    }

    /// Get the text splitter
    pub fn splitter(&self) -> &TextSplitter {
        &self.inner.splitter
    }

    /// Get the Wikipedia client
    pub fn wikipedia(&self) -> &WikipediaClient {
        &self.inner.wikipedia
    }

    /// Get the quiz generator
    pub fn generator(&self) -> &Arc<dyn QuizGenerator> {
        &self.inner.generator
    }

    /// Get the quiz memo cache
    pub fn quiz_cache(&self) -> &QuizCache {
        &self.inner.quiz_cache
    }

    /// Register a source under its label, replacing any prior entry
    pub fn register_source(&self, doc: SourceDocument) {
        self.inner.sources.insert(doc.label.clone(), doc);
    }

    /// Look up a source by label
    pub fn get_source(&self, label: &str) -> Option<SourceDocument> {
        self.inner.sources.get(label).map(|d| d.clone())
    }

    /// List all registered sources
    pub fn list_sources(&self) -> Vec<SourceDocument> {
        self.inner
            .sources
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }

    /// Check if the server is ready
    pub fn is_ready(&self) -> bool {
        *self.inner.ready.read()
    }

    /// Set ready state
    pub fn set_ready(&self, ready: bool) {
        *self.inner.ready.write() = ready;
    }
}
