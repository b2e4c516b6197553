//! Configuration for the quiz service

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Main service configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Scratch cache configuration
    #[serde(default)]
    pub cache: CacheConfig,
    /// Chunking configuration
    #[serde(default)]
    pub chunking: ChunkingConfig,
    /// LLM configuration
    #[serde(default)]
    pub llm: LlmConfig,
    /// Wikipedia retrieval configuration
    #[serde(default)]
    pub wikipedia: WikipediaConfig,
}

impl QuizConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse {}: {}", path.display(), e)))
    }

    /// Load from a file when a path is given, defaults otherwise
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::default()),
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address
    pub host: String,
    /// Port number
    pub port: u16,
    /// Enable CORS
    pub enable_cors: bool,
    /// Maximum upload size in bytes (default: 20MB)
    pub max_upload_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            enable_cors: true,
            max_upload_size: 20 * 1024 * 1024, // 20MB
        }
    }
}

/// Scratch cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Directory for uploaded scratch files (one entry per file name, overwritten on collision)
    pub dir: PathBuf,
    /// Maximum number of memoized quizzes
    pub quiz_capacity: usize,
    /// Time-to-live for memoized quizzes in seconds
    pub quiz_ttl_secs: i64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(".cache/quiz_files"),
            quiz_capacity: 256,
            quiz_ttl_secs: 3600, // 1 hour
        }
    }
}

/// Text chunking configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkingConfig {
    /// Separator the splitter packs segments on
    pub separator: String,
    /// Target chunk size in characters
    pub chunk_size: usize,
    /// Overlap between chunks in characters
    pub chunk_overlap: usize,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            separator: "\n".to_string(),
            chunk_size: 600,
            chunk_overlap: 100,
        }
    }
}

/// LLM (OpenAI) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// API base URL
    pub base_url: String,
    /// Generation model name
    pub model: String,
    /// Temperature for generation
    pub temperature: f32,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// API key; falls back to the OPENAI_API_KEY environment variable
    #[serde(default)]
    pub api_key: Option<String>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-5-nano-2025-08-07".to_string(),
            temperature: 1.0,
            timeout_secs: 120,
            api_key: None,
        }
    }
}

impl LlmConfig {
    /// Resolve the API key from config or environment
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var("OPENAI_API_KEY").ok())
            .filter(|k| !k.trim().is_empty())
    }
}

/// Wikipedia retrieval configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WikipediaConfig {
    /// MediaWiki API endpoint
    pub api_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for WikipediaConfig {
    fn default() -> Self {
        Self {
            api_url: "https://en.wikipedia.org/w/api.php".to_string(),
            timeout_secs: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_source_constants() {
        let config = QuizConfig::default();
        assert_eq!(config.chunking.separator, "\n");
        assert_eq!(config.chunking.chunk_size, 600);
        assert_eq!(config.chunking.chunk_overlap, 100);
        assert_eq!(config.cache.dir, PathBuf::from(".cache/quiz_files"));
    }

    #[test]
    fn test_partial_toml_overrides() {
        let config: QuizConfig = toml::from_str(
            r#"
            [server]
            host = "127.0.0.1"
            port = 9090
            enable_cors = false
            max_upload_size = 1048576
            "#,
        )
        .unwrap();

        assert_eq!(config.server.port, 9090);
        // Untouched sections keep their defaults
        assert_eq!(config.chunking.chunk_size, 600);
        assert_eq!(config.llm.temperature, 1.0);
    }
}
