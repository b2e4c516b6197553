//! Quiz server binary
//!
//! Run with: cargo run -p quizforge --bin quizforge-server [config.toml]

use std::path::PathBuf;

use quizforge::{config::QuizConfig, server::QuizServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quizforge=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!(
        r#"
╔═══════════════════════════════════════════════════════════╗
║                        QuizForge                          ║
║      Multiple-choice quizzes from documents & wikis       ║
╚═══════════════════════════════════════════════════════════╝
"#
    );

    // Load configuration (optional TOML path as the first argument)
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = QuizConfig::load(config_path.as_deref())?;

    tracing::info!("Configuration loaded");
    tracing::info!("  - LLM model: {}", config.llm.model);
    tracing::info!(
        "  - Chunk size: {} (overlap {})",
        config.chunking.chunk_size,
        config.chunking.chunk_overlap
    );
    tracing::info!("  - Scratch dir: {}", config.cache.dir.display());
    tracing::info!("  - Wikipedia API: {}", config.wikipedia.api_url);

    if config.llm.resolve_api_key().is_none() {
        tracing::warn!("OPENAI_API_KEY is not set");
        tracing::warn!("Quiz generation will fail until a key is provided:");
        tracing::warn!("  export OPENAI_API_KEY=sk-...");
    }

    // Create the server, then probe the completion collaborator
    let server = QuizServer::new(config)?;

    match server.state().generator().health_check().await {
        Ok(true) => tracing::info!("Completion collaborator is reachable"),
        _ => tracing::warn!(
            "Completion collaborator is not reachable at {}",
            server.state().config().llm.base_url
        ),
    }

    println!("\nServer starting...");
    println!("  UI:     http://{}/", server.address());
    println!("  Health: http://{}/health", server.address());
    println!("  API:    http://{}/api/info", server.address());
    println!("\nEndpoints:");
    println!("  POST /api/sources/upload    - Upload a document");
    println!("  POST /api/sources/wikipedia - Search Wikipedia");
    println!("  POST /api/quiz              - Generate a quiz");
    println!("  POST /api/quiz/grade        - Grade answers");
    println!("\nPress Ctrl+C to stop\n");

    server.start().await?;

    Ok(())
}
