//! Source acquisition endpoints

use axum::{
    extract::{Multipart, Path, State},
    Json,
};

use crate::error::{Error, Result};
use crate::ingestion;
use crate::server::state::AppState;
use crate::types::response::{SourceSummary, UploadResponse, WikipediaRequest, WikipediaResponse};
use crate::types::source::{SourceDocument, SourceOrigin};

/// POST /api/sources/upload - Upload a file and register it as a source
pub async fn upload_source(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| Error::internal(format!("Failed to read multipart field: {}", e)))?
    {
        let Some(filename) = field.file_name().map(|s| s.to_string()) else {
            continue;
        };

        let data = field
            .bytes()
            .await
            .map_err(|e| Error::internal(format!("Failed to read upload: {}", e)))?;

        tracing::info!("Processing upload: {} ({} bytes)", filename, data.len());

        let doc = ingestion::ingest_upload(state.file_cache(), state.splitter(), &filename, &data)?;
        tracing::info!("Registered source '{}' ({} chunks)", doc.label, doc.chunks.len());

        let summary = SourceSummary::from(&doc);
        state.register_source(doc);
        return Ok(Json(UploadResponse { source: summary }));
    }

    Err(Error::InvalidRequest(
        "multipart body contains no file field".to_string(),
    ))
}

/// POST /api/sources/wikipedia - Register the top-matching article for a topic
pub async fn wikipedia_source(
    State(state): State<AppState>,
    Json(request): Json<WikipediaRequest>,
) -> Result<Json<WikipediaResponse>> {
    let topic = request.topic.trim().to_string();
    if topic.is_empty() {
        return Err(Error::InvalidRequest("topic must not be empty".to_string()));
    }

    let Some(article) = state.wikipedia().search_top_article(&topic).await? else {
        return Ok(Json(WikipediaResponse {
            found: false,
            source: None,
        }));
    };

    tracing::info!("Topic '{}' resolved to article '{}'", topic, article.title);

    let doc = SourceDocument::new(
        topic.clone(),
        SourceOrigin::Wikipedia {
            topic,
            title: article.title,
        },
        vec![article.extract],
    );

    let summary = SourceSummary::from(&doc);
    state.register_source(doc);

    Ok(Json(WikipediaResponse {
        found: true,
        source: Some(summary),
    }))
}

/// GET /api/sources - List registered sources
pub async fn list_sources(State(state): State<AppState>) -> Json<Vec<SourceSummary>> {
    let mut sources: Vec<SourceSummary> = state
        .list_sources()
        .iter()
        .map(SourceSummary::from)
        .collect();
    sources.sort_by(|a, b| a.label.cmp(&b.label));
    Json(sources)
}

/// GET /api/sources/:label - Get source details
pub async fn get_source(
    State(state): State<AppState>,
    Path(label): Path<String>,
) -> Result<Json<SourceSummary>> {
    state
        .get_source(&label)
        .map(|doc| Json(SourceSummary::from(&doc)))
        .ok_or(Error::SourceNotFound(label))
}
