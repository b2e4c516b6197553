//! Upload ingestion: scratch cache, text extraction, chunking

pub mod chunker;
pub mod file_cache;
pub mod parser;

pub use chunker::TextSplitter;
pub use file_cache::FileCache;

use crate::error::Result;
use crate::types::source::{SourceDocument, SourceOrigin};

/// Acquire a source from an uploaded file.
///
/// Persists the raw bytes to the scratch cache (same name overwrites),
/// extracts the text and splits it into ordered chunks.
pub fn ingest_upload(
    cache: &FileCache,
    splitter: &TextSplitter,
    filename: &str,
    data: &[u8],
) -> Result<SourceDocument> {
    let path = cache.store(filename, data)?;
    tracing::info!("Cached upload {} ({} bytes)", path.display(), data.len());

    let content = parser::extract_text(filename, data)?;
    let chunks = splitter.split(&content);

    Ok(SourceDocument::new(
        filename,
        SourceOrigin::Upload {
            filename: filename.to_string(),
        },
        chunks,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingest_upload_registers_chunks() {
        let dir = tempfile::tempdir().unwrap();
        let cache = FileCache::new(dir.path());
        let splitter = TextSplitter::new("\n", 600, 100);

        let text = "The capital of France is Paris.\nIt sits on the Seine.";
        let doc = ingest_upload(&cache, &splitter, "france.txt", text.as_bytes()).unwrap();

        assert_eq!(doc.label, "france.txt");
        assert!(!doc.chunks.is_empty());
        assert_eq!(doc.chunks.join("\n"), text);
        assert!(dir.path().join("france.txt").exists());
    }

    #[test]
    fn test_ingest_upload_rejects_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let cache = FileCache::new(dir.path());
        let splitter = TextSplitter::new("\n", 600, 100);

        let result = ingest_upload(&cache, &splitter, "archive.zip", b"PK\x03\x04");
        assert!(result.is_err());
    }
}
