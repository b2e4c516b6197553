//! Source documents: acquired text registered for quiz generation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Supported upload file types
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    /// PDF document
    Pdf,
    /// Microsoft Word document (.docx)
    Docx,
    /// Plain text file
    Txt,
    /// Unknown file type
    Unknown,
}

impl FileType {
    /// Detect file type from extension
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "pdf" => Self::Pdf,
            "docx" => Self::Docx,
            "txt" => Self::Txt,
            _ => Self::Unknown,
        }
    }

    /// Detect file type from a file name
    pub fn from_filename(filename: &str) -> Self {
        let extension = filename.rsplit('.').next().unwrap_or("");
        if extension == filename {
            // No dot at all
            return Self::Unknown;
        }
        Self::from_extension(extension)
    }

    /// Check if this is a supported file type
    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// Get display name
    pub fn display_name(&self) -> &str {
        match self {
            Self::Pdf => "PDF",
            Self::Docx => "Word Document (.docx)",
            Self::Txt => "Text File",
            Self::Unknown => "Unknown",
        }
    }
}

/// Where a source document came from
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SourceOrigin {
    /// Uploaded file, persisted in the scratch cache
    Upload { filename: String },
    /// Top-ranked Wikipedia article for a topic
    Wikipedia { topic: String, title: String },
}

/// A registered acquisition result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceDocument {
    /// Unique ID
    pub id: Uuid,
    /// Registry label: the file name or the searched topic
    pub label: String,
    /// Origin of the text
    pub origin: SourceOrigin,
    /// Ordered text chunks
    pub chunks: Vec<String>,
    /// SHA-256 over the chunk contents, hex encoded
    pub content_hash: String,
    /// When the source was acquired
    pub acquired_at: DateTime<Utc>,
}

impl SourceDocument {
    /// Register a new source from ordered chunks
    pub fn new(label: impl Into<String>, origin: SourceOrigin, chunks: Vec<String>) -> Self {
        let content_hash = Self::fingerprint(&chunks);
        Self {
            id: Uuid::new_v4(),
            label: label.into(),
            origin,
            chunks,
            content_hash,
            acquired_at: Utc::now(),
        }
    }

    /// Content fingerprint used as the memoization key component
    pub fn fingerprint(chunks: &[String]) -> String {
        let mut hasher = Sha256::new();
        for chunk in chunks {
            hasher.update(chunk.as_bytes());
            hasher.update([0u8]);
        }
        hex::encode(hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_type_detection() {
        assert_eq!(FileType::from_filename("notes.txt"), FileType::Txt);
        assert_eq!(FileType::from_filename("paper.PDF"), FileType::Pdf);
        assert_eq!(FileType::from_filename("thesis.docx"), FileType::Docx);
        assert_eq!(FileType::from_filename("archive.zip"), FileType::Unknown);
        assert_eq!(FileType::from_filename("no_extension"), FileType::Unknown);
    }

    #[test]
    fn test_fingerprint_is_content_derived() {
        let a = SourceDocument::fingerprint(&["alpha".to_string(), "beta".to_string()]);
        let b = SourceDocument::fingerprint(&["alpha".to_string(), "beta".to_string()]);
        let c = SourceDocument::fingerprint(&["alphabeta".to_string()]);

        assert_eq!(a, b);
        // Chunk boundaries are part of the fingerprint
        assert_ne!(a, c);
    }

    #[test]
    fn test_same_content_same_hash_across_documents() {
        let chunks = vec!["the text".to_string()];
        let doc_a = SourceDocument::new(
            "a.txt",
            SourceOrigin::Upload {
                filename: "a.txt".to_string(),
            },
            chunks.clone(),
        );
        let doc_b = SourceDocument::new(
            "b.txt",
            SourceOrigin::Upload {
                filename: "b.txt".to_string(),
            },
            chunks,
        );

        assert_eq!(doc_a.content_hash, doc_b.content_hash);
        assert_ne!(doc_a.id, doc_b.id);
    }
}
