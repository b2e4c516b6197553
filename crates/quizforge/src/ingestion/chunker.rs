//! Separator-based text splitting with configurable size and overlap

use crate::config::ChunkingConfig;

/// Splits text on a separator into chunks of a target size, carrying a
/// character-bounded tail of each chunk into the next one as overlap.
///
/// Segments are never broken apart: a single segment longer than the target
/// size becomes its own oversize chunk. Every emitted chunk contains at
/// least one segment that is not overlap, so the chunk list covers the
/// source in order.
pub struct TextSplitter {
    separator: String,
    chunk_size: usize,
    overlap: usize,
}

impl TextSplitter {
    /// Create a new splitter. Sizes are measured in characters,
    /// separators included.
    pub fn new(separator: impl Into<String>, chunk_size: usize, overlap: usize) -> Self {
        Self {
            separator: separator.into(),
            chunk_size,
            overlap,
        }
    }

    /// Create from configuration
    pub fn from_config(config: &ChunkingConfig) -> Self {
        Self::new(
            config.separator.clone(),
            config.chunk_size,
            config.chunk_overlap,
        )
    }

    /// Split `text` into ordered chunks. Empty input yields no chunks;
    /// any non-empty input yields at least one.
    pub fn split(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }

        let sep_len = self.separator.chars().count();
        let mut chunks = Vec::new();
        let mut current: Vec<&str> = Vec::new();
        let mut current_len = 0usize;

        for segment in text.split(self.separator.as_str()) {
            let segment_len = segment.chars().count();
            let added = if current.is_empty() {
                segment_len
            } else {
                segment_len + sep_len
            };

            if !current.is_empty() && current_len + added > self.chunk_size {
                chunks.push(current.join(&self.separator));

                let keep = self.overlap_tail(&current, sep_len);
                current.drain(..current.len() - keep);
                current_len = joined_len(&current, sep_len);
            }

            current_len += if current.is_empty() {
                segment_len
            } else {
                segment_len + sep_len
            };
            current.push(segment);
        }

        if !current.is_empty() {
            chunks.push(current.join(&self.separator));
        }

        chunks
    }

    /// Number of trailing segments whose joined length fits within the
    /// configured overlap
    fn overlap_tail(&self, segments: &[&str], sep_len: usize) -> usize {
        let mut kept = 0usize;
        let mut kept_len = 0usize;

        for segment in segments.iter().rev() {
            let len = segment.chars().count() + if kept > 0 { sep_len } else { 0 };
            if kept_len + len > self.overlap {
                break;
            }
            kept_len += len;
            kept += 1;
        }

        kept
    }
}

fn joined_len(segments: &[&str], sep_len: usize) -> usize {
    if segments.is_empty() {
        return 0;
    }
    let text: usize = segments.iter().map(|s| s.chars().count()).sum();
    text + sep_len * (segments.len() - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_no_chunks() {
        let splitter = TextSplitter::new("\n", 600, 100);
        assert!(splitter.split("").is_empty());
    }

    #[test]
    fn test_small_input_yields_single_chunk() {
        let splitter = TextSplitter::new("\n", 600, 100);
        let text = "short line\nanother short line";
        assert_eq!(splitter.split(text), vec![text.to_string()]);
    }

    #[test]
    fn test_chunks_respect_target_size() {
        let splitter = TextSplitter::new("\n", 40, 0);
        let text: String = (0..20)
            .map(|i| format!("line number {:02}", i))
            .collect::<Vec<_>>()
            .join("\n");

        let chunks = splitter.split(&text);
        assert!(chunks.len() > 1);
        for chunk in &chunks {
            assert!(chunk.chars().count() <= 40, "oversize chunk: {:?}", chunk);
        }
    }

    #[test]
    fn test_concatenation_reproduces_source_without_overlap() {
        let splitter = TextSplitter::new("\n", 40, 0);
        let text: String = (0..30)
            .map(|i| format!("sentence {}", i))
            .collect::<Vec<_>>()
            .join("\n");

        let chunks = splitter.split(&text);
        assert_eq!(chunks.join("\n"), text);
    }

    #[test]
    fn test_overlap_repeats_trailing_segments() {
        let splitter = TextSplitter::new("\n", 40, 15);
        let text: String = (0..20)
            .map(|i| format!("line {:02}", i))
            .collect::<Vec<_>>()
            .join("\n");

        let chunks = splitter.split(&text);
        assert!(chunks.len() > 1);

        // Each chunk opens with a run of segments repeated from the end of
        // the previous chunk
        for pair in chunks.windows(2) {
            let segments: Vec<&str> = pair[1].split('\n').collect();
            let overlapped = (1..=segments.len())
                .any(|k| pair[0].ends_with(&segments[..k].join("\n")));
            assert!(
                overlapped,
                "expected {:?} to open with a tail of {:?}",
                pair[1], pair[0]
            );
        }
    }

    #[test]
    fn test_oversize_segment_becomes_own_chunk() {
        let splitter = TextSplitter::new("\n", 10, 0);
        let text = "tiny\nthis segment is far longer than ten characters\ntiny again";

        let chunks = splitter.split(&text);
        assert!(chunks
            .iter()
            .any(|c| c.contains("far longer than ten characters")));
        // Order is preserved
        assert_eq!(chunks.first().unwrap(), "tiny");
        assert_eq!(chunks.last().unwrap(), "tiny again");
    }

    #[test]
    fn test_default_config_constants() {
        let splitter = TextSplitter::from_config(&ChunkingConfig::default());
        assert_eq!(splitter.separator, "\n");
        assert_eq!(splitter.chunk_size, 600);
        assert_eq!(splitter.overlap, 100);
    }

    #[test]
    fn test_multichar_separator() {
        let splitter = TextSplitter::new("\n\n", 30, 0);
        let text = "first paragraph\n\nsecond paragraph\n\nthird";

        let chunks = splitter.split(text);
        assert_eq!(chunks.join("\n\n"), text);
    }
}
