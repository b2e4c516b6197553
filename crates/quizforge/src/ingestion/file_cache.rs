//! On-disk scratch cache for uploaded files
//!
//! One entry per file name; uploading the same name overwrites the previous
//! entry. There is no eviction: the directory grows with distinct names.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Scratch file cache keyed by file name
#[derive(Debug, Clone)]
pub struct FileCache {
    dir: PathBuf,
}

impl FileCache {
    /// Create a cache rooted at `dir`. The directory is created lazily on
    /// the first store.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Cache root directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write uploaded bytes to `<dir>/<filename>`, overwriting any prior
    /// entry of the same name. Returns the written path.
    pub fn store(&self, filename: &str, data: &[u8]) -> Result<PathBuf> {
        validate_filename(filename)?;

        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(filename);
        fs::write(&path, data)?;

        Ok(path)
    }
}

/// File names must be plain names, not paths
fn validate_filename(filename: &str) -> Result<()> {
    if filename.is_empty() {
        return Err(Error::InvalidRequest("file name must not be empty".into()));
    }
    if filename.contains('/') || filename.contains('\\') || filename == "." || filename == ".." {
        return Err(Error::InvalidRequest(format!(
            "invalid file name: {}",
            filename
        )));
    }
    Ok(())
}
