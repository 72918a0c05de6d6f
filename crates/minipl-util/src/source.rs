//! Source-file loading.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Error raised when the source file cannot be read.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// A loaded Mini-PL source file.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    pub text: String,
}

impl SourceFile {
    /// Reads the file as raw bytes and converts lossily to UTF-8.
    ///
    /// Scanning never fails globally, so undecodable bytes must surface
    /// later as unidentified-token errors rather than abort the run here.
    pub fn load(path: &Path) -> Result<Self, SourceError> {
        let bytes = std::fs::read(path).map_err(|source| SourceError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            text: String::from_utf8_lossy(&bytes).into_owned(),
        })
    }
}
