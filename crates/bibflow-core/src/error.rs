//! Error types
//!
//! Malformed bibliography input never produces an error; it degrades to
//! opaque records or absent fields. The errors here come from the edges:
//! the file system and configuration.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;

/// Top-level error type
#[derive(Error, Debug)]
pub enum BibflowError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid path: {0} has no file name")]
    InvalidPath(PathBuf),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl BibflowError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BibflowError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, BibflowError>;
