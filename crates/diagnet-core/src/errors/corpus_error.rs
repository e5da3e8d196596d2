//! Knowledge corpus errors.

use std::path::PathBuf;

use super::error_code::{self, DiagnetErrorCode};

/// Errors that can occur while reading or writing a knowledge corpus.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("IO error on corpus {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Corpus {path} contains no parseable lines")]
    Empty { path: PathBuf },

    #[error("Malformed dataset {path}: {message}")]
    Dataset { path: PathBuf, message: String },
}

impl DiagnetErrorCode for CorpusError {
    fn error_code(&self) -> &'static str {
        error_code::CORPUS_ERROR
    }
}
