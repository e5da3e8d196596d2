//! Corpus file as a fact source.

use std::path::{Path, PathBuf};

use diagnet_core::{DiagnetResult, Fact, FactSource};

use crate::reader::read_corpus;

/// Reads the corpus on every fetch, so edits to the file are picked up by
/// the next model build.
#[derive(Debug, Clone)]
pub struct CorpusFactSource {
    path: PathBuf,
}

impl CorpusFactSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FactSource for CorpusFactSource {
    fn fetch_facts(&self) -> DiagnetResult<Vec<Fact>> {
        Ok(read_corpus(&self.path)?.facts())
    }

    fn describe(&self) -> String {
        format!("corpus {}", self.path.display())
    }
}
