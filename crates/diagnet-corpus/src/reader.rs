//! Read a whole corpus file.

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use diagnet_core::errors::CorpusError;
use diagnet_core::{Fact, FactBundle};

use crate::parser::parse_line;

/// Parsed bundles plus the 1-based numbers of lines that did not parse.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CorpusReport {
    pub bundles: Vec<FactBundle>,
    pub skipped: Vec<usize>,
}

impl CorpusReport {
    /// Every bundle flattened into facts, in file order.
    pub fn facts(&self) -> Vec<Fact> {
        self.bundles.iter().flat_map(FactBundle::to_facts).collect()
    }

    pub fn fact_count(&self) -> usize {
        self.bundles.iter().map(|b| b.effects.len()).sum()
    }
}

/// Parse corpus text. Blank lines are ignored; unparseable lines are
/// logged and recorded in [`CorpusReport::skipped`].
pub fn read_corpus_str(text: &str) -> CorpusReport {
    let mut report = CorpusReport::default();
    for (i, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(line) {
            Some(bundle) => report.bundles.push(bundle),
            None => {
                warn!(line = i + 1, text = line.trim(), "unparseable corpus line");
                report.skipped.push(i + 1);
            }
        }
    }
    report
}

/// Read and parse a corpus file.
///
/// Fails if the file cannot be read or yields no bundle at all.
pub fn read_corpus(path: &Path) -> Result<CorpusReport, CorpusError> {
    let text = fs::read_to_string(path).map_err(|source| CorpusError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let report = read_corpus_str(&text);
    if report.bundles.is_empty() {
        return Err(CorpusError::Empty {
            path: path.to_path_buf(),
        });
    }
    info!(
        path = %path.display(),
        bundles = report.bundles.len(),
        facts = report.fact_count(),
        skipped = report.skipped.len(),
        "corpus read"
    );
    Ok(report)
}
