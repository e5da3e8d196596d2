//! Draw a corpus from a tabular disease/symptom dataset.
//!
//! The dataset is a CSV file with a cause column (`diseases`) and one
//! column per effect holding `1` when the effect is present. A uniform
//! random subset of rows becomes one corpus line each.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info};

use diagnet_core::constants::DATASET_CAUSE_COLUMN;
use diagnet_core::errors::CorpusError;
use diagnet_core::FactBundle;

use crate::writer::write_corpus;

/// Outcome of sampling a dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SampleReport {
    /// One bundle per drawn row with a cause and at least one effect.
    pub bundles: Vec<FactBundle>,
    /// Rows drawn from the dataset, including dropped ones.
    pub sampled: usize,
    /// Rows in the dataset.
    pub total_rows: usize,
}

impl SampleReport {
    pub fn dropped(&self) -> usize {
        self.sampled - self.bundles.len()
    }
}

/// Sample up to `max_rows` rows of the dataset at `path`.
pub fn sample_dataset<R>(path: &Path, max_rows: usize, rng: &mut R) -> Result<SampleReport, CorpusError>
where
    R: Rng + ?Sized,
{
    let file = File::open(path).map_err(|source| CorpusError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    sample_reader(file, path, max_rows, rng)
}

/// Sample from any CSV byte stream. `path` only labels errors.
pub fn sample_reader<D, R>(
    data: D,
    path: &Path,
    max_rows: usize,
    rng: &mut R,
) -> Result<SampleReport, CorpusError>
where
    D: Read,
    R: Rng + ?Sized,
{
    let malformed = |message: String| CorpusError::Dataset {
        path: path.to_path_buf(),
        message,
    };

    let mut reader = csv::Reader::from_reader(data);
    let headers = reader.headers().map_err(|e| malformed(e.to_string()))?.clone();
    let cause_col = headers
        .iter()
        .position(|h| h == DATASET_CAUSE_COLUMN)
        .ok_or_else(|| malformed(format!("missing `{DATASET_CAUSE_COLUMN}` column")))?;

    let rows = reader
        .records()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| malformed(e.to_string()))?;

    let amount = max_rows.min(rows.len());
    let mut bundles = Vec::with_capacity(amount);
    for row in rows.choose_multiple(rng, amount) {
        let cause = row.get(cause_col).map(str::trim).unwrap_or_default();
        let effects: Vec<String> = headers
            .iter()
            .zip(row.iter())
            .enumerate()
            .filter(|(i, (_, value))| *i != cause_col && value.trim() == "1")
            .map(|(_, (name, _))| name.to_string())
            .collect();
        if cause.is_empty() || effects.is_empty() {
            debug!(cause, "sampled row has no cause or no effects");
            continue;
        }
        bundles.push(FactBundle::new(cause, effects));
    }

    Ok(SampleReport {
        bundles,
        sampled: amount,
        total_rows: rows.len(),
    })
}

/// Sample `dataset` and write the result as a corpus at `out`.
pub fn sample_to_corpus<R>(
    dataset: &Path,
    out: &Path,
    max_rows: usize,
    rng: &mut R,
) -> Result<SampleReport, CorpusError>
where
    R: Rng + ?Sized,
{
    let report = sample_dataset(dataset, max_rows, rng)?;
    write_corpus(out, &report.bundles)?;
    info!(
        sampled = report.sampled,
        written = report.bundles.len(),
        total = report.total_rows,
        "dataset sampled"
    );
    Ok(report)
}
