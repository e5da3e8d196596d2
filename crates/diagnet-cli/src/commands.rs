//! Command execution.

use std::io::{BufRead, Write};
use std::path::Path;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use diagnet_core::config::DiagnetConfig;
use diagnet_core::constants::{DB_ENV_VAR, VERSION};
use diagnet_corpus::{read_corpus, sample_to_corpus};
use diagnet_model::{build_from_source, Diagnoser, DiagnosticModel, EvidenceSet, ModelSummary};
use diagnet_storage::FactStore;

use crate::args::{Cli, Command, USAGE};
use crate::error::CliError;

/// Load the config file if one was given, then apply the `DIAGNET_DB`
/// override.
pub fn load_config(path: Option<&Path>) -> Result<DiagnetConfig, CliError> {
    let mut config = match path {
        Some(path) => DiagnetConfig::from_file(path)?,
        None => DiagnetConfig::default(),
    };
    if let Ok(db_path) = std::env::var(DB_ENV_VAR) {
        if !db_path.trim().is_empty() {
            config.storage.db_path = db_path;
        }
    }
    config.validate()?;
    Ok(config)
}

/// Execute one command. Prompts read from `input`; all output goes to `out`.
pub fn run<R, W>(cli: &Cli, config: &DiagnetConfig, input: &mut R, out: &mut W) -> Result<(), CliError>
where
    R: BufRead,
    W: Write,
{
    match &cli.command {
        Command::Help => writeln!(out, "diagnet {VERSION}\n{USAGE}")?,
        Command::Sample {
            dataset,
            output,
            max_rows,
            seed,
        } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(*seed),
                None => StdRng::from_entropy(),
            };
            let report = sample_to_corpus(dataset, output, *max_rows, &mut rng)?;
            writeln!(
                out,
                "Sampled {} of {} rows, wrote {} lines to {}",
                report.sampled,
                report.total_rows,
                report.bundles.len(),
                output.display()
            )?;
        }
        Command::Ingest { corpus, append } => ingest(config, corpus, *append, out)?,
        Command::Check => {
            let stats = open_store(config)?.stats()?;
            writeln!(out, "Connection successful.")?;
            writeln!(
                out,
                "causes: {}, effects: {}, relationships: {}",
                stats.causes, stats.effects, stats.relationships
            )?;
        }
        Command::Symptoms => {
            let model = build(config)?;
            for name in model.effect_names() {
                writeln!(out, "{name}")?;
            }
        }
        Command::Diagnose { evidence } => diagnose(config, evidence.as_deref(), input, out)?,
        Command::Export => {
            let model = build(config)?;
            writeln!(out, "{}", ModelSummary::from_model(&model).to_json_pretty()?)?;
        }
    }
    Ok(())
}

fn open_store(config: &DiagnetConfig) -> Result<FactStore, CliError> {
    Ok(FactStore::open(Path::new(&config.storage.db_path))?)
}

fn build(config: &DiagnetConfig) -> Result<DiagnosticModel, CliError> {
    let store = open_store(config)?;
    Ok(build_from_source(&store, &config.model)?)
}

fn ingest<W: Write>(
    config: &DiagnetConfig,
    corpus: &Path,
    append: bool,
    out: &mut W,
) -> Result<(), CliError> {
    let report = read_corpus(corpus)?;
    let store = open_store(config)?;
    if !append {
        store.clear()?;
    }
    let added = store.merge_bundles(&report.bundles)?;
    info!(added, bundles = report.bundles.len(), "corpus ingested");
    writeln!(
        out,
        "Ingested {added} relationships from {} bundles ({} lines skipped)",
        report.bundles.len(),
        report.skipped.len()
    )?;
    Ok(())
}

fn diagnose<R, W>(
    config: &DiagnetConfig,
    evidence: Option<&str>,
    input: &mut R,
    out: &mut W,
) -> Result<(), CliError>
where
    R: BufRead,
    W: Write,
{
    let model = build(config)?;

    let text = match evidence {
        Some(text) => text.to_string(),
        None => {
            writeln!(out, "Available symptoms:")?;
            writeln!(out, "{}", model.effect_names().join(", "))?;
            write!(out, "Enter symptoms (comma-separated): ")?;
            out.flush()?;
            let mut line = String::new();
            input.read_line(&mut line)?;
            line
        }
    };

    let evidence = EvidenceSet::parse(&text);
    if evidence.is_empty() {
        writeln!(out, "No symptoms entered.")?;
        return Ok(());
    }

    let result = Diagnoser::new(&model, config.query.clone()).diagnose(&evidence)?;
    if result.is_empty() {
        writeln!(out, "No relevant diseases found in the model.")?;
        return Ok(());
    }
    writeln!(out, "--- Top Disease Predictions ---")?;
    for diagnosis in &result {
        writeln!(out, "{diagnosis}")?;
    }
    Ok(())
}
