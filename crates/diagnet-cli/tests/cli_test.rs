//! Command tests against a temporary store and corpus.

use std::fs;
use std::io::Cursor;
use std::path::PathBuf;

use diagnet_cli::{parse_args, run, CliError};
use diagnet_core::config::DiagnetConfig;
use diagnet_core::errors::{DiagnetError, QueryError};
use tempfile::TempDir;

const CORPUS: &str = "\
Influenza has symptoms fever, cough, headache.
Common Cold has symptoms cough, sneezing.
this line does not parse
Migraine has symptoms headache, nausea.
";

struct Fixture {
    _dir: TempDir,
    corpus: PathBuf,
    config: DiagnetConfig,
}

fn fixture() -> Fixture {
    let dir = TempDir::new().unwrap();
    let corpus = dir.path().join("knowledge.txt");
    fs::write(&corpus, CORPUS).unwrap();
    let mut config = DiagnetConfig::default();
    config.storage.db_path = dir.path().join("diagnet.db").display().to_string();
    Fixture {
        _dir: dir,
        corpus,
        config,
    }
}

fn exec(fx: &Fixture, args: &[&str], stdin: &str) -> Result<String, CliError> {
    let cli = parse_args(args.iter().map(|s| s.to_string()))?;
    let mut input = Cursor::new(stdin.as_bytes().to_vec());
    let mut out = Vec::new();
    run(&cli, &fx.config, &mut input, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

fn ingested() -> Fixture {
    let fx = fixture();
    let corpus = fx.corpus.display().to_string();
    let out = exec(&fx, &["ingest", corpus.as_str()], "").unwrap();
    assert_eq!(out, "Ingested 7 relationships from 3 bundles (1 lines skipped)\n");
    fx
}

#[test]
fn check_reports_counts() {
    let fx = ingested();
    let out = exec(&fx, &["check"], "").unwrap();
    assert!(out.contains("causes: 3, effects: 5, relationships: 7"), "{out}");
}

#[test]
fn reingest_replaces_unless_appending() {
    let fx = ingested();
    let corpus = fx.corpus.display().to_string();
    let out = exec(&fx, &["ingest", corpus.as_str()], "").unwrap();
    assert!(out.starts_with("Ingested 7 "));
    let out = exec(&fx, &["ingest", corpus.as_str(), "--append"], "").unwrap();
    assert!(out.starts_with("Ingested 0 "));
}

#[test]
fn symptoms_are_sorted() {
    let fx = ingested();
    let out = exec(&fx, &["symptoms"], "").unwrap();
    let names: Vec<&str> = out.lines().collect();
    assert_eq!(names, vec!["cough", "fever", "headache", "nausea", "sneezing"]);
}

#[test]
fn diagnose_prints_ranked_causes() {
    let fx = ingested();
    let out = exec(&fx, &["diagnose", "fever,cough"], "").unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "--- Top Disease Predictions ---");
    assert!(lines[1].starts_with("Influenza: "), "{out}");
    assert!(lines.len() <= 4);
}

#[test]
fn diagnose_prompts_when_no_evidence_given() {
    let fx = ingested();
    let out = exec(&fx, &["diagnose"], "nausea\n").unwrap();
    assert!(out.contains("Enter symptoms (comma-separated): "));
    assert!(out.contains("Migraine: "));
    let out = exec(&fx, &["diagnose"], "\n").unwrap();
    assert!(out.ends_with("No symptoms entered.\n"));
}

#[test]
fn diagnose_rejects_unknown_symptoms() {
    let fx = ingested();
    let err = exec(&fx, &["diagnose", "fever, purple spots"], "").unwrap_err();
    match err {
        CliError::Diagnet(DiagnetError::Query(QueryError::UnknownEvidence { names })) => {
            assert_eq!(names, vec!["purple spots"]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn empty_store_cannot_build() {
    let fx = fixture();
    let err = exec(&fx, &["symptoms"], "").unwrap_err();
    assert!(matches!(err, CliError::Diagnet(DiagnetError::Model(_))));
}

#[test]
fn export_emits_json() {
    let fx = ingested();
    let out = exec(&fx, &["export"], "").unwrap();
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["causes"].as_array().unwrap().len(), 3);
    assert_eq!(json["edge_count"], 7);
}

#[test]
fn sampled_dataset_feeds_ingest_and_diagnose() {
    let fx = fixture();
    let dir = fx.corpus.parent().unwrap().to_path_buf();
    let data = dir.join("dataset.csv");
    let sampled = dir.join("sampled.txt");
    fs::write(
        &data,
        "diseases,fever,cough,rash\nFlu,1,1,0\nMeasles,1,0,1\nHealthy,0,0,0\nCold,0,1,0\n",
    )
    .unwrap();
    let (data, sampled) = (data.display().to_string(), sampled.display().to_string());

    let out = exec(&fx, &["sample", data.as_str(), sampled.as_str(), "--max", "10", "--seed", "3"], "")
        .unwrap();
    assert!(out.starts_with("Sampled 4 of 4 rows, wrote 3 lines to "), "{out}");
    let text = fs::read_to_string(&sampled).unwrap();
    assert_eq!(text.lines().count(), 3);
    assert!(text.lines().any(|l| l == "Flu has symptoms fever, cough."), "{text}");

    let out = exec(&fx, &["ingest", sampled.as_str()], "").unwrap();
    assert!(out.starts_with("Ingested 5 relationships from 3 bundles"), "{out}");
    let out = exec(&fx, &["diagnose", "rash"], "").unwrap();
    assert!(out.lines().nth(1).unwrap().starts_with("Measles: "), "{out}");
}

#[test]
fn sample_respects_row_cap() {
    let fx = fixture();
    let dir = fx.corpus.parent().unwrap().to_path_buf();
    let data = dir.join("dataset.csv");
    let sampled = dir.join("sampled.txt");
    let mut csv = String::from("diseases,fever\n");
    for i in 0..50 {
        csv.push_str(&format!("D{i},1\n"));
    }
    fs::write(&data, csv).unwrap();
    let (data, sampled) = (data.display().to_string(), sampled.display().to_string());

    exec(&fx, &["sample", data.as_str(), sampled.as_str(), "--max", "8"], "").unwrap();
    let text = fs::read_to_string(&sampled).unwrap();
    assert_eq!(text.lines().count(), 8);
    assert!(text.lines().all(|l| l.starts_with('D') && l.ends_with(" has symptoms fever.")));
}

#[test]
fn help_prints_version_and_usage() {
    let fx = fixture();
    let out = exec(&fx, &["help"], "").unwrap();
    assert!(out.starts_with(&format!("diagnet {}\n", diagnet_core::constants::VERSION)));
    assert!(out.contains("sample <data.csv> <out.txt>"));
}
