//! Hand-rolled argument parsing.

use std::path::PathBuf;
use std::str::FromStr;

use diagnet_core::constants::DEFAULT_SAMPLE_ROWS;

use crate::error::CliError;

pub const USAGE: &str = "\
usage: diagnet [--config <file.toml>] <command>

commands:
  sample <data.csv> <out.txt> [--max N] [--seed N]
                                   draw a corpus from a disease/symptom dataset
  ingest <corpus.txt> [--append]   load a knowledge corpus into the store
  check                            print node and relationship counts
  symptoms                         list the effects known to the model
  diagnose [<s1,s2,...>]           rank causes for the given effects
  export                           print the built model as JSON
  help                             show this message";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Sample {
        dataset: PathBuf,
        output: PathBuf,
        max_rows: usize,
        seed: Option<u64>,
    },
    Ingest { corpus: PathBuf, append: bool },
    Check,
    Symptoms,
    Diagnose { evidence: Option<String> },
    Export,
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cli {
    pub config: Option<PathBuf>,
    pub command: Command,
}

/// Parse arguments, excluding the program name.
pub fn parse_args<I>(args: I) -> Result<Cli, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut config = None;
    let mut positional = Vec::new();
    let mut append = false;
    let mut max_rows: Option<usize> = None;
    let mut seed: Option<u64> = None;
    let mut help = false;

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args
                    .next()
                    .ok_or_else(|| CliError::Usage("--config needs a file path".to_string()))?;
                config = Some(PathBuf::from(path));
            }
            "--append" => append = true,
            "--max" => max_rows = Some(number(&mut args, "--max")?),
            "--seed" => seed = Some(number(&mut args, "--seed")?),
            "-h" | "--help" => help = true,
            flag if flag.starts_with("--") => {
                return Err(CliError::Usage(format!("unknown option {flag}")));
            }
            _ => positional.push(arg),
        }
    }

    if help {
        return Ok(Cli {
            config,
            command: Command::Help,
        });
    }

    let mut positional = positional.into_iter();
    let command = match positional.next().as_deref() {
        None | Some("help") => Command::Help,
        Some("sample") => {
            let mut path = |what: &str| {
                positional
                    .next()
                    .map(PathBuf::from)
                    .ok_or_else(|| CliError::Usage(format!("sample needs {what}")))
            };
            let dataset = path("a dataset file")?;
            let output = path("an output file")?;
            Command::Sample {
                dataset,
                output,
                max_rows: max_rows.unwrap_or(DEFAULT_SAMPLE_ROWS),
                seed,
            }
        }
        Some("ingest") => Command::Ingest {
            corpus: positional
                .next()
                .map(PathBuf::from)
                .ok_or_else(|| CliError::Usage("ingest needs a corpus file".to_string()))?,
            append,
        },
        Some("check") => Command::Check,
        Some("symptoms") => Command::Symptoms,
        Some("diagnose") => {
            let rest: Vec<String> = positional.by_ref().collect();
            Command::Diagnose {
                evidence: (!rest.is_empty()).then(|| rest.join(" ")),
            }
        }
        Some("export") => Command::Export,
        Some(other) => return Err(CliError::Usage(format!("unknown command {other}"))),
    };

    if let Some(extra) = positional.next() {
        return Err(CliError::Usage(format!("unexpected argument {extra}")));
    }
    if append && !matches!(command, Command::Ingest { .. }) {
        return Err(CliError::Usage("--append only applies to ingest".to_string()));
    }
    if (max_rows.is_some() || seed.is_some()) && !matches!(command, Command::Sample { .. }) {
        return Err(CliError::Usage("--max and --seed only apply to sample".to_string()));
    }

    Ok(Cli { config, command })
}

fn number<I, T>(args: &mut I, flag: &str) -> Result<T, CliError>
where
    I: Iterator<Item = String>,
    T: FromStr,
{
    let value = args
        .next()
        .ok_or_else(|| CliError::Usage(format!("{flag} needs a number")))?;
    value
        .parse()
        .map_err(|_| CliError::Usage(format!("{flag} expects a non-negative integer, got {value}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, CliError> {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn parses_ingest_with_append_and_config() {
        let cli = parse(&["--config", "d.toml", "ingest", "k.txt", "--append"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("d.toml")));
        assert_eq!(
            cli.command,
            Command::Ingest {
                corpus: PathBuf::from("k.txt"),
                append: true
            }
        );
    }

    #[test]
    fn parses_sample_with_defaults_and_flags() {
        let cli = parse(&["sample", "d.csv", "k.txt"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Sample {
                dataset: PathBuf::from("d.csv"),
                output: PathBuf::from("k.txt"),
                max_rows: DEFAULT_SAMPLE_ROWS,
                seed: None,
            }
        );
        let cli = parse(&["sample", "--max", "20", "d.csv", "k.txt", "--seed", "7"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Sample {
                dataset: PathBuf::from("d.csv"),
                output: PathBuf::from("k.txt"),
                max_rows: 20,
                seed: Some(7),
            }
        );
    }

    #[test]
    fn diagnose_joins_remaining_words() {
        let cli = parse(&["diagnose", "fever,", "dry", "cough"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Diagnose {
                evidence: Some("fever, dry cough".to_string())
            }
        );
        let cli = parse(&["diagnose"]).unwrap();
        assert_eq!(cli.command, Command::Diagnose { evidence: None });
    }

    #[test]
    fn empty_args_show_help() {
        assert_eq!(parse(&[]).unwrap().command, Command::Help);
        assert_eq!(parse(&["check", "--help"]).unwrap().command, Command::Help);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(parse(&["frobnicate"]), Err(CliError::Usage(_))));
        assert!(matches!(parse(&["ingest"]), Err(CliError::Usage(_))));
        assert!(matches!(parse(&["check", "extra"]), Err(CliError::Usage(_))));
        assert!(matches!(parse(&["check", "--append"]), Err(CliError::Usage(_))));
        assert!(matches!(parse(&["--config"]), Err(CliError::Usage(_))));
        assert!(matches!(parse(&["--verbose", "check"]), Err(CliError::Usage(_))));
        assert!(matches!(parse(&["sample", "d.csv"]), Err(CliError::Usage(_))));
        assert!(matches!(parse(&["sample", "d.csv", "k.txt", "--max"]), Err(CliError::Usage(_))));
        assert!(matches!(parse(&["sample", "d.csv", "k.txt", "--max", "-1"]), Err(CliError::Usage(_))));
        assert!(matches!(parse(&["check", "--seed", "3"]), Err(CliError::Usage(_))));
    }
}
