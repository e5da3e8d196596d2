//! # diagnet-cli
//!
//! Argument parsing and command execution for the `diagnet` binary.
//! Commands write to any `io::Write`, so they run the same in tests.

pub mod args;
pub mod commands;
pub mod error;

pub use args::{parse_args, Cli, Command, USAGE};
pub use commands::{load_config, run};
pub use error::CliError;
