use std::io;
use std::process::ExitCode;

use diagnet_cli::{load_config, parse_args, run, CliError};
use diagnet_core::errors::DiagnetErrorCode;
use diagnet_core::tracing::init_tracing;

fn main() -> ExitCode {
    init_tracing();
    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.diagnostic());
            ExitCode::FAILURE
        }
    }
}

fn try_main() -> Result<(), CliError> {
    let cli = parse_args(std::env::args().skip(1))?;
    let config = load_config(cli.config.as_deref())?;
    let mut input = io::stdin().lock();
    let mut out = io::stdout().lock();
    run(&cli, &config, &mut input, &mut out)
}
