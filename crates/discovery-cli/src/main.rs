//! `discovery` command-line entry point

use anyhow::Context;
use std::process::ExitCode;

fn run() -> anyhow::Result<()> {
    let matches = discovery_cli::build_cli().get_matches();

    let config = discovery_cli::resolve_config(&matches).context("failed to load configuration")?;
    discovery_cli::logging::init(&config.logging)?;

    let mut stdout = std::io::stdout().lock();
    discovery_cli::execute(&matches, &config, &mut stdout)
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
