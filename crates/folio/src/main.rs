//! Folio - Entry Point
//!
//! Loads configuration (defaults < `folio.toml` < `FOLIO_*` environment <
//! command line flags), sets up logging on stderr and dispatches the
//! subcommand. Reports go to stdout.
//!
//! Exit status: 0 on success, 1 when `check` fails, 2 on any other error.

use clap::Parser;
use folio::cli::{self, Cli, Outcome};
use folio::infrastructure::ConfigLoader;
use folio::infrastructure::logging::init_logging;
use std::io::Write;
use std::process::ExitCode;
use tracing::debug;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(Outcome::Success) => ExitCode::SUCCESS,
        Ok(Outcome::ChecksFailed) => ExitCode::from(1),
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<Outcome> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let mut config = loader.load()?;
    cli.apply_overrides(&mut config);

    init_logging(&config.logging)?;
    debug!(command = ?cli.command, root = %config.book.root.display(), "Starting");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let outcome = cli::run(&cli.command, &config, &mut out)?;
    out.flush()?;
    Ok(outcome)
}
