//! CLI entry point - the composition root.
//!
//! Reads the access token, builds the hub client and runs a single snapshot.
//! Any failure terminates the process with the mapped exit code.

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

use hfsnap_cli::presentation::{SnapshotProgressPrinter, format_summary};
use hfsnap_cli::{Cli, CliError, build_fetcher, handlers, logging};

async fn run(cli: &Cli) -> Result<(), CliError> {
    let printer = Arc::new(SnapshotProgressPrinter::new());
    let fetcher = build_fetcher(Some(printer.callback()), cli.request_timeout())?;

    let result =
        handlers::fetch::execute(fetcher.as_ref(), cli.snapshot_request(), &cli.token_file).await;
    printer.finish();

    let report = result?;
    println!("{}", format_summary(&report));
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Load environment variables before clap reads its env fallbacks
    if let Err(err) = dotenvy::dotenv() {
        if !err.not_found() {
            return Err(anyhow::Error::new(err).context("failed to load .env"));
        }
    }

    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    match run(&cli).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            tracing::error!("{err}");
            let code = u8::try_from(err.exit_code()).unwrap_or(1);
            Ok(ExitCode::from(code))
        }
    }
}
