mod cli;
mod output;

use anyhow::{Context, Result};
use clap::Parser;
use hpfold::core::models::chain::Chain;
use hpfold::workflows::search;
use tracing::info;

use crate::cli::Cli;

fn main() {
    if let Err(e) = run_app() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    info!("hpfold v{} starting up.", env!("CARGO_PKG_VERSION"));

    let chain: Chain = cli
        .sequence
        .parse()
        .context("Failed to parse residue sequence")?;
    let strategy = cli.strategy();
    let config = cli.search_config()?;

    let result = search::run(&chain, strategy, &config)
        .with_context(|| format!("{:?} search failed on '{}'", cli.strategy, chain))?;

    output::print_summary(&chain, &result);
    if let Some(target) = cli.csv_target() {
        output::write_csv_row(target, cli.strategy_name(), &result)
            .context("Failed to write CSV result row")?;
    }

    Ok(())
}

fn setup_logging(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let default_directive = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
