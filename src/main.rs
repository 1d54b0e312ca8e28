use clap::Parser;
use tracing_subscriber::EnvFilter;

use tokcompare::cli::Cli;

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = tokcompare::run(&cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
