use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

pub mod aggregate;
pub mod cli;
pub mod counter;
pub mod error;
pub mod formatters;
pub mod models;
pub mod tokenizers;

use crate::formatters::Writer;
use crate::models::HarnessConfig;
use crate::tokenizers::Tokenizer;

pub use crate::error::HarnessError;

/// Builds the run configuration from the CLI: a config file if given,
/// otherwise the selected preset, then the command-line overrides.
pub fn resolve_config(cli: &cli::Cli) -> Result<HarnessConfig> {
    let mut config = match &cli.config {
        Some(path) => HarnessConfig::from_file(path)?,
        None => cli.preset.config(),
    };

    if let Some(baseline) = &cli.baseline {
        config.baseline = baseline.clone();
    }
    if cli.thesis {
        config.thesis = true;
    }
    if cli.no_exclude {
        config.excluded_dirs.clear();
    }
    config.excluded_dirs.extend(cli.exclude_dirs.iter().cloned());

    config.validate()?;
    debug!(?config, "resolved configuration");
    Ok(config)
}

fn progress_bar(config: &HarnessConfig, hidden: bool) -> Result<ProgressBar> {
    if hidden {
        return Ok(ProgressBar::hidden());
    }

    let pairs = (config.benchmarks.len() * config.languages.len()) as u64;
    let progress = ProgressBar::new(pairs);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );
    Ok(progress)
}

pub fn run(cli: &cli::Cli) -> Result<()> {
    let config = resolve_config(cli)?;
    let tokenizer = Tokenizer::new(cli.encoding)?;

    let progress = progress_bar(&config, cli.no_progress)?;
    let comparison =
        aggregate::compare_with_progress(&config, &cli.root, &tokenizer, |language, benchmark| {
            progress.set_message(format!("{benchmark} ({language})"));
            progress.inc(1);
        });
    progress.finish_and_clear();
    let comparison = comparison?;

    let rendered = formatters::render(&comparison, cli.format)?;
    let mut writer = Writer::new(cli.output_file.clone())?;
    writer.write(&rendered)?;

    // The report is already out so a violation can be diagnosed from it
    if config.thesis {
        aggregate::check_thesis(&comparison).context("Thesis check failed")?;
        info!("thesis holds for every benchmark");
    }

    Ok(())
}
