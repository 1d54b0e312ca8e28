use clap::Parser;
use std::path::PathBuf;

use crate::models::{Encoding, OutputFormat, Preset};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "tokcompare",
    about = "Count tokens across per-language implementations of sample projects and compare them",
    version
)]
pub struct Cli {
    /// Directory holding one subdirectory per language
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Built-in configuration to use
    #[arg(long = "preset", value_enum, default_value_t = Preset::Default)]
    pub preset: Preset,

    /// JSON configuration file (overrides --preset)
    #[arg(long = "config")]
    pub config: Option<PathBuf>,

    /// Language every other language is compared against
    #[arg(long = "baseline")]
    pub baseline: Option<String>,

    /// Fail unless every language strictly exceeds the baseline in every benchmark
    #[arg(long = "thesis")]
    pub thesis: bool,

    /// Additional directory names to skip anywhere in the tree
    #[arg(long = "exclude-dir")]
    pub exclude_dirs: Vec<String>,

    /// Do not skip any directories
    #[arg(long = "no-exclude", conflicts_with = "exclude_dirs")]
    pub no_exclude: bool,

    /// Byte-pair encoding used to count tokens
    #[arg(long = "encoding", value_enum, default_value_t = Encoding::Cl100kBase)]
    pub encoding: Encoding,

    /// Output format
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        default_value_t = OutputFormat::Markdown
    )]
    pub format: OutputFormat,

    /// Output to a file instead of stdout
    #[arg(short = 'o', long = "output")]
    pub output_file: Option<PathBuf>,

    /// Log debug diagnostics to stderr
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Hide the progress bar
    #[arg(long = "no-progress")]
    pub no_progress: bool,
}
