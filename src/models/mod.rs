mod comparison;
mod encoding;
mod harness_config;
mod language;
mod output_format;
mod token_report;

pub use comparison::{format_ratio, BenchmarkRow, Comparison, LanguageCount, LanguageTotal, Ratio};
pub use encoding::Encoding;
pub use harness_config::{HarnessConfig, Preset, DEFAULT_EXCLUDED_DIRS};
pub use language::{normalize_extension, Language};
pub use output_format::OutputFormat;
pub use token_report::{FileCount, FileTokens};
