//! Error types for the measurement harness.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, HarnessError>;

#[derive(Error, Debug)]
pub enum HarnessError {
    /// A (language, benchmark) pair counted zero tokens.
    #[error("{language}/{benchmark} has 0 tokens, missing implementation?")]
    EmptyImplementation { language: String, benchmark: String },

    #[error(
        "{language} ({tokens} tokens) does not exceed {baseline} ({baseline_tokens} tokens) in {benchmark}"
    )]
    ThesisViolation {
        language: String,
        baseline: String,
        benchmark: String,
        tokens: usize,
        baseline_tokens: usize,
    },

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to walk directory: {path}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to read config file: {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Baseline language {0:?} is not configured")]
    UnknownBaseline(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to load {encoding} encoding: {message}")]
    Tokenizer { encoding: String, message: String },
}
