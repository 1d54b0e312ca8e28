use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::path::Path;

use super::Language;
use crate::error::{HarnessError, Result};

/// Build output, dependency caches and virtual environments.
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &["deps", "target", "_build", "__pycache__", ".elixir_ls"];

const DEFAULT_BENCHMARKS: &[&str] = &["todo_cli", "rest_api"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarnessConfig {
    pub benchmarks: Vec<String>,
    pub languages: Vec<Language>,
    pub baseline: String,
    #[serde(default)]
    pub excluded_dirs: BTreeSet<String>,
    /// Require every other language to strictly exceed the baseline.
    #[serde(default)]
    pub thesis: bool,
}

/// Built-in configurations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// Python, Rust and Elixir with build directories excluded
    #[default]
    Default,
    /// Python against Rust, nothing excluded, thesis check on
    Comparison,
}

impl Preset {
    pub fn config(&self) -> HarnessConfig {
        match self {
            Preset::Default => HarnessConfig::three_languages(),
            Preset::Comparison => HarnessConfig::two_language_comparison(),
        }
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self::three_languages()
    }
}

impl HarnessConfig {
    pub fn three_languages() -> Self {
        Self {
            benchmarks: default_benchmarks(),
            languages: vec![
                Language::new("Python", "python", [".py", ".toml"]),
                Language::new("Rust", "rust", [".rs", ".toml"]),
                Language::new("Elixir", "elixir", [".ex", ".exs"]),
            ],
            baseline: "Python".to_string(),
            excluded_dirs: DEFAULT_EXCLUDED_DIRS.iter().map(|d| d.to_string()).collect(),
            thesis: false,
        }
    }

    pub fn two_language_comparison() -> Self {
        Self {
            benchmarks: default_benchmarks(),
            languages: vec![
                Language::new("Python", "python", [".py", ".toml"]),
                Language::new("Rust", "rust", [".rs", ".toml"]),
            ],
            baseline: "Python".to_string(),
            excluded_dirs: BTreeSet::new(),
            thesis: true,
        }
    }

    pub fn from_json_str(json: &str, origin: &Path) -> Result<Self> {
        let config: HarnessConfig =
            serde_json::from_str(json).map_err(|source| HarnessError::ConfigParse {
                path: origin.to_path_buf(),
                source,
            })?;
        Ok(config.normalized())
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| HarnessError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json, path)
    }

    fn normalized(mut self) -> Self {
        self.languages = self.languages.into_iter().map(Language::normalized).collect();
        self
    }

    pub fn baseline_language(&self) -> Result<&Language> {
        self.languages
            .iter()
            .find(|l| l.name == self.baseline)
            .ok_or_else(|| HarnessError::UnknownBaseline(self.baseline.clone()))
    }

    /// Languages compared against the baseline, in configuration order.
    pub fn compared_languages(&self) -> impl Iterator<Item = &Language> {
        self.languages.iter().filter(|l| l.name != self.baseline)
    }

    pub fn validate(&self) -> Result<()> {
        if self.benchmarks.is_empty() {
            return Err(HarnessError::InvalidConfig(
                "no benchmarks configured".to_string(),
            ));
        }
        if self.languages.is_empty() {
            return Err(HarnessError::InvalidConfig(
                "no languages configured".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for language in &self.languages {
            if !seen.insert(language.name.as_str()) {
                return Err(HarnessError::InvalidConfig(format!(
                    "language {:?} is configured twice",
                    language.name
                )));
            }
        }

        let mut seen = HashSet::new();
        for benchmark in &self.benchmarks {
            if !seen.insert(benchmark.as_str()) {
                return Err(HarnessError::InvalidConfig(format!(
                    "benchmark {benchmark:?} is configured twice"
                )));
            }
        }

        self.baseline_language()?;
        Ok(())
    }
}

fn default_benchmarks() -> Vec<String> {
    DEFAULT_BENCHMARKS.iter().map(|b| b.to_string()).collect()
}
