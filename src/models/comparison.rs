use serde::Serialize;

use super::FileTokens;

/// Renders a ratio with one decimal place, e.g. `2.5x`.
pub fn format_ratio(ratio: f64) -> String {
    format!("{ratio:.1}x")
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ratio {
    pub language: String,
    pub value: f64,
}

impl Ratio {
    pub fn display(&self) -> String {
        format_ratio(self.value)
    }
}

/// One language's measurement of one benchmark.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageCount {
    pub language: String,
    pub tokens: usize,
    pub files: FileTokens,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkRow {
    pub benchmark: String,
    pub counts: Vec<LanguageCount>,
    pub ratios: Vec<Ratio>,
}

impl BenchmarkRow {
    pub fn tokens(&self, language: &str) -> Option<usize> {
        self.counts
            .iter()
            .find(|c| c.language == language)
            .map(|c| c.tokens)
    }

    pub fn ratio(&self, language: &str) -> Option<f64> {
        self.ratios
            .iter()
            .find(|r| r.language == language)
            .map(|r| r.value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageTotal {
    pub language: String,
    pub tokens: usize,
}

/// Result of one full run across every benchmark and language.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub encoding: String,
    pub baseline: String,
    pub rows: Vec<BenchmarkRow>,
    pub totals: Vec<LanguageTotal>,
    pub ratios: Vec<Ratio>,
}

impl Comparison {
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.totals.iter().map(|t| t.language.as_str())
    }

    pub fn total(&self, language: &str) -> Option<usize> {
        self.totals
            .iter()
            .find(|t| t.language == language)
            .map(|t| t.tokens)
    }

    pub fn ratio(&self, language: &str) -> Option<f64> {
        self.ratios
            .iter()
            .find(|r| r.language == language)
            .map(|r| r.value)
    }

    pub fn row(&self, benchmark: &str) -> Option<&BenchmarkRow> {
        self.rows.iter().find(|r| r.benchmark == benchmark)
    }
}
