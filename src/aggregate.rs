use std::path::Path;
use tracing::{debug, info};

use crate::counter::count_tokens;
use crate::error::{HarnessError, Result};
use crate::models::{
    BenchmarkRow, Comparison, HarnessConfig, LanguageCount, LanguageTotal, Ratio,
};
use crate::tokenizers::Tokenizer;

/// Ratio of `tokens` to `baseline_tokens`.
pub fn compute_ratio(tokens: usize, baseline_tokens: usize) -> f64 {
    tokens as f64 / baseline_tokens as f64
}

/// Fails unless `tokens` is positive. A zero total means a missing or empty
/// implementation, which would poison every ratio computed from it.
pub fn ensure_positive(language: &str, benchmark: &str, tokens: usize) -> Result<()> {
    if tokens == 0 {
        return Err(HarnessError::EmptyImplementation {
            language: language.to_string(),
            benchmark: benchmark.to_string(),
        });
    }
    Ok(())
}

/// Builds a row from already-counted per-language results. Every count must be
/// positive and the baseline must be among them.
pub fn build_row(benchmark: &str, counts: Vec<LanguageCount>, baseline: &str) -> Result<BenchmarkRow> {
    for count in &counts {
        ensure_positive(&count.language, benchmark, count.tokens)?;
    }

    let baseline_tokens = counts
        .iter()
        .find(|c| c.language == baseline)
        .map(|c| c.tokens)
        .ok_or_else(|| HarnessError::UnknownBaseline(baseline.to_string()))?;

    let ratios = counts
        .iter()
        .filter(|c| c.language != baseline)
        .map(|c| Ratio {
            language: c.language.clone(),
            value: compute_ratio(c.tokens, baseline_tokens),
        })
        .collect();

    Ok(BenchmarkRow {
        benchmark: benchmark.to_string(),
        counts,
        ratios,
    })
}

/// Sums rows into per-language grand totals and their baseline ratios.
pub fn grand_totals(
    languages: &[String],
    rows: &[BenchmarkRow],
    baseline: &str,
) -> Result<(Vec<LanguageTotal>, Vec<Ratio>)> {
    let totals: Vec<LanguageTotal> = languages
        .iter()
        .map(|language| LanguageTotal {
            language: language.clone(),
            tokens: rows.iter().filter_map(|row| row.tokens(language)).sum(),
        })
        .collect();

    let baseline_tokens = totals
        .iter()
        .find(|t| t.language == baseline)
        .map(|t| t.tokens)
        .ok_or_else(|| HarnessError::UnknownBaseline(baseline.to_string()))?;
    if baseline_tokens == 0 {
        return Err(HarnessError::InvalidConfig(
            "baseline has no tokens across any benchmark".to_string(),
        ));
    }

    let ratios = totals
        .iter()
        .filter(|t| t.language != baseline)
        .map(|t| Ratio {
            language: t.language.clone(),
            value: compute_ratio(t.tokens, baseline_tokens),
        })
        .collect();

    Ok((totals, ratios))
}

/// Counts every benchmark for every language under `root` and compares each
/// language against the configured baseline.
pub fn compare(config: &HarnessConfig, root: &Path, tokenizer: &Tokenizer) -> Result<Comparison> {
    compare_with_progress(config, root, tokenizer, |_, _| {})
}

/// Same as [`compare`], calling `on_counted(language, benchmark)` after each
/// pair is counted.
pub fn compare_with_progress<F>(
    config: &HarnessConfig,
    root: &Path,
    tokenizer: &Tokenizer,
    mut on_counted: F,
) -> Result<Comparison>
where
    F: FnMut(&str, &str),
{
    config.validate()?;
    info!(
        root = %root.display(),
        benchmarks = config.benchmarks.len(),
        languages = config.languages.len(),
        encoding = %tokenizer.encoding(),
        "measuring"
    );

    let mut rows = Vec::with_capacity(config.benchmarks.len());
    for benchmark in &config.benchmarks {
        let mut counts = Vec::with_capacity(config.languages.len());
        for language in &config.languages {
            let dir = language.benchmark_dir(root, benchmark);
            let files = count_tokens(&dir, &language.extensions, &config.excluded_dirs, tokenizer)?;
            let tokens = files.total_tokens;
            ensure_positive(&language.name, benchmark, tokens)?;
            debug!(language = %language.name, benchmark = %benchmark, tokens, "measured");
            on_counted(&language.name, benchmark);

            counts.push(LanguageCount {
                language: language.name.clone(),
                tokens,
                files,
            });
        }
        rows.push(build_row(benchmark, counts, &config.baseline)?);
    }

    let languages: Vec<String> = config.languages.iter().map(|l| l.name.clone()).collect();
    let (totals, ratios) = grand_totals(&languages, &rows, &config.baseline)?;

    Ok(Comparison {
        encoding: tokenizer.encoding().name().to_string(),
        baseline: config.baseline.clone(),
        rows,
        totals,
        ratios,
    })
}

/// Checks that every non-baseline language strictly exceeds the baseline in
/// every benchmark. Reports the first offending pair in row order.
pub fn check_thesis(comparison: &Comparison) -> Result<()> {
    for row in &comparison.rows {
        let baseline_tokens = row
            .tokens(&comparison.baseline)
            .ok_or_else(|| HarnessError::UnknownBaseline(comparison.baseline.clone()))?;

        for count in row.counts.iter().filter(|c| c.language != comparison.baseline) {
            if count.tokens <= baseline_tokens {
                return Err(HarnessError::ThesisViolation {
                    language: count.language.clone(),
                    baseline: comparison.baseline.clone(),
                    benchmark: row.benchmark.clone(),
                    tokens: count.tokens,
                    baseline_tokens,
                });
            }
        }
    }
    Ok(())
}
