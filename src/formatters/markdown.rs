use comfy_table::presets::ASCII_MARKDOWN;
use comfy_table::{CellAlignment, ContentArrangement, Table};

use crate::models::{format_ratio, Comparison};

/// Short form of the baseline name used in ratio headers (`Python` -> `Py`).
pub fn baseline_abbreviation(baseline: &str) -> String {
    baseline.chars().take(2).collect()
}

/// One row per benchmark: the token count of every language followed by the
/// ratio of each non-baseline language to the baseline.
pub fn render_table(comparison: &Comparison) -> String {
    let abbreviation = baseline_abbreviation(&comparison.baseline);

    let mut headers = vec!["Benchmark".to_string()];
    headers.extend(comparison.languages().map(|l| format!("{l} tokens")));
    headers.extend(
        comparison
            .ratios
            .iter()
            .map(|r| format!("{}/{}", r.language, abbreviation)),
    );
    let columns = headers.len();

    let mut table = Table::new();
    table
        .load_preset(ASCII_MARKDOWN)
        .set_content_arrangement(ContentArrangement::Disabled)
        .set_header(headers);

    for row in &comparison.rows {
        let mut cells = vec![row.benchmark.clone()];
        cells.extend(row.counts.iter().map(|c| c.tokens.to_string()));
        cells.extend(row.ratios.iter().map(|r| r.display()));
        table.add_row(cells);
    }

    // Numbers read better right-aligned
    for index in 1..columns {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }

    table.to_string()
}

/// `Total: Python 100 | Rust 250 | Rust 2.5x`
pub fn render_summary_line(comparison: &Comparison) -> String {
    let parts: Vec<String> = comparison
        .totals
        .iter()
        .map(|t| format!("{} {}", t.language, t.tokens))
        .chain(
            comparison
                .ratios
                .iter()
                .map(|r| format!("{} {}", r.language, format_ratio(r.value))),
        )
        .collect();

    format!("Total: {}", parts.join(" | "))
}

/// Every counted file, grouped by benchmark then language.
pub fn render_file_listing(comparison: &Comparison) -> String {
    let mut lines = Vec::new();
    for row in &comparison.rows {
        for count in &row.counts {
            lines.push(format!(
                "--- {} ({}) ---",
                row.benchmark,
                count.language.to_lowercase()
            ));
            for file in &count.files.files {
                lines.push(format!(
                    "  {}: {} tokens",
                    file.path.to_string_lossy(),
                    file.tokens
                ));
            }
        }
        lines.push(String::new());
    }
    lines.join("\n")
}

pub fn render_markdown(comparison: &Comparison) -> String {
    format!(
        "\n{}\n\n{}\n\n{}",
        render_table(comparison),
        render_summary_line(comparison),
        render_file_listing(comparison)
    )
}
