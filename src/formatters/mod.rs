mod json;
mod markdown;
mod writer;

pub use json::render_json;
pub use markdown::{
    baseline_abbreviation, render_file_listing, render_markdown, render_summary_line,
    render_table,
};
pub use writer::Writer;

use anyhow::Result;

use crate::models::{Comparison, OutputFormat};

pub fn render(comparison: &Comparison, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Markdown => Ok(render_markdown(comparison)),
        OutputFormat::Json => render_json(comparison),
    }
}
