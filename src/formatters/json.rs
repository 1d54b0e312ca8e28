use anyhow::Result;

use crate::models::Comparison;

pub fn render_json(comparison: &Comparison) -> Result<String> {
    Ok(serde_json::to_string_pretty(comparison)?)
}
