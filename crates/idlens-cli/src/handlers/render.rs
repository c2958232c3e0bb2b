use crate::views;
use anyhow::{Context, Result};
use idlens_engine::RenderOptions;
use serde_json::Value;
use std::path::Path;

/// Re-render a previously saved raw payload. Presentation is recomputed
/// from the raw data every time; nothing about the original rendering is
/// stored.
pub fn handle(file: &Path, opts: &RenderOptions) -> Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let payload: Value = serde_json::from_str(&content)
        .with_context(|| format!("{} is not valid JSON", file.display()))?;

    views::report::print_report(&payload, "saved", &file.display().to_string(), opts);
    Ok(())
}
