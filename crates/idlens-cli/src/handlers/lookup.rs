use crate::persist;
use crate::types::SearchKind;
use crate::ui::prompt;
use crate::ui::spinner::Spinner;
use crate::views;
use anyhow::Result;
use idlens_client::Client;
use idlens_engine::RenderOptions;
use is_terminal::IsTerminal;
use serde_json::Value;
use std::path::{Path, PathBuf};

pub fn handle(
    client: &Client,
    kind: SearchKind,
    query: &str,
    save: Option<&Path>,
    assume_yes: bool,
    opts: &RenderOptions,
) -> Result<()> {
    let spinner = Spinner::start(
        &format!("Searching for {}: {}...", kind, query),
        opts.enable_color,
    );
    let outcome = client.search(kind.query_kind(), query);
    spinner.stop();

    let payload = match outcome {
        Ok(payload) => payload,
        Err(err) => {
            views::error::print_error(&err, opts);
            anyhow::bail!("search failed");
        }
    };

    views::report::print_report(&payload, &kind.to_string(), query, opts);

    if let Some(path) = save {
        let written = persist::save_raw(&payload, Some(path))?;
        println!(
            "{}",
            opts.ok(&format!("✓ Results saved to {}", written.display()))
        );
    } else if !assume_yes && std::io::stdin().is_terminal() {
        offer_save(&payload, opts)?;
    }

    Ok(())
}

/// Interactive save prompt; writes the raw payload, never the rendering.
pub fn offer_save(payload: &Value, opts: &RenderOptions) -> Result<()> {
    if !prompt::confirm("💾 Save results to file? (y/n): ")? {
        return Ok(());
    }

    let name = prompt::read_line("📁 Enter filename (blank for a timestamped default): ")?;
    let path = if name.is_empty() {
        None
    } else {
        Some(PathBuf::from(name))
    };

    let written = persist::save_raw(payload, path.as_deref())?;
    println!(
        "{}",
        opts.ok(&format!("✓ Results saved to {}", written.display()))
    );
    Ok(())
}
