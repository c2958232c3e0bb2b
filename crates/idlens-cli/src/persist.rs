use anyhow::{Context, Result};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Write the original, unsanitized payload as indented JSON.
///
/// The rendered report is never persisted; the raw payload is the source
/// of truth and can be re-rendered later with `idlens render`.
pub fn save_raw(payload: &Value, path: Option<&Path>) -> Result<PathBuf> {
    let path = match path {
        Some(given) => ensure_json_extension(given),
        None => PathBuf::from(format!("results_{}.json", chrono::Utc::now().timestamp())),
    };

    let mut content = serde_json::to_string_pretty(payload)?;
    content.push('\n');
    std::fs::write(&path, content).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path)
}

fn ensure_json_extension(path: &Path) -> PathBuf {
    match path.extension() {
        Some(ext) if ext == "json" => path.to_path_buf(),
        _ => {
            let mut with_ext = path.as_os_str().to_os_string();
            with_ext.push(".json");
            PathBuf::from(with_ext)
        }
    }
}
