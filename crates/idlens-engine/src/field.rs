use crate::options::RenderOptions;
use serde_json::Value;

/// Scalar display cutoff, counted in characters (not display width).
const TRUNCATE_AT: usize = 100;

/// Unwrap a single `{"value": ..}` / `{"data": ..}` wrapper level.
///
/// A wrapper object carrying neither key yields `None` even when other
/// keys are populated; the fallback chain stops at `value`, then `data`.
pub fn unwrap_wrapped(value: &Value) -> Option<&Value> {
    match value {
        Value::Object(map) => map.get("value").or_else(|| map.get("data")),
        other => Some(other),
    }
}

/// Render one labelled scalar line, or `None` when the value carries
/// nothing presentable. The label arrives pre-formatted (and possibly
/// pre-colored); only the value side is styled here.
pub fn present(label: &str, value: &Value, opts: &RenderOptions) -> Option<String> {
    let value = unwrap_wrapped(value)?;
    let rendered = match value {
        Value::Bool(flag) => {
            if *flag {
                opts.ok("✓")
            } else {
                opts.bad("✗")
            }
        }
        Value::String(text) if text.is_empty() => return None,
        Value::String(text) if is_link(text) => opts.accent(&format!("🔗 {}", text)),
        Value::String(text) => truncate(text),
        Value::Number(number) => number.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => return None,
    };
    Some(format!("{}: {}", label, rendered))
}

fn is_link(text: &str) -> bool {
    text.starts_with("http://") || text.starts_with("https://")
}

fn truncate(text: &str) -> String {
    if text.chars().count() > TRUNCATE_AT {
        let kept: String = text.chars().take(TRUNCATE_AT - 3).collect();
        format!("{}...", kept)
    } else {
        text.to_string()
    }
}

/// `first_name` -> `First Name`; used for keys outside the curated table.
pub fn generic_label(key: &str) -> String {
    title_case(&key.replace(['_', '-'], " "))
}

/// Capitalize the first letter of each word, lowercasing the rest.
pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
