use idlens_engine::RenderOptions;
use serde_json::Value;

/// The credits endpoint answers with either a bare number or a mapping
/// carrying a `credits` field.
pub fn remaining(value: &Value) -> Option<f64> {
    value
        .as_f64()
        .or_else(|| value.get("credits").and_then(Value::as_f64))
}

pub fn print_credits(value: &Value, opts: &RenderOptions) {
    match remaining(value) {
        Some(count) => println!("{}", painted_balance(count, opts)),
        None => println!("{}", opts.bad("⚠ Unable to fetch credit information")),
    }
}

/// Balance line, colored by how close the account is to running dry.
pub fn painted_balance(count: f64, opts: &RenderOptions) -> String {
    let text = format!("💳 API Credits: {}", count);
    if count > 100.0 {
        opts.ok(&text)
    } else if count > 50.0 {
        opts.warn(&text)
    } else {
        opts.bad(&text)
    }
}
