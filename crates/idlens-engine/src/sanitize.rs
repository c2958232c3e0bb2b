use serde_json::Value;

/// Recursively strip empty nodes from a decoded value tree.
///
/// The emptiness rule is deliberate and narrow: only `null`, the empty
/// string, the empty array, and the empty object count as empty. Numeric
/// `0` and boolean `false` are data and survive. A branch with no
/// substance left collapses to `None`, which every downstream consumer
/// treats the same as an absent field.
///
/// Idempotent: re-sanitizing an already-sanitized tree is a no-op.
pub fn sanitize(value: &Value) -> Option<Value> {
    match value {
        Value::Null => None,
        Value::String(text) if text.is_empty() => None,
        Value::String(_) | Value::Bool(_) | Value::Number(_) => Some(value.clone()),
        Value::Array(items) => {
            let kept: Vec<Value> = items.iter().filter_map(sanitize).collect();
            if kept.is_empty() {
                None
            } else {
                Some(Value::Array(kept))
            }
        }
        Value::Object(entries) => {
            let mut kept = serde_json::Map::new();
            for (key, entry) in entries {
                if let Some(clean) = sanitize(entry) {
                    kept.insert(key.clone(), clean);
                }
            }
            if kept.is_empty() {
                None
            } else {
                Some(Value::Object(kept))
            }
        }
    }
}
