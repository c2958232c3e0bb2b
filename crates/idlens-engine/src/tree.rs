use crate::field::{generic_label, present};
use crate::options::RenderOptions;
use crate::sanitize::sanitize;
use serde_json::Value;

/// Recursion floor. Branches deeper than this are dropped, not errored.
pub const MAX_DEPTH: usize = 4;

/// Scalar sequences show this many items before collapsing to a count.
const SCALAR_ITEM_LIMIT: usize = 10;

/// Mixed/compound sequences show this many items before collapsing.
const COMPOUND_ITEM_LIMIT: usize = 5;

/// Walk an already-sanitized mapping and emit indented report lines.
///
/// Callers sanitize first; feeding an unsanitized tree in here produces
/// blank sections for the branches sanitization would have removed.
pub fn render_tree(value: &Value, opts: &RenderOptions) -> Vec<String> {
    render_at(value, 0, MAX_DEPTH, opts)
}

/// Depth-parameterized walk. `depth` doubles as the indentation level;
/// anything past `max_depth` renders as an empty sequence.
pub fn render_at(value: &Value, depth: usize, max_depth: usize, opts: &RenderOptions) -> Vec<String> {
    let mut lines = Vec::new();
    if depth > max_depth {
        return lines;
    }
    let pad = "  ".repeat(depth);

    match value {
        Value::Object(entries) => {
            for (key, entry) in entries {
                let label = generic_label(key);
                match entry {
                    Value::Object(_) => {
                        lines.push(format!("{}{}", pad, opts.section(&format!("▸ {}:", label))));
                        lines.extend(render_at(entry, depth + 1, max_depth, opts));
                    }
                    Value::Array(items) => {
                        lines.push(format!("{}{}", pad, opts.section(&format!("▸ {}:", label))));
                        lines.extend(render_items(items, depth, max_depth, opts));
                    }
                    scalar => {
                        if let Some(line) = present(&opts.warn(&label), scalar, opts) {
                            lines.push(format!("{}{}", pad, line));
                        }
                    }
                }
            }
        }
        Value::Array(items) => lines.extend(render_items(items, depth, max_depth, opts)),
        _ => {}
    }

    lines
}

fn render_items(items: &[Value], depth: usize, max_depth: usize, opts: &RenderOptions) -> Vec<String> {
    let mut lines = Vec::new();
    let pad = "  ".repeat(depth);

    if items.iter().all(is_scalar) {
        for item in items.iter().take(SCALAR_ITEM_LIMIT) {
            lines.push(format!("{}  • {}", pad, scalar_text(item)));
        }
        if items.len() > SCALAR_ITEM_LIMIT {
            lines.push(format!(
                "{}  {}",
                pad,
                opts.accent(&format!("... and {} more", items.len() - SCALAR_ITEM_LIMIT))
            ));
        }
    } else {
        for (index, item) in items.iter().take(COMPOUND_ITEM_LIMIT).enumerate() {
            match item {
                Value::Object(_) | Value::Array(_) => {
                    // A compound item that sanitizes away contributes
                    // nothing, not even its index marker.
                    if let Some(clean) = sanitize(item) {
                        lines.push(format!("{}  {}", pad, opts.warn(&format!("[{}]", index + 1))));
                        lines.extend(render_at(&clean, depth + 2, max_depth, opts));
                    }
                }
                scalar => lines.push(format!("{}  • {}", pad, scalar_text(scalar))),
            }
        }
        if items.len() > COMPOUND_ITEM_LIMIT {
            lines.push(format!(
                "{}  {}",
                pad,
                opts.accent(&format!("... and {} more items", items.len() - COMPOUND_ITEM_LIMIT))
            ));
        }
    }

    lines
}

fn is_scalar(value: &Value) -> bool {
    matches!(
        value,
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_)
    )
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn plain() -> RenderOptions {
        RenderOptions::plain()
    }

    #[test]
    fn test_single_scalar_entry() {
        let lines = render_tree(&json!({"e": "hello"}), &plain());
        assert_eq!(lines, vec!["E: hello"]);
    }

    #[test]
    fn test_nested_mapping_gets_section_header() {
        let lines = render_tree(&json!({"profile": {"name": "alice"}}), &plain());
        assert_eq!(lines, vec!["▸ Profile:", "  Name: alice"]);
    }

    #[test]
    fn test_scalar_sequence_truncates_at_ten() {
        let items: Vec<String> = (1..=14).map(|n| format!("item{}", n)).collect();
        let lines = render_tree(&json!({"tags": items}), &plain());

        assert_eq!(lines[0], "▸ Tags:");
        let bullets = lines.iter().filter(|l| l.contains('•')).count();
        assert_eq!(bullets, 10);
        assert_eq!(lines.last().unwrap(), "  ... and 4 more");
    }

    #[test]
    fn test_compound_sequence_truncates_at_five() {
        let items: Vec<Value> = (1..=8).map(|n| json!({"id": n})).collect();
        let lines = render_tree(&json!({"accounts": items}), &plain());

        let markers = lines.iter().filter(|l| l.trim().starts_with('[')).count();
        assert_eq!(markers, 5);
        assert_eq!(lines.last().unwrap(), "  ... and 3 more items");
    }

    #[test]
    fn test_compound_item_that_sanitizes_away_is_skipped_entirely() {
        let lines = render_tree(
            &json!({"accounts": [{"id": null}, {"id": 7}, "loose"]}),
            &plain(),
        );
        assert_eq!(lines[0], "▸ Accounts:");
        // The hollow first item contributes nothing; the second keeps its
        // positional index.
        assert_eq!(lines[1], "  [2]");
        assert_eq!(lines[2], "    Id: 7");
        assert_eq!(lines[3], "  • loose");
    }

    #[test]
    fn test_depth_bound_drops_deep_branches() {
        let deep = json!({
            "l0": {"l1": {"l2": {"l3": {"l4": {"l5": {"leaf": "buried"}}}}}}
        });
        let lines = render_tree(&deep, &plain());
        assert!(lines.iter().all(|l| !l.contains("buried")));

        // Starting beyond the floor yields nothing at all.
        assert!(render_at(&deep, MAX_DEPTH + 1, MAX_DEPTH, &plain()).is_empty());
    }

    #[test]
    fn test_insertion_order_is_never_reordered() {
        let lines = render_tree(&json!({"zulu": 1, "alpha": 2}), &plain());
        assert_eq!(lines, vec!["Zulu: 1", "Alpha: 2"]);
    }

    #[test]
    fn test_link_values_carry_marker() {
        let lines = render_tree(&json!({"profile_url": "https://example.com/a"}), &plain());
        assert_eq!(lines, vec!["Profile Url: 🔗 https://example.com/a"]);
    }
}
