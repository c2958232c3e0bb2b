use crate::field::title_case;
use crate::options::RenderOptions;
use crate::record::render_record;
use serde_json::Value;

/// Misses are collapsed to one line naming this many platforms.
const NOT_FOUND_NAME_LIMIT: usize = 10;

/// Partition a multi-platform result set and lay out the report:
/// summary counts, a full card per hit, one collapsed line for misses.
///
/// An empty result set is a valid input; it reports 0/0/0 and stops.
pub fn summarize(records: &[Value], opts: &RenderOptions) -> Vec<String> {
    let mut lines = Vec::new();

    let (found, not_found): (Vec<&Value>, Vec<&Value>) =
        records.iter().partition(|record| is_found(record));

    lines.push(String::new());
    lines.push(opts.accent("╔═══ SUMMARY ═══╗"));
    lines.push(opts.ok(&format!("   ✓ Found on {} platform(s)", found.len())));
    lines.push(opts.bad(&format!("   ✗ Not found on {} platform(s)", not_found.len())));
    lines.push(opts.accent(&format!("   📝 Total platforms checked: {}", records.len())));

    if !found.is_empty() {
        lines.push(String::new());
        lines.push(opts.ok(&"═".repeat(80)));
        lines.push(format!(
            "{} {}",
            opts.ok("║"),
            opts.emph(&format!("✓ FOUND ON {} PLATFORM(S)", found.len()))
        ));
        lines.push(opts.ok(&format!("╚{}╝", "═".repeat(78))));

        for (index, record) in found.iter().enumerate() {
            lines.push(String::new());
            lines.push(opts.warn(&"─".repeat(80)));
            lines.push(opts.emph(&format!("[{}/{}]", index + 1, found.len())));
            if let Some(map) = record.as_object() {
                lines.extend(render_record(map, opts));
            }
        }
    }

    if !not_found.is_empty() {
        lines.push(String::new());
        lines.push(opts.warn(&"─".repeat(80)));

        let names: Vec<String> = not_found
            .iter()
            .take(NOT_FOUND_NAME_LIMIT)
            .map(|record| module_name(record))
            .collect();
        let mut listing = format!("{} {}", opts.warn("❌ Not found on:"), names.join(", "));
        if not_found.len() > NOT_FOUND_NAME_LIMIT {
            listing.push_str(&format!(
                " and {} more",
                not_found.len() - NOT_FOUND_NAME_LIMIT
            ));
        }
        lines.push(listing);
    }

    lines
}

fn is_found(record: &Value) -> bool {
    record.get("status").and_then(Value::as_str) == Some("found")
}

fn module_name(record: &Value) -> String {
    title_case(
        record
            .get("module")
            .and_then(Value::as_str)
            .unwrap_or("Unknown"),
    )
}
