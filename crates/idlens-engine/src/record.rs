use crate::field::present;
use crate::options::RenderOptions;
use serde_json::{Map, Value};

/// Curated account-card fields, in display order. Keys not listed here
/// never appear on a card, whatever the record carries.
pub const ACCOUNT_FIELDS: &[(&str, &str)] = &[
    ("id", "🆔 ID"),
    ("username", "👤 Username"),
    ("name", "📝 Name"),
    ("first_name", "📝 First Name"),
    ("last_name", "📝 Last Name"),
    ("email", "📧 Email"),
    ("phone", "📱 Phone"),
    ("picture_url", "🖼️ Picture"),
    ("profile_url", "🔗 Profile"),
    ("followers", "👥 Followers"),
    ("following", "➕ Following"),
    ("verified", "✓ Verified"),
    ("private", "🔒 Private"),
    ("registered", "📅 Registered"),
    ("created_at", "📅 Created"),
    ("last_seen", "👁️ Last Seen"),
];

/// Fixed-layout card for one platform record.
///
/// This never falls back to the generic tree dump: the card shows the
/// curated field subset in table order, not whatever the record happens
/// to contain.
pub fn render_record(record: &Map<String, Value>, opts: &RenderOptions) -> Vec<String> {
    let mut lines = Vec::new();

    let module = record
        .get("module")
        .and_then(Value::as_str)
        .unwrap_or("Unknown");
    let status = record
        .get("status")
        .and_then(Value::as_str)
        .unwrap_or("unknown");

    lines.push(String::new());
    lines.push(opts.accent(&format!("╔{}╗", "═".repeat(78))));
    lines.push(format!(
        "{} {}  {}",
        opts.accent("║"),
        opts.emph(&module.to_uppercase()),
        status_label(status, opts)
    ));
    if let Some(name) = record
        .get("category")
        .and_then(|category| category.get("name"))
        .and_then(Value::as_str)
    {
        lines.push(format!(
            "{} {} {}",
            opts.accent("║"),
            opts.warn("Category:"),
            name
        ));
    }
    lines.push(opts.accent(&format!("╚{}╝", "═".repeat(78))));

    if let Some(details) = account_details(record) {
        lines.push(String::new());
        lines.push(opts.ok("╔═══ ACCOUNT DETAILS ═══╗"));
        for (key, label) in ACCOUNT_FIELDS {
            if let Some(value) = details.get(*key)
                && let Some(line) = present(label, value, opts)
            {
                lines.push(format!("  {}", line));
            }
        }
    }

    if let Some(image) = profile_image(record) {
        lines.push(String::new());
        lines.push(format!(
            "{} {}",
            opts.warn("🖼️ Profile Image:"),
            opts.accent(image)
        ));
    }

    if record.get("reliable_source").is_some_and(is_truthy) {
        lines.push(String::new());
        lines.push(opts.ok("✓ Verified/Reliable Source"));
    }

    lines
}

fn status_label(status: &str, opts: &RenderOptions) -> String {
    match status {
        "found" => opts.ok(&format!("✓ {}", status.to_uppercase())),
        "not_found" => opts.bad(&format!("✗ {}", status.to_uppercase())),
        _ => opts.warn(&format!("? {}", status.to_uppercase())),
    }
}

/// First element of a non-empty `spec_format` sequence, when it is a
/// non-empty mapping. Later elements are variant duplicates and ignored.
fn account_details(record: &Map<String, Value>) -> Option<&Map<String, Value>> {
    record
        .get("spec_format")?
        .as_array()?
        .first()?
        .as_object()
        .filter(|details| !details.is_empty())
}

fn profile_image(record: &Map<String, Value>) -> Option<&str> {
    let image = record
        .get("front_schemas")?
        .as_array()?
        .first()?
        .get("image")?
        .as_str()?;
    (!image.is_empty()).then_some(image)
}

/// Flag-ish fields arrive as booleans, numbers, or strings depending on
/// the source module.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn plain() -> RenderOptions {
        RenderOptions::plain()
    }

    fn as_map(value: Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn test_header_carries_platform_and_status() {
        let record = as_map(json!({"module": "twitter", "status": "found"}));
        let lines = render_record(&record, &plain());
        assert!(lines.iter().any(|l| l.contains("TWITTER") && l.contains("✓ FOUND")));
    }

    #[test]
    fn test_unrecognized_status_gets_question_marker() {
        let record = as_map(json!({"module": "forum", "status": "pending"}));
        let lines = render_record(&record, &plain());
        assert!(lines.iter().any(|l| l.contains("? PENDING")));
    }

    #[test]
    fn test_category_name_is_shown_when_present() {
        let record = as_map(json!({
            "module": "github",
            "status": "found",
            "category": {"name": "Developer"},
        }));
        let lines = render_record(&record, &plain());
        assert!(lines.iter().any(|l| l.contains("Category: Developer")));
    }

    #[test]
    fn test_account_fields_follow_table_order_not_input_order() {
        let record = as_map(json!({
            "module": "twitter",
            "status": "found",
            "spec_format": [{
                "email": {"value": "a@example.com"},
                "first_name": "Alice",
                "username": {"value": "alice"},
            }],
        }));
        let lines = render_record(&record, &plain());

        let username = lines.iter().position(|l| l.contains("Username")).unwrap();
        let email = lines.iter().position(|l| l.contains("Email")).unwrap();
        let first_name = lines.iter().position(|l| l.contains("First Name")).unwrap();
        // Table order is username, first_name, email regardless of input order.
        assert!(username < first_name && first_name < email);
    }

    #[test]
    fn test_fields_outside_the_table_are_ignored() {
        let record = as_map(json!({
            "module": "twitter",
            "status": "found",
            "spec_format": [{"username": "alice", "shoe_size": 44}],
        }));
        let lines = render_record(&record, &plain());
        assert!(lines.iter().all(|l| !l.contains("44")));
    }

    #[test]
    fn test_scenario_twitter_card() {
        let record = as_map(json!({
            "module": "twitter",
            "status": "found",
            "spec_format": [{"username": {"value": "alice"}, "verified": true}],
        }));
        let lines = render_record(&record, &plain());

        assert!(lines.iter().any(|l| l.contains("TWITTER") && l.contains("✓ FOUND")));
        assert!(lines.iter().any(|l| l.contains("👤 Username: alice")));
        assert!(lines.iter().any(|l| l.contains("✓ Verified: ✓")));
    }

    #[test]
    fn test_front_schemas_image_line() {
        let record = as_map(json!({
            "module": "twitter",
            "status": "found",
            "front_schemas": [{"image": "https://cdn.example.com/a.jpg"}, {"image": "ignored"}],
        }));
        let lines = render_record(&record, &plain());
        assert!(lines.iter().any(|l| l.contains("Profile Image") && l.contains("a.jpg")));
        assert!(lines.iter().all(|l| !l.contains("ignored")));
    }

    #[test]
    fn test_reliable_source_line_only_when_truthy() {
        let reliable = as_map(json!({"module": "x", "status": "found", "reliable_source": true}));
        let lines = render_record(&reliable, &plain());
        assert!(lines.iter().any(|l| l.contains("Reliable Source")));

        let unreliable = as_map(json!({"module": "x", "status": "found", "reliable_source": false}));
        let lines = render_record(&unreliable, &plain());
        assert!(lines.iter().all(|l| !l.contains("Reliable Source")));
    }

    #[test]
    fn test_empty_spec_format_renders_no_details_block() {
        let record = as_map(json!({"module": "x", "status": "found", "spec_format": []}));
        let lines = render_record(&record, &plain());
        assert!(lines.iter().all(|l| !l.contains("ACCOUNT DETAILS")));
    }
}
