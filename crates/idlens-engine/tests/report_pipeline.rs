use idlens_engine::{RenderOptions, render_tree, sanitize, summarize};
use serde_json::{Value, json};

fn plain() -> RenderOptions {
    RenderOptions::plain()
}

/// A mapping-shaped payload flows sanitize -> tree and drops everything
/// without substance along the way.
#[test]
fn detail_payload_renders_only_substantive_branches() {
    let payload = json!({
        "name": "Alice Example",
        "emails": [],
        "profiles": {
            "github": {"url": "https://github.com/alice", "bio": ""},
            "dead": {"url": null},
        },
        "score": 0,
    });

    let clean = sanitize(&payload).expect("payload has substance");
    let lines = render_tree(&clean, &plain());

    assert_eq!(lines[0], "Name: Alice Example");
    assert!(lines.contains(&"▸ Profiles:".to_string()));
    assert!(lines.contains(&"  ▸ Github:".to_string()));
    assert!(lines.contains(&"    Url: 🔗 https://github.com/alice".to_string()));
    // The zero survives: 0 is data, not emptiness.
    assert!(lines.contains(&"Score: 0".to_string()));
    // The hollow profile and the empty sequence leave no trace.
    assert!(lines.iter().all(|l| !l.contains("Dead") && !l.contains("Emails")));
}

/// A sequence-shaped payload flows straight into the platform report.
#[test]
fn platform_payload_renders_cards_then_collapsed_misses() {
    let records = vec![
        json!({
            "module": "twitter",
            "status": "found",
            "spec_format": [{
                "username": {"value": "alice"},
                "verified": true,
                "followers": 512,
            }],
            "front_schemas": [{"image": "https://cdn.example.com/alice.jpg"}],
            "reliable_source": true,
        }),
        json!({"module": "github", "status": "not_found"}),
        json!({"module": "gitlab", "status": "not_found"}),
    ];

    let lines = summarize(&records, &plain());
    let joined = lines.join("\n");

    assert!(joined.contains("✓ Found on 1 platform(s)"));
    assert!(joined.contains("✗ Not found on 2 platform(s)"));
    assert!(joined.contains("📝 Total platforms checked: 3"));
    assert!(joined.contains("[1/1]"));
    assert!(joined.contains("TWITTER"));
    assert!(joined.contains("✓ FOUND"));
    assert!(joined.contains("👤 Username: alice"));
    assert!(joined.contains("✓ Verified: ✓"));
    assert!(joined.contains("👥 Followers: 512"));
    assert!(joined.contains("🖼️ Profile Image: https://cdn.example.com/alice.jpg"));
    assert!(joined.contains("✓ Verified/Reliable Source"));
    assert!(joined.contains("❌ Not found on: Github, Gitlab"));
}

/// Sanitization is idempotent over an awkward, deeply mixed tree.
#[test]
fn sanitize_is_idempotent_over_mixed_trees() {
    let payload = json!({
        "breaches": [
            {"name": "OldForum", "date": "", "classes": ["email", "", "password"]},
            {"name": null},
            [],
        ],
        "meta": {"checked": 120, "flags": {"stale": false}},
        "noise": {"a": {"b": {"c": null}}},
    });

    let once = sanitize(&payload).expect("substance remains");
    assert_eq!(sanitize(&once), Some(once.clone()));

    let breaches = once.get("breaches").and_then(Value::as_array).unwrap();
    assert_eq!(breaches.len(), 1);
    assert!(once.get("noise").is_none());
}

/// Rendering never mutates its input.
#[test]
fn rendering_leaves_the_input_tree_untouched() {
    let payload = json!({"profile": {"name": "alice", "tags": ["a", "b"]}});
    let before = payload.clone();

    let clean = sanitize(&payload).unwrap();
    let _ = render_tree(&clean, &plain());
    let _ = render_tree(&clean, &RenderOptions::colored());

    assert_eq!(payload, before);
}
