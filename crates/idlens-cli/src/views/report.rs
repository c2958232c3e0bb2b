use idlens_engine::{RenderOptions, render_tree, sanitize, summarize};
use serde_json::Value;

/// Print the full report for one decoded payload.
///
/// Sequence-shaped payloads get the partitioned platform report; mapping
/// payloads are sanitized and walked as a generic tree. Anything else
/// (a bare scalar answer) has nothing to lay out and prints only the
/// frame.
pub fn print_report(payload: &Value, heading: &str, target: &str, opts: &RenderOptions) {
    println!();
    println!("{}", opts.accent(&"═".repeat(80)));
    println!(
        "{} {}",
        opts.accent("║"),
        opts.emph(&format!("SEARCH RESULTS: {}", heading.to_uppercase()))
    );
    println!("{}", opts.accent(&format!("╚{}╝", "═".repeat(78))));
    println!();
    println!("{} {}", opts.accent("Target:"), opts.emph(target));

    match payload {
        Value::Array(records) => {
            for line in summarize(records, opts) {
                println!("{}", line);
            }
        }
        Value::Object(entries) => {
            println!();
            println!("{}", opts.ok(&format!("📊 Found {} data point(s)", entries.len())));
            println!();
            println!("{}", opts.warn(&"─".repeat(80)));
            println!("{}", opts.accent("📋 Detailed Information"));
            println!("{}", opts.warn(&"─".repeat(80)));
            match sanitize(payload) {
                Some(clean) => {
                    for line in render_tree(&clean, opts) {
                        println!("{}", line);
                    }
                }
                None => println!("{}", opts.dim("(no substantive data)")),
            }
        }
        _ => {}
    }

    println!();
    println!("{}", opts.warn(&"─".repeat(80)));
}
