use crate::views::credits;
use idlens_engine::RenderOptions;
use serde_json::Value;

/// Main menu block: credit balance first, then the numbered options.
pub fn print_menu(credit_info: Option<&Value>, opts: &RenderOptions) {
    println!();
    match credit_info.and_then(credits::remaining) {
        Some(count) => {
            println!("{}", opts.accent(&format!("╔{}╗", "═".repeat(78))));
            println!(
                "{}  {}",
                opts.accent("║"),
                credits::painted_balance(count, opts)
            );
            println!("{}", opts.accent(&format!("╚{}╝", "═".repeat(78))));
        }
        None => println!("{}", opts.bad("⚠ Unable to fetch credit information")),
    }

    println!();
    println!("{}", opts.accent(&format!("╔{}╗", "═".repeat(78))));
    println!("{}  {}", opts.accent("║"), opts.emph("SEARCH OPTIONS"));
    println!("{}", opts.accent(&format!("╠{}╣", "═".repeat(78))));
    println!(
        "   {} 👤 Username Search          {} 👥 Person Search (Name)",
        opts.section("[1]"),
        opts.section("[4]")
    );
    println!(
        "   {} 📧 Email Search             {} 💰 Cryptocurrency Wallet",
        opts.section("[2]"),
        opts.section("[5]")
    );
    println!(
        "   {} 📱 Phone Number Search      {} 🚪 Exit",
        opts.section("[3]"),
        opts.bad("[0]")
    );
    println!("{}", opts.accent(&format!("╚{}╝", "═".repeat(78))));
}

pub fn print_goodbye(opts: &RenderOptions) {
    println!();
    println!("{}", opts.accent(&"═".repeat(80)));
    println!("{}", opts.accent("  Thank you for using idlens."));
    println!("{}", opts.accent(&"═".repeat(80)));
}
