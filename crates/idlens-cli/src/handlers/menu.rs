use crate::handlers;
use crate::types::SearchKind;
use crate::ui::prompt;
use crate::ui::spinner::Spinner;
use crate::views;
use anyhow::Result;
use idlens_engine::RenderOptions;
use std::io::Write;
use std::time::Duration;

/// Interactive loop: banner, credit balance, numbered search options.
pub fn handle(base_url: Option<String>, opts: &RenderOptions) -> Result<()> {
    let client = crate::commands::connect(base_url)?;

    loop {
        clear_screen();
        views::banner::print_banner(opts);

        let spinner = Spinner::start("Checking API credits...", opts.enable_color);
        let credit_info = client.credits();
        spinner.stop();
        views::menu::print_menu(credit_info.as_ref().ok(), opts);

        let choice = prompt::read_line("\n➤ Enter your choice (0-5): ")?;
        match choice.as_str() {
            "0" => {
                views::menu::print_goodbye(opts);
                return Ok(());
            }
            "1" | "2" | "3" | "4" | "5" => {
                let kind = match choice.as_str() {
                    "1" => SearchKind::Username,
                    "2" => SearchKind::Email,
                    "3" => SearchKind::Phone,
                    "4" => SearchKind::Person,
                    _ => SearchKind::Crypto,
                };

                let query =
                    prompt::read_line(&format!("\n➤ Enter {} to search: ", kind.menu_label()))?;
                if query.is_empty() {
                    println!("{}", opts.bad("✗ Search query cannot be empty."));
                    std::thread::sleep(Duration::from_secs(2));
                    continue;
                }
                if !prompt::confirm(&format!("➤ Search for '{}'? (y/n): ", query))? {
                    continue;
                }
                println!();

                // Upstream failures were already shown through the error
                // view; stay in the menu either way.
                let _ = handlers::lookup::handle(&client, kind, &query, None, false, opts);

                prompt::read_line("\nPress Enter to return to main menu...")?;
            }
            _ => {
                println!("{}", opts.bad("✗ Invalid choice. Please select 0-5."));
                std::thread::sleep(Duration::from_millis(1500));
            }
        }
    }
}

fn clear_screen() {
    print!("\x1b[2J\x1b[1;1H");
    let _ = std::io::stdout().flush();
}
